//! `-v` / `PAYFEE_LOG_LEVEL`. The flag is counted; the variable takes either a
//! level name or the same count as a number.

use clap::{Arg, ArgAction, ArgMatches, Command, builder::ValueParser};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names indexed by the verbosity count they stand for.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Highest numeric verbosity accepted from the environment.
const MAX_VERBOSITY: u8 = 5;

fn parse_verbosity(value: &str) -> Result<u8, String> {
    if let Ok(count) = value.parse::<u8>() {
        return if count <= MAX_VERBOSITY {
            Ok(count)
        } else {
            Err(format!("verbosity must be between 0 and {MAX_VERBOSITY}"))
        };
    }

    LEVEL_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(value.trim()))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!(
                "unknown log level `{value}`, expected one of: {}",
                LEVEL_NAMES.join(", ")
            )
        })
}

/// Level for a verbosity count. `None` keeps the subscriber's `error` default;
/// counts past `trace` stay at `trace`.
#[must_use]
pub const fn level_for(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Level requested on the command line or through the environment.
#[must_use]
pub fn level(matches: &ArgMatches) -> Option<Level> {
    level_for(matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0))
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Raise log verbosity; repeat for more (error, warn, info, debug, trace)")
            .env("PAYFEE_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(ValueParser::new(parse_verbosity)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_numbers_share_one_scale() {
        for (index, name) in LEVEL_NAMES.into_iter().enumerate() {
            let expected = u8::try_from(index).ok();
            assert_eq!(parse_verbosity(name).ok(), expected, "{name}");
            assert_eq!(parse_verbosity(&name.to_uppercase()).ok(), expected);
        }
        assert_eq!(parse_verbosity("5"), Ok(5));
        assert!(parse_verbosity("6").is_err());
        assert!(parse_verbosity("loud").is_err());
    }

    #[test]
    fn counts_map_to_levels() {
        assert_eq!(level_for(0), None);
        assert_eq!(level_for(1), Some(Level::WARN));
        assert_eq!(level_for(2), Some(Level::INFO));
        assert_eq!(level_for(3), Some(Level::DEBUG));
        assert_eq!(level_for(4), Some(Level::TRACE));
        assert_eq!(level_for(MAX_VERBOSITY), Some(Level::TRACE));
    }

    #[test]
    fn level_reads_the_counted_flag() {
        temp_env::with_var("PAYFEE_LOG_LEVEL", None::<&str>, || {
            let command = with_args(Command::new("payfee"));
            let matches = command.get_matches_from(vec!["payfee", "-vv"]);
            assert_eq!(level(&matches), Some(Level::INFO));
        });
    }
}
