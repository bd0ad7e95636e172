pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";
pub const ARG_DIST: &str = "dist";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("payfee")
        .about("Student loan financing portal")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PAYFEE_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DIST)
                .long("dist")
                .help("Directory holding the built web app (index.html, wasm, assets)")
                .default_value("apps/web/dist")
                .env("PAYFEE_DIST"),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "payfee");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Student loan financing portal".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("PAYFEE_PORT", None::<&str>),
                ("PAYFEE_DIST", None),
                ("PAYFEE_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["payfee"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
                assert_eq!(
                    matches.get_one::<String>(ARG_DIST).map(String::as_str),
                    Some("apps/web/dist")
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(0)
                );
            },
        );
    }

    #[test]
    fn test_check_args() {
        let matches =
            new().get_matches_from(vec!["payfee", "--port", "3000", "--dist", "/srv/payfee"]);

        assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(3000));
        assert_eq!(
            matches.get_one::<String>(ARG_DIST).map(String::as_str),
            Some("/srv/payfee")
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("PAYFEE_PORT", Some("443")),
                ("PAYFEE_DIST", Some("/var/www/payfee")),
                ("PAYFEE_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["payfee"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_DIST).map(String::as_str),
                    Some("/var/www/payfee")
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, level) in levels.into_iter().enumerate() {
            temp_env::with_var("PAYFEE_LOG_LEVEL", Some(level), || {
                let matches = new().get_matches_from(vec!["payfee"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for count in 1..=4usize {
            temp_env::with_var("PAYFEE_LOG_LEVEL", None::<&str>, || {
                let flag = format!("-{}", "v".repeat(count));
                let matches = new().get_matches_from(vec!["payfee".to_string(), flag]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(count).ok()
                );
            });
        }
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = new().try_get_matches_from(vec!["payfee", "--port", "http"]);
        assert!(result.is_err());
    }
}
