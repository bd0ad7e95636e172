//! Maps validated CLI arguments to the action the binary runs.

use crate::cli::{
    actions::{Action, server::Args},
    commands::{ARG_DIST, ARG_PORT},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let dist = matches
        .get_one::<String>(ARG_DIST)
        .map(PathBuf::from)
        .context("missing required argument: --dist")?;

    Ok(Action::Server(Args { port, dist }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_action_from_args() {
        let matches = crate::cli::commands::new().get_matches_from(vec![
            "payfee",
            "-p",
            "9000",
            "--dist",
            "web/dist",
        ]);
        let Action::Server(args) = handler(&matches).unwrap();
        assert_eq!(args.port, 9000);
        assert_eq!(args.dist, PathBuf::from("web/dist"));
    }
}
