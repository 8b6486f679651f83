//! Command-line interface.
//!
//! Every flag can also be set through an environment variable, so the game can
//! be configured without touching the command line.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::SessionConfig;

/// Exit code for bad command-line input.
pub const EXIT_USAGE: u8 = 1;

/// Exit code when the terminal cannot be set up.
pub const EXIT_SCREEN_INIT: u8 = 2;

const CONTROLS: &str = "\
Controls:
  W / Up             Move up
  A / Left           Move left
  S / Down           Move down
  D / Right          Move right
  R                  Start a new game
  Esc / Q / Ctrl-C   Exit";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "tui-2048",
    version,
    about = "2048 sliding-tile puzzle for the terminal",
    after_help = CONTROLS
)]
pub struct Cli {
    /// Base seed for reproducible games (default: wall clock)
    #[arg(long, env = "TUI_2048_SEED", value_name = "N")]
    pub seed: Option<u64>,

    /// Write rotated log files into this directory; logging is off without it
    #[arg(long, env = "TUI_2048_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level spec such as "info" or "debug" (RUST_LOG takes precedence)
    #[arg(long, env = "TUI_2048_LOG", default_value = "info", value_name = "SPEC")]
    pub log_level: String,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig { seed: self.seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_seed_and_log_flags() {
        let cli = Cli::try_parse_from([
            "tui-2048",
            "--seed",
            "42",
            "--log-dir",
            "/tmp/logs",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.session_config(), SessionConfig { seed: Some(42) });
    }

    #[test]
    fn rejects_bad_seed_and_unknown_args() {
        assert!(Cli::try_parse_from(["tui-2048", "--seed", "abc"]).is_err());
        assert!(Cli::try_parse_from(["tui-2048", "--size", "5"]).is_err());
    }

    #[test]
    fn help_lists_controls() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("Controls:"));
        assert!(help.contains("Esc / Q / Ctrl-C"));
    }
}
