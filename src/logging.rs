//! Log setup.
//!
//! The game owns the terminal, so log records only ever go to rotated files.
//! Without a log directory nothing is installed and `log` macros are no-ops.

use anyhow::{Context, Result};
use flexi_logger::{detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::cli::Cli;

const LOG_BASENAME: &str = "tui-2048";
const ROTATE_BYTES: u64 = 1024 * 1024;
const KEEP_FILES: usize = 3;

/// Start file logging if the CLI asked for it.
///
/// The returned handle must be kept alive for as long as records should be written.
pub fn init(cli: &Cli) -> Result<Option<LoggerHandle>> {
    let Some(dir) = cli.log_dir.clone() else {
        return Ok(None);
    };

    let handle = Logger::try_with_env_or_str(&cli.log_level)
        .with_context(|| format!("invalid log level spec {:?}", cli.log_level))?
        .log_to_file(FileSpec::default().directory(&dir).basename(LOG_BASENAME))
        .format(detailed_format)
        .rotate(
            Criterion::Size(ROTATE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_FILES),
        )
        .start()
        .with_context(|| format!("cannot start logging in {}", dir.display()))?;

    Ok(Some(handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn no_log_dir_means_no_logger() {
        let cli = Cli::try_parse_from(["tui-2048", "--log-level", "debug"]).unwrap();
        if cli.log_dir.is_none() {
            assert!(init(&cli).unwrap().is_none());
        }
    }
}
