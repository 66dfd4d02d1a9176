//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it only logs when a log file is given.
//! The line-by-line front end logs to stderr otherwise.

use std::fs::OpenOptions;

use anyhow::{Context, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Frontend};

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "LEADQUIZ_LOG";

fn filter(cli: &Cli) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(cli.log_level())
            .with_context(|| format!("invalid log filter '{}'", cli.log_level())),
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file logs are flushed.
pub fn init(cli: &Cli) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = filter(cli)?;

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!(e))?;
        return Ok(Some(guard));
    }

    if cli.frontend == Frontend::Cli {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!(e))?;
    }
    Ok(None)
}
