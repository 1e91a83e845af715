//! File-based logging setup.
//!
//! The TUI owns the terminal, so logs go to daily-rotated files under
//! `${POLDECK_HOME}/logs/` instead of stderr.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the global tracing subscriber.
///
/// The filter comes from `POLDECK_LOG` when set, else the config value.
/// Returns the appender guard; logs flush when it drops, so callers keep
/// it alive for the process lifetime.
pub fn init(default_filter: &str) -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "poldeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("POLDECK_LOG")
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Failed to parse log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
