//! File logging setup.
//!
//! The TUI owns stdout and stderr, so diagnostics go to a rolling file under
//! ${PWX_HOME}/logs/. The RUST_LOG environment variable controls filtering.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Log file name prefix (the appender adds a date suffix).
const LOG_FILE_PREFIX: &str = "pwx.log";

/// Initializes file logging and returns the writer guard.
///
/// The guard flushes buffered lines when dropped, so the caller must keep it
/// alive for the lifetime of the process.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))?;

    Ok(guard)
}
