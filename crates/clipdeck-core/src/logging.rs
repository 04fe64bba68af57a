//! File logging.
//!
//! The terminal belongs to the TUI, so log output goes to a daily rolling
//! file under `<CLIPDECK_HOME>/logs`. The filter comes from `CLIPDECK_LOG`
//! (same syntax as `RUST_LOG`), defaulting to `info`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "CLIPDECK_LOG";
const LOG_FILE_PREFIX: &str = "clipdeck.log";
const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `CLIPDECK_LOG`, falling back to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to `dir`.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the directory cannot be created or a global
/// subscriber is already installed.
pub fn init_file_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::debug!(dir = %dir.display(), "file logging initialized");
    Ok(guard)
}

/// Installs file logging under the default logs directory.
///
/// Failures are reported on stderr and otherwise ignored; logging is
/// never a reason to refuse to start.
pub fn init_default() -> Option<WorkerGuard> {
    let dir = crate::config::paths::logs_dir();
    match init_file_logging(&dir) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    /// Test: the first init creates the log directory; a second init is
    /// refused because the global subscriber is already set.
    #[test]
    fn test_init_file_logging_once() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("logs");

        let guard = init_file_logging(&logs).unwrap();
        assert!(logs.is_dir());
        tracing::info!("hello from the test");

        assert!(init_file_logging(&logs).is_err());
        drop(guard);
    }
}
