use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "wineai=info";
const LOG_FILE_PREFIX: &str = "wineai.log";

/// Installs the global subscriber.
///
/// Logs go to a daily-rolling file under `logs_dir` so the chat output stays
/// clean; `verbose` mirrors them to stderr. `RUST_LOG` overrides the default
/// filter. Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(logs_dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer().with_writer(file_writer).with_ansi(false);
    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_directory() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("nested").join("logs");

        let guard = init(&logs_dir, false).unwrap();
        tracing::info!("[Test] logging initialized");
        drop(guard);

        assert!(logs_dir.is_dir());
        // The global subscriber can only be installed once per process.
        assert!(init(&logs_dir, false).is_err());
    }
}
