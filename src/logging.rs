//! File logging.
//!
//! One append-only file, no rotation. Each record carries a timestamp,
//! level and message. `RUST_LOG` overrides the configured level.

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("emojify={level}")))
}

/// Build a subscriber that appends to `path`. Records are written by a
/// background worker; keep the guard alive until the process exits or
/// buffered lines are lost.
pub fn file_subscriber(
    path: &Path,
    level: &str,
) -> Result<(impl tracing::Subscriber + Send + Sync + 'static, WorkerGuard)> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .finish();

    Ok((subscriber, guard))
}

/// Install the file subscriber as the global default.
pub fn init_logging(path: &Path, level: &str) -> Result<WorkerGuard> {
    let (subscriber, guard) = file_subscriber(path, level)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("failed to install logger: {e}"))?;
    Ok(guard)
}
