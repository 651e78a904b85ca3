//! File-based tracing setup
//!
//! The dashboard owns the terminal, so nothing may be written to stdout while
//! it runs. Logs go to a daily-rolling file in the session directory instead.

use crate::config::{DashboardConfig, LogFormat};
use crate::error::{Error, Result};

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Base directory for per-session log directories
pub const DEFAULT_LOG_ROOT: &str = "/tmp/opti-transit";

/// File name prefix for the rolling log file
pub const LOG_FILE_PREFIX: &str = "dashboard.log";

/// Directory logs for this session are written to.
#[must_use]
pub fn log_dir(config: &DashboardConfig, session_id: &str) -> PathBuf {
    config
        .log_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_ROOT).join(session_id))
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
///
/// # Errors
///
/// Returns an error if the configured directive is invalid.
pub fn env_filter(config: &DashboardConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| Error::Logging(format!("invalid filter '{}': {e}", config.log_level)))
}

/// Background writer for the rolling log file in `dir`.
///
/// Lines are queued until the guard is dropped, which flushes them.
#[must_use]
pub fn file_writer(dir: &Path) -> (NonBlocking, WorkerGuard) {
    tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
}

/// Install the global tracing subscriber.
///
/// The returned guard flushes the background writer when dropped and must be
/// held for the lifetime of the process.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init_logging(config: &DashboardConfig, session_id: &str) -> Result<WorkerGuard> {
    let dir = log_dir(config, session_id);
    fs::create_dir_all(&dir).map_err(|source| Error::LogDir {
        path: dir.clone(),
        source,
    })?;

    let filter = env_filter(config)?;
    let (writer, guard) = file_writer(&dir);

    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(false);
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    }
    .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(guard)
}
