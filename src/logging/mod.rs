//! Application logging functionality
//!
//! Installs the tracing subscriber and manages the log directory. Logs go to
//! stderr so stdout stays free for command output.

use crate::core::config::ConfigFile;
use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "fwl-theme.log";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> Result<PathBuf> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)?;
    Ok(logs_dir)
}

/// Filter from `RUST_LOG`, else from `level`, else `info`
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    filter_for_level(level.unwrap_or(DEFAULT_LOG_LEVEL))
}

fn filter_for_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| anyhow!("Invalid log filter '{}': {}", level, e))
}

/// Install the global subscriber.
///
/// With `log_to_file` the output goes to a daily rolling file in
/// ~/.config/fwl-theme/logs/ instead of stderr. The returned guard flushes
/// that file when dropped, so keep it alive until exit.
pub fn init(level: Option<&str>, log_to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(level)?;

    if log_to_file {
        let dir = initialize_logs_directory()?;
        let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
        tracing::info!("Logging to {:?}", dir);
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
        Ok(None)
    }
}
