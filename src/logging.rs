use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, SettingsError};

/// Set up file logging under the config directory. The TUI owns stdout,
/// so nothing may log there. The returned guard must stay alive for the
/// duration of the program or buffered lines are lost.
pub fn init(log_path: &Path, log_level: &str) -> Result<WorkerGuard> {
    let dir = log_path
        .parent()
        .ok_or_else(|| SettingsError::Config("Log path has no parent directory".to_string()))?;
    std::fs::create_dir_all(dir)
        .map_err(|e| SettingsError::Config(format!("Failed to create log dir: {}", e)))?;

    let file_name = log_path
        .file_name()
        .ok_or_else(|| SettingsError::Config("Log path has no file name".to_string()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
