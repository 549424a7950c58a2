//! File logging for applications embedding the library.
//!
//! The library itself only emits `log` records. [`init`] installs a `fern`
//! dispatcher that writes them to a log file when logging is enabled in the
//! configuration.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Install the global logger according to `config`.
///
/// Returns the log file path when logging was enabled, `None` otherwise.
/// Installing a second global logger fails.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    init_with_file(config, &path)?;
    Ok(Some(path))
}

/// Install the global logger writing to `path`, regardless of `config.enabled`.
pub fn init_with_file<P: AsRef<Path>>(config: &LoggingConfig, path: P) -> Result<()> {
    let level = config.level_filter()?;
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .context("Failed to install logger")?;

    log::debug!("Logging to {}", path.display());
    Ok(())
}

/// Default log file location under the platform's local data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
