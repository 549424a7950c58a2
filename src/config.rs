//! Configuration management for localdate
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATE_TIME_PATTERN, DEFAULT_LOG_LEVEL,
    XDG_CONFIG_FILE_NAME, ZONE_LOCAL,
};
use crate::format::DateFormat;
use crate::timestamp::Timestamp;
use crate::utils::datetime;
use crate::zone::ZoneContext;
use anyhow::{Context, Result};
use chrono::FixedOffset;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub zone: ZoneConfig,
    pub logging: LoggingConfig,
}

/// Formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Default date-time pattern, e.g. "yyyy-MM-dd HH:mm:ss"
    pub date_time_pattern: String,
}

/// Zone configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// "local" for the process zone, or a fixed offset such as "+08:00"
    pub offset: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Level filter: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_time_pattern: DEFAULT_DATE_TIME_PATTERN.to_string(),
        }
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            offset: ZONE_LOCAL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join(XDG_CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.date_format()?;
        self.fixed_offset()?;
        self.logging.level_filter()?;
        Ok(())
    }

    /// Compile the configured date-time pattern
    pub fn date_format(&self) -> Result<DateFormat> {
        DateFormat::of_pattern(&self.format.date_time_pattern)
            .with_context(|| format!("Invalid date_time_pattern '{}'", self.format.date_time_pattern))
    }

    /// The configured fixed offset, or `None` for the process zone
    pub fn fixed_offset(&self) -> Result<Option<FixedOffset>> {
        let offset = self.zone.offset.trim();
        if offset.eq_ignore_ascii_case(ZONE_LOCAL) {
            return Ok(None);
        }

        offset
            .parse::<FixedOffset>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid zone offset '{}': {}", self.zone.offset, e))
    }

    /// Zone context for the configured fixed offset, or `None` for the process zone
    pub fn zone_context(&self) -> Result<Option<ZoneContext<FixedOffset>>> {
        Ok(self.fixed_offset()?.map(ZoneContext::new))
    }

    /// Format a timestamp with the configured pattern in the configured zone
    pub fn format_timestamp(&self, timestamp: &Timestamp) -> Result<String> {
        let format = self.date_format()?;
        let formatted = match self.zone_context()? {
            Some(ctx) => ctx.format_timestamp(timestamp, &format),
            None => datetime::format_timestamp(timestamp, &format),
        };
        Ok(formatted)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# localdate Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(XDG_CONFIG_FILE_NAME))
    }
}
