//! Constants used throughout the library
//!
//! This module centralizes default patterns, file names and other constant
//! values shared by the formatting, configuration and logging layers.

// Formatting
/// Default date-time pattern in the letter pattern language.
pub const DEFAULT_DATE_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";
/// chrono strftime equivalent of [`DEFAULT_DATE_TIME_PATTERN`].
pub const DEFAULT_DATE_TIME_STRFTIME: &str = "%Y-%m-%d %H:%M:%S";

// Day boundaries
/// Clock value used by the end-of-day helper. Second granularity.
pub const END_OF_DAY_HOUR: u32 = 23;
pub const END_OF_DAY_MINUTE: u32 = 59;
pub const END_OF_DAY_SECOND: u32 = 59;

// Configuration
pub const APP_DIR_NAME: &str = "localdate";
pub const CONFIG_FILE_NAME: &str = "localdate.toml";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";
pub const ZONE_LOCAL: &str = "local";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Logging
pub const LOG_FILE_NAME: &str = "localdate.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
