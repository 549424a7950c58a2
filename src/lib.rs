//! localdate - date/time conversion helpers over chrono
//!
//! This library formats the current time, measures intervals in days, hours,
//! minutes and milliseconds, and converts between an absolute [`Timestamp`]
//! and calendar/clock values. Conversions attach a zone only at the boundary:
//! the process's local zone by default, or any chrono zone through
//! [`ZoneContext`].
//!
//! # Modules
//!
//! * [`utils`] - Local-zone facade functions
//! * [`zone`] - Zone-bound conversion context
//! * [`interval`] - Elapsed-time arithmetic
//! * [`format`] - Format descriptors and pattern translation
//! * [`timestamp`] - The absolute timestamp type
//! * [`config`] - Configuration file loading
//! * [`logger`] - Optional file logging

/// Configuration module for default patterns, zone and logging
pub mod config;

/// Library constants and default values
pub mod constants;

/// Error types
pub mod error;

/// Format descriptors for wall-clock values
pub mod format;

/// Interval arithmetic between points in time
pub mod interval;

/// Logging setup backed by fern
pub mod logger;

/// Absolute timestamp type
pub mod timestamp;

/// Utility functions bound to the local zone
pub mod utils;

/// Zone-bound conversions
pub mod zone;

pub use error::{Result, TemporalError};
pub use format::{DateFormat, DATETIME_FORMAT};
pub use interval::Interval;
pub use timestamp::Timestamp;
pub use zone::ZoneContext;
