//! Error types for date/time conversions and formatting.

/// Errors raised by formatting and zone conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    #[error("Invalid format pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

impl TemporalError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used across the library API.
pub type Result<T> = std::result::Result<T, TemporalError>;
