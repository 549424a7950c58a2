//! Date and time utility functions
//!
//! This module is the local-zone facade: every function reads calendar and
//! clock values in the process's local zone (`chrono::Local`). Each one
//! delegates to the [`ZoneContext`] method of the same name, which accepts an
//! explicit zone instead.
//!
//! ```
//! use chrono::NaiveDate;
//! use localdate::utils::datetime;
//!
//! let start = NaiveDate::from_ymd_opt(2018, 11, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2018, 11, 18).unwrap();
//! assert_eq!(datetime::between_days(start, end), 17);
//! assert_eq!(datetime::between_days(end, start), 17);
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::Result;
use crate::format::DateFormat;
use crate::timestamp::Timestamp;
use crate::zone::ZoneContext;

pub use crate::constants::DEFAULT_DATE_TIME_PATTERN;
pub use crate::interval::{between_days, between_hours, between_millis, between_minutes, Interval};

fn local() -> ZoneContext<chrono::Local> {
    ZoneContext::local()
}

/// Current local date-time, e.g. `2018-11-18 10:10:10`
pub fn now_date_time() -> String {
    local().now_date_time()
}

/// Current local date-time in the given format
pub fn now_formatted(format: &DateFormat) -> String {
    local().now_formatted(format)
}

/// Current local date-time in a pattern such as `yyyyMMddHHmmss`
///
/// # Errors
/// * `TemporalError::InvalidPattern` - the pattern does not compile
pub fn now_formatted_with(pattern: &str) -> Result<String> {
    local().now_formatted_with(pattern)
}

/// Local wall-clock value of a timestamp, e.g. `2018-11-18 10:10:10`
pub fn format_date_time(timestamp: &Timestamp) -> String {
    local().format_date_time(timestamp)
}

/// Local wall-clock value of a timestamp in the given format
pub fn format_timestamp(timestamp: &Timestamp, format: &DateFormat) -> String {
    local().format_timestamp(timestamp, format)
}

/// Local wall-clock value of a timestamp in a pattern such as `yyyyMMddHHmmss`
pub fn format_timestamp_with(timestamp: &Timestamp, pattern: &str) -> Result<String> {
    local().format_timestamp_with(timestamp, pattern)
}

/// Whole calendar days between the local dates of two timestamps
pub fn between_days_timestamps(start: &Timestamp, end: &Timestamp) -> u64 {
    local().between_days_timestamps(start, end)
}

/// Whole hours between the local wall-clock values of two timestamps
pub fn between_hours_timestamps(start: &Timestamp, end: &Timestamp) -> u64 {
    local().between_hours_timestamps(start, end)
}

/// Whole minutes between the local wall-clock values of two timestamps
pub fn between_minutes_timestamps(start: &Timestamp, end: &Timestamp) -> u64 {
    local().between_minutes_timestamps(start, end)
}

/// Milliseconds between the local wall-clock values of two timestamps
pub fn between_millis_timestamps(start: &Timestamp, end: &Timestamp) -> u64 {
    local().between_millis_timestamps(start, end)
}

/// Check whether a date is today in the local zone
pub fn is_today(date: NaiveDate) -> bool {
    local().is_today(date)
}

/// Milliseconds since 1970-01-01T00:00:00Z of a local date-time
pub fn to_epoch_millis(date_time: &NaiveDateTime) -> Result<i64> {
    local().to_epoch_millis(date_time)
}

pub fn timestamp_to_date(timestamp: &Timestamp) -> NaiveDate {
    local().timestamp_to_date(timestamp)
}

pub fn timestamp_to_date_time(timestamp: &Timestamp) -> NaiveDateTime {
    local().timestamp_to_date_time(timestamp)
}

pub fn timestamp_to_time(timestamp: &Timestamp) -> NaiveTime {
    local().timestamp_to_time(timestamp)
}

/// Timestamp of local midnight at the start of `date`
pub fn date_to_timestamp(date: NaiveDate) -> Result<Timestamp> {
    local().date_to_timestamp(date)
}

pub fn date_time_to_timestamp(date_time: &NaiveDateTime) -> Result<Timestamp> {
    local().date_time_to_timestamp(date_time)
}

/// First second of the local day, `yyyy-MM-dd 00:00:00`
pub fn start_of_day(timestamp: &Timestamp) -> Result<Timestamp> {
    local().start_of_day(timestamp)
}

/// Last second of the local day, `yyyy-MM-dd 23:59:59`
pub fn end_of_day(timestamp: &Timestamp) -> Result<Timestamp> {
    local().end_of_day(timestamp)
}
