//! Interval arithmetic between two points in time.
//!
//! All results are magnitudes: the signed difference is computed first,
//! truncated toward zero in the requested unit, and then its absolute value is
//! taken, so argument order never matters.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone};

use crate::timestamp::Timestamp;

/// A point in time that can measure elapsed time to another of its kind.
pub trait Interval {
    /// Signed elapsed time from `self` to `end`.
    fn elapsed_until(&self, end: &Self) -> Duration;
}

impl Interval for NaiveDateTime {
    fn elapsed_until(&self, end: &Self) -> Duration {
        end.signed_duration_since(*self)
    }
}

impl<Tz: TimeZone> Interval for DateTime<Tz> {
    fn elapsed_until(&self, end: &Self) -> Duration {
        end.clone() - self.clone()
    }
}

// Zone-free: real time elapsed between the two instants. The zone-routed
// wall-clock variants live on `ZoneContext::between_*_timestamps`.
impl Interval for Timestamp {
    fn elapsed_until(&self, end: &Self) -> Duration {
        end.to_instant() - self.to_instant()
    }
}

/// Whole calendar days between two dates.
#[must_use]
pub fn between_days(start: NaiveDate, end: NaiveDate) -> u64 {
    end.signed_duration_since(start).num_days().unsigned_abs()
}

/// Whole hours elapsed between two points.
#[must_use]
pub fn between_hours<T: Interval>(start: &T, end: &T) -> u64 {
    start.elapsed_until(end).num_hours().unsigned_abs()
}

/// Whole minutes elapsed between two points.
#[must_use]
pub fn between_minutes<T: Interval>(start: &T, end: &T) -> u64 {
    start.elapsed_until(end).num_minutes().unsigned_abs()
}

/// Milliseconds elapsed between two points.
#[must_use]
pub fn between_millis<T: Interval>(start: &T, end: &T) -> u64 {
    start.elapsed_until(end).num_milliseconds().unsigned_abs()
}
