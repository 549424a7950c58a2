//! Zone-bound conversions between timestamps and wall-clock values.
//!
//! A [`ZoneContext`] attaches a zone at the conversion boundary:
//! `Timestamp -> instant -> zone -> NaiveDate/NaiveDateTime/NaiveTime`, and the
//! reverse `wall-clock value -> zone -> instant -> Timestamp`. The free
//! functions in [`crate::utils::datetime`] use the process zone; build a context
//! with an explicit zone when results must not depend on the environment.
//!
//! Wall-clock values that fall in a DST gap are moved forward by the length of
//! the gap. Values in an overlap take the earlier offset.

use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use log::debug;

use crate::constants::{END_OF_DAY_HOUR, END_OF_DAY_MINUTE, END_OF_DAY_SECOND};
use crate::error::{Result, TemporalError};
use crate::format::{DateFormat, DATETIME_FORMAT};
use crate::interval;
use crate::timestamp::Timestamp;

/// Conversion context bound to one time zone.
#[derive(Debug, Clone)]
pub struct ZoneContext<Tz: TimeZone> {
    tz: Tz,
}

impl ZoneContext<Local> {
    /// Context bound to the process's local zone.
    #[must_use]
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl Default for ZoneContext<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> ZoneContext<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn zone(&self) -> &Tz {
        &self.tz
    }

    /// Current instant in this zone.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }

    /// Current calendar date in this zone.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current date-time as `yyyy-MM-dd HH:mm:ss`.
    pub fn now_date_time(&self) -> String {
        self.now_formatted(&DATETIME_FORMAT)
    }

    pub fn now_formatted(&self, format: &DateFormat) -> String {
        format.format(&self.now().naive_local())
    }

    /// Current date-time in a caller-supplied pattern, compiled on each call.
    pub fn now_formatted_with(&self, pattern: &str) -> Result<String> {
        let format = DateFormat::of_pattern(pattern)?;
        Ok(self.now_formatted(&format))
    }

    /// Local wall-clock value of `timestamp` as `yyyy-MM-dd HH:mm:ss`.
    pub fn format_date_time(&self, timestamp: &Timestamp) -> String {
        self.format_timestamp(timestamp, &DATETIME_FORMAT)
    }

    pub fn format_timestamp(&self, timestamp: &Timestamp, format: &DateFormat) -> String {
        format.format(&self.timestamp_to_date_time(timestamp))
    }

    pub fn format_timestamp_with(&self, timestamp: &Timestamp, pattern: &str) -> Result<String> {
        let format = DateFormat::of_pattern(pattern)?;
        Ok(self.format_timestamp(timestamp, &format))
    }

    /// Whole calendar days between the local dates of two timestamps.
    pub fn between_days_timestamps(&self, start: &Timestamp, end: &Timestamp) -> u64 {
        interval::between_days(self.timestamp_to_date(start), self.timestamp_to_date(end))
    }

    /// Whole hours between the wall-clock values of two timestamps in this zone.
    ///
    /// Across a DST change this counts clock hours, not elapsed hours; use
    /// [`interval::between_hours`] on the timestamps for elapsed time.
    pub fn between_hours_timestamps(&self, start: &Timestamp, end: &Timestamp) -> u64 {
        interval::between_hours(&self.timestamp_to_date_time(start), &self.timestamp_to_date_time(end))
    }

    pub fn between_minutes_timestamps(&self, start: &Timestamp, end: &Timestamp) -> u64 {
        interval::between_minutes(&self.timestamp_to_date_time(start), &self.timestamp_to_date_time(end))
    }

    pub fn between_millis_timestamps(&self, start: &Timestamp, end: &Timestamp) -> u64 {
        interval::between_millis(&self.timestamp_to_date_time(start), &self.timestamp_to_date_time(end))
    }

    /// Whether `date` is today in this zone.
    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.today() == date
    }

    /// Milliseconds since the epoch of a wall-clock value read in this zone.
    pub fn to_epoch_millis(&self, date_time: &NaiveDateTime) -> Result<i64> {
        Ok(self.resolve(date_time)?.timestamp_millis())
    }

    pub fn timestamp_to_date(&self, timestamp: &Timestamp) -> NaiveDate {
        self.attach(timestamp).date_naive()
    }

    pub fn timestamp_to_date_time(&self, timestamp: &Timestamp) -> NaiveDateTime {
        self.attach(timestamp).naive_local()
    }

    pub fn timestamp_to_time(&self, timestamp: &Timestamp) -> NaiveTime {
        self.attach(timestamp).time()
    }

    /// Timestamp of the first instant of `date` in this zone.
    pub fn date_to_timestamp(&self, date: NaiveDate) -> Result<Timestamp> {
        self.date_time_to_timestamp(&date.and_time(NaiveTime::MIN))
    }

    pub fn date_time_to_timestamp(&self, date_time: &NaiveDateTime) -> Result<Timestamp> {
        Ok(Timestamp::from(self.resolve(date_time)?))
    }

    /// 00:00:00 of the local calendar day containing `timestamp`.
    pub fn start_of_day(&self, timestamp: &Timestamp) -> Result<Timestamp> {
        self.date_to_timestamp(self.timestamp_to_date(timestamp))
    }

    /// 23:59:59 of the local calendar day containing `timestamp`.
    ///
    /// Second granularity: the last 999 milliseconds of the day are not covered.
    pub fn end_of_day(&self, timestamp: &Timestamp) -> Result<Timestamp> {
        let date = self.timestamp_to_date(timestamp);
        let last_second = NaiveTime::from_hms_opt(END_OF_DAY_HOUR, END_OF_DAY_MINUTE, END_OF_DAY_SECOND)
            .ok_or_else(|| TemporalError::OutOfRange("end-of-day clock value".to_string()))?;
        self.date_time_to_timestamp(&date.and_time(last_second))
    }

    fn attach(&self, timestamp: &Timestamp) -> DateTime<Tz> {
        timestamp.to_instant().with_timezone(&self.tz)
    }

    /// Place a wall-clock value on the time line.
    pub fn resolve(&self, local: &NaiveDateTime) -> Result<DateTime<Tz>> {
        match self.tz.from_local_datetime(local) {
            LocalResult::Single(resolved) => Ok(resolved),
            LocalResult::Ambiguous(earliest, latest) => {
                debug!(
                    "{} is ambiguous ({} or {}), using the earlier offset",
                    local,
                    earliest.offset().fix(),
                    latest.offset().fix()
                );
                Ok(earliest)
            }
            LocalResult::None => self.resolve_gap(local),
        }
    }

    // The offset in force a day earlier is the one before the transition;
    // applying it moves the value forward by the length of the gap.
    fn resolve_gap(&self, local: &NaiveDateTime) -> Result<DateTime<Tz>> {
        let out_of_range = || TemporalError::OutOfRange(format!("{} cannot be placed in the zone", local));

        let day_before = local.checked_sub_signed(Duration::days(1)).ok_or_else(out_of_range)?;
        let before = self.tz.offset_from_utc_datetime(&day_before).fix();
        let utc = local
            .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))
            .ok_or_else(out_of_range)?;
        let shifted = self.tz.from_utc_datetime(&utc);

        if shifted.naive_local() < *local {
            return Err(out_of_range());
        }
        debug!("{} falls in a transition gap, shifted to {}", local, shifted.naive_local());
        Ok(shifted)
    }
}
