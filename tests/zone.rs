use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use localdate::interval::{between_hours, between_minutes};
use localdate::{Timestamp, ZoneContext};

fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
}

fn shanghai() -> ZoneContext<FixedOffset> {
    ZoneContext::new(FixedOffset::east_opt(8 * 3600).unwrap())
}

#[test]
fn test_to_epoch_millis_fixed_offset() {
    let ctx = shanghai();
    let millis = ctx.to_epoch_millis(&date_time(2018, 11, 18, 10, 10, 10)).unwrap();
    assert_eq!(millis, 1_542_507_010_000);
}

#[test]
fn test_date_to_timestamp_fixed_offset() {
    let ctx = shanghai();
    let ts = ctx.date_to_timestamp(NaiveDate::from_ymd_opt(2018, 11, 18).unwrap()).unwrap();
    assert_eq!(ts.epoch_millis(), 1_542_470_400_000);
}

#[test]
fn test_same_timestamp_differs_across_zones() {
    let ts = Timestamp::from_epoch_millis(1_542_507_010_000).unwrap();
    let utc = ZoneContext::new(Utc);
    assert_eq!(shanghai().format_date_time(&ts), "2018-11-18 10:10:10");
    assert_eq!(utc.format_date_time(&ts), "2018-11-18 02:10:10");
}

#[test]
fn test_day_boundaries_follow_zone() {
    // 2018-11-17T20:00Z is already 2018-11-18 in UTC+8
    let ts = Timestamp::from(Utc.with_ymd_and_hms(2018, 11, 17, 20, 0, 0).unwrap());
    let ctx = shanghai();

    let start = ctx.start_of_day(&ts).unwrap();
    let end = ctx.end_of_day(&ts).unwrap();
    assert_eq!(ctx.format_date_time(&start), "2018-11-18 00:00:00");
    assert_eq!(ctx.format_date_time(&end), "2018-11-18 23:59:59");

    let utc = ZoneContext::new(Utc);
    assert_eq!(utc.format_date_time(&utc.start_of_day(&ts).unwrap()), "2018-11-17 00:00:00");
}

#[test]
fn test_end_of_day_is_one_second_short_of_next_day() {
    let ctx = shanghai();
    let ts = ctx.date_time_to_timestamp(&date_time(2018, 11, 18, 12, 0, 0)).unwrap();
    let end = ctx.end_of_day(&ts).unwrap();
    let next = ctx.date_to_timestamp(NaiveDate::from_ymd_opt(2018, 11, 19).unwrap()).unwrap();
    assert_eq!(next.epoch_millis() - end.epoch_millis(), 1000);
}

#[test]
fn test_is_today_in_zone() {
    let ctx = shanghai();
    assert!(ctx.is_today(ctx.today()));
    assert!(!ctx.is_today(NaiveDate::from_ymd_opt(2018, 11, 18).unwrap()));
}

#[test]
fn test_dst_gap_moves_forward() {
    let ctx = ZoneContext::new(Berlin);
    let ts = ctx.date_time_to_timestamp(&date_time(2018, 3, 25, 2, 30, 0)).unwrap();
    assert_eq!(ctx.timestamp_to_date_time(&ts), date_time(2018, 3, 25, 3, 30, 0));
    assert_eq!(ts.to_instant(), Utc.with_ymd_and_hms(2018, 3, 25, 1, 30, 0).unwrap());
}

#[test]
fn test_dst_overlap_uses_earlier_offset() {
    let ctx = ZoneContext::new(Berlin);
    let ts = ctx.date_time_to_timestamp(&date_time(2018, 10, 28, 2, 30, 0)).unwrap();
    assert_eq!(ts.to_instant(), Utc.with_ymd_and_hms(2018, 10, 28, 0, 30, 0).unwrap());
}

#[test]
fn test_hours_across_dst_change() {
    let ctx = ZoneContext::new(Berlin);
    let before = date_time(2018, 3, 25, 1, 0, 0);
    let after = date_time(2018, 3, 25, 4, 0, 0);

    // Wall-clock values differ by three hours
    assert_eq!(between_hours(&before, &after), 3);

    // Timestamps read back in the zone give the same wall-clock difference
    let start = ctx.date_time_to_timestamp(&before).unwrap();
    let end = ctx.date_time_to_timestamp(&after).unwrap();
    assert_eq!(ctx.between_hours_timestamps(&start, &end), 3);
    assert_eq!(ctx.between_minutes_timestamps(&end, &start), 180);
    assert_eq!(ctx.between_millis_timestamps(&start, &end), 10_800_000);

    // Only two hours actually elapsed between the instants
    assert_eq!(between_hours(&start, &end), 2);
    assert_eq!(between_minutes(&end, &start), 120);

    let zoned_start = ctx.resolve(&before).unwrap();
    let zoned_end = ctx.resolve(&after).unwrap();
    assert_eq!(between_hours(&zoned_start, &zoned_end), 2);
}

#[test]
fn test_start_of_day_on_dst_day() {
    let ctx = ZoneContext::new(Berlin);
    let ts = ctx.date_time_to_timestamp(&date_time(2018, 3, 25, 12, 0, 0)).unwrap();
    let start = ctx.start_of_day(&ts).unwrap();
    assert_eq!(ctx.timestamp_to_time(&start), NaiveTime::MIN);
    assert_eq!(ctx.between_days_timestamps(&start, &ts), 0);
}

#[test]
fn test_timestamp_differences_in_fixed_zone() {
    let ctx = shanghai();
    let start = ctx.date_time_to_timestamp(&date_time(2018, 11, 18, 10, 0, 0)).unwrap();
    let end = ctx.date_time_to_timestamp(&date_time(2018, 11, 18, 15, 30, 0)).unwrap();
    assert_eq!(ctx.between_hours_timestamps(&start, &end), 5);
    assert_eq!(ctx.between_hours_timestamps(&end, &start), 5);
    assert_eq!(ctx.between_minutes_timestamps(&start, &end), 330);
    assert_eq!(ctx.between_millis_timestamps(&end, &start), 19_800_000);
}
