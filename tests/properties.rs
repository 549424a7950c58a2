use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use localdate::interval::{between_days, between_hours, between_millis, between_minutes};
use localdate::ZoneContext;
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 .. roughly 2200
    (0i64..110_000).prop_map(|days| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(days))
}

fn arb_date_time() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0u32..86_400, 0u32..1_000).prop_map(|(date, secs, millis)| {
        date.and_hms_milli_opt(secs / 3600, (secs / 60) % 60, secs % 60, millis)
            .unwrap()
    })
}

fn arb_offset() -> impl Strategy<Value = FixedOffset> {
    (-12 * 4i32..=14 * 4).prop_map(|quarters| FixedOffset::east_opt(quarters * 15 * 60).unwrap())
}

proptest! {
    #[test]
    fn between_days_is_order_invariant(a in arb_date(), b in arb_date()) {
        prop_assert_eq!(between_days(a, b), between_days(b, a));
    }

    #[test]
    fn elapsed_units_are_order_invariant(a in arb_date_time(), b in arb_date_time()) {
        prop_assert_eq!(between_hours(&a, &b), between_hours(&b, &a));
        prop_assert_eq!(between_minutes(&a, &b), between_minutes(&b, &a));
        prop_assert_eq!(between_millis(&a, &b), between_millis(&b, &a));
    }

    #[test]
    fn elapsed_units_are_consistent(a in arb_date_time(), b in arb_date_time()) {
        let millis = between_millis(&a, &b);
        prop_assert_eq!(between_minutes(&a, &b), millis / 60_000);
        prop_assert_eq!(between_hours(&a, &b), millis / 3_600_000);
    }

    #[test]
    fn date_time_round_trips_through_timestamp(value in arb_date_time(), offset in arb_offset()) {
        let ctx = ZoneContext::new(offset);
        let ts = ctx.date_time_to_timestamp(&value).unwrap();
        prop_assert_eq!(ctx.timestamp_to_date_time(&ts), value);
        prop_assert_eq!(ctx.to_epoch_millis(&value).unwrap(), ts.epoch_millis());
    }

    #[test]
    fn day_boundaries_stay_on_same_local_day(value in arb_date_time(), offset in arb_offset()) {
        let ctx = ZoneContext::new(offset);
        let ts = ctx.date_time_to_timestamp(&value).unwrap();

        let start = ctx.timestamp_to_date_time(&ctx.start_of_day(&ts).unwrap());
        prop_assert_eq!(start.date(), value.date());
        prop_assert_eq!((start.hour(), start.minute(), start.second(), start.nanosecond()), (0, 0, 0, 0));

        let end = ctx.timestamp_to_date_time(&ctx.end_of_day(&ts).unwrap());
        prop_assert_eq!(end.date(), value.date());
        prop_assert_eq!((end.hour(), end.minute(), end.second(), end.nanosecond()), (23, 59, 59, 0));
    }
}
