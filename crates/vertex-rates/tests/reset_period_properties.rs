//! Property-based tests for reset period chronology.
//!
//! For any three dates, construction succeeds exactly when both the start
//! date and the fixing date fall strictly before the end date.

use proptest::prelude::*;
use vertex_core::Date;
use vertex_rates::{RateError, ResetPeriod};

fn date_strategy() -> impl Strategy<Value = Date> {
    (2000i32..2040i32, 1u32..13u32, 1u32..29u32)
        .prop_map(|(year, month, day)| Date::from_ymd(year, month, day).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_valid_triples_round_trip(
        start in date_strategy(),
        length in 1i64..400i64,
        fixing_offset in 1i64..800i64,
    ) {
        let end = start.add_days(length);
        let fixing = end.add_days(-fixing_offset);

        let period = ResetPeriod::of(start, end, fixing).unwrap();
        prop_assert_eq!(period.start_date(), start);
        prop_assert_eq!(period.end_date(), end);
        prop_assert_eq!(period.fixing_date(), fixing);
        prop_assert!(period.days() > 0);
    }

    #[test]
    fn test_out_of_order_triples_rejected(
        start in date_strategy(),
        end in date_strategy(),
        fixing in date_strategy(),
    ) {
        prop_assume!(start >= end || fixing >= end);

        let result = ResetPeriod::of(start, end, fixing);
        let rejected = matches!(result, Err(RateError::ScheduleOrder { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn test_fixing_before_start_is_accepted(
        start in date_strategy(),
        lag in 1i64..10i64,
        length in 1i64..400i64,
    ) {
        let end = start.add_days(length);
        let fixing = start.add_days(-lag);
        prop_assert!(ResetPeriod::of(start, end, fixing).is_ok());
    }
}

#[test]
fn test_documented_scenarios() {
    let jan1 = Date::from_ymd(2015, 1, 1).unwrap();
    let apr1 = Date::from_ymd(2015, 4, 1).unwrap();
    let dec30 = Date::from_ymd(2014, 12, 30).unwrap();

    assert!(ResetPeriod::of(jan1, apr1, dec30).is_ok());
    assert!(ResetPeriod::of(jan1, jan1, dec30).unwrap_err().is_schedule_order());
}
