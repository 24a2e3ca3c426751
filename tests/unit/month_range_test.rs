// Property-based tests for month range expansion
//
// - Every month from start to end appears exactly once, in order
// - Consecutive months are calendar successors
// - The date window spans the first day of the start month to the last day of the end month
// - A reversed range is rejected

use chrono::{Datelike, Duration};
use consultant_performance::core::{AppError, MonthKey, MonthRange};
use proptest::prelude::*;

fn month_key() -> impl Strategy<Value = MonthKey> {
    (1990i32..2090, 1u32..=12).prop_map(|(y, m)| MonthKey::new(y, m).unwrap())
}

fn month_index(month: MonthKey) -> i64 {
    month.year() as i64 * 12 + month.month() as i64 - 1
}

proptest! {
    #[test]
    fn test_expansion_covers_every_month_once(
        from in month_key(),
        span in 0u32..120u32
    ) {
        let to = (0..span).fold(from, |m, _| m.succ().unwrap());
        let range = MonthRange::new(from, to).unwrap();
        let months = range.months();

        prop_assert_eq!(months.len() as i64, month_index(to) - month_index(from) + 1);
        prop_assert_eq!(months.first().copied(), Some(from));
        prop_assert_eq!(months.last().copied(), Some(to));

        for pair in months.windows(2) {
            prop_assert_eq!(pair[0].succ(), Some(pair[1]));
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_date_window_matches_month_bounds(
        from in month_key(),
        span in 0u32..36u32
    ) {
        let to = (0..span).fold(from, |m, _| m.succ().unwrap());
        let range = MonthRange::new(from, to).unwrap();
        let (start, end) = range.date_window();

        prop_assert_eq!(start.day(), 1);
        prop_assert_eq!(MonthKey::from_date(start), from);
        prop_assert_eq!(MonthKey::from_date(end), to);
        // the day after the window starts a new month
        prop_assert_eq!((end + Duration::days(1)).day(), 1);
    }

    #[test]
    fn test_reversed_range_is_rejected(
        a in month_key(),
        b in month_key()
    ) {
        prop_assume!(a != b);
        let (earlier, later) = if a < b { (a, b) } else { (b, a) };

        let result = MonthRange::new(later, earlier);
        prop_assert!(matches!(result, Err(AppError::InvalidRange { .. })), "expected InvalidRange error");
    }

    #[test]
    fn test_display_parse_round_trip(month in month_key()) {
        let parsed: MonthKey = month.to_string().parse().unwrap();
        prop_assert_eq!(parsed, month);
    }
}

#[test]
fn test_range_contains_only_its_months() {
    let range = MonthRange::new("2024-02".parse().unwrap(), "2024-04".parse().unwrap()).unwrap();

    assert!(!range.contains("2024-01".parse().unwrap()));
    assert!(range.contains("2024-02".parse().unwrap()));
    assert!(range.contains("2024-04".parse().unwrap()));
    assert!(!range.contains("2024-05".parse().unwrap()));
}
