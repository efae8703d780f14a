//! Game-date arithmetic.
//!
//! Dates are `chrono::NaiveDateTime` values supplied by the caller: one
//! slot per fixture, consumed positionally. The fitness rules only need
//! two questions answered about slots: how many whole days separate two
//! of them, and which weekday a slot falls on.
//!
//! # Day counting
//! Whole days are floored, so a gap of -1 hour counts as -1 day and a gap
//! of 47 hours counts as 1 day.

use chrono::{Datelike, NaiveDateTime, Weekday};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `from` to `to`, floored towards negative infinity.
#[inline]
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Whether `date` falls on `weekday`.
#[inline]
pub fn is_weekday(date: NaiveDateTime, weekday: Weekday) -> bool {
    date.weekday() == weekday
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_days_between_whole_days() {
        assert_eq!(days_between(at(2024, 8, 10, 20), at(2024, 8, 17, 20)), 7);
        assert_eq!(days_between(at(2024, 8, 10, 20), at(2024, 8, 10, 20)), 0);
    }

    #[test]
    fn test_days_between_floors_partial_days() {
        // 47 hours
        assert_eq!(days_between(at(2024, 8, 10, 20), at(2024, 8, 12, 19)), 1);
        // -1 hour
        assert_eq!(days_between(at(2024, 8, 10, 20), at(2024, 8, 10, 19)), -1);
        assert_eq!(days_between(at(2024, 8, 17, 20), at(2024, 8, 10, 20)), -7);
    }

    #[test]
    fn test_is_weekday() {
        // 2024-08-10 is a Saturday
        assert!(is_weekday(at(2024, 8, 10, 18), Weekday::Sat));
        assert!(is_weekday(at(2024, 8, 11, 18), Weekday::Sun));
        assert!(!is_weekday(at(2024, 8, 11, 18), Weekday::Sat));
    }
}
