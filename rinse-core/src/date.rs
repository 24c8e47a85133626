//! Calendar-day helpers.
//!
//! Everything in rinse operates on whole local calendar days, carried as
//! `NaiveDate` and persisted as `YYYY-MM-DD` keys. Two dates compare equal
//! under `format_key` iff they denote the same calendar day, so time-of-day
//! and DST shifts can never produce off-by-one drift.

use chrono::{Duration, NaiveDate};

use crate::error::{RinseError, RinseResult};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` key for a calendar day.
pub fn format_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key back into a calendar day.
pub fn parse_key(key: &str) -> RinseResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|_| RinseError::InvalidDate(key.to_string()))
}

/// Whole calendar days `a - b` (negative when `a` is before `b`).
pub fn day_difference(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Mar 20")
pub fn display_date(date: NaiveDate, today: NaiveDate) -> String {
    match day_difference(date, today) {
        -1 => "Yesterday".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn key_round_trips() {
        let date = d(2024, 3, 9);
        assert_eq!(parse_key(&format_key(date)).unwrap(), date);
        assert_eq!(format_key(date), "2024-03-09");
    }

    #[test]
    fn parse_key_trims_whitespace() {
        assert_eq!(parse_key(" 2024-03-09\n").unwrap(), d(2024, 3, 9));
    }

    #[test]
    fn parse_key_rejects_garbage() {
        assert!(parse_key("not-a-date").is_err());
        assert!(parse_key("2024-13-01").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn day_difference_signs() {
        assert_eq!(day_difference(d(2024, 1, 8), d(2024, 1, 1)), 7);
        assert_eq!(day_difference(d(2024, 1, 1), d(2024, 1, 8)), -7);
        assert_eq!(day_difference(d(2024, 1, 1), d(2024, 1, 1)), 0);
    }

    #[test]
    fn day_difference_across_months() {
        assert_eq!(day_difference(d(2024, 3, 1), d(2024, 2, 28)), 2);
        assert_eq!(day_difference(d(2023, 3, 1), d(2023, 2, 28)), 1);
    }

    #[test]
    fn add_days_negative() {
        assert_eq!(add_days(d(2024, 3, 1), -1), d(2024, 2, 29));
    }

    #[test]
    fn display_date_labels() {
        let today = d(2024, 3, 9);
        assert_eq!(display_date(today, today), "Today");
        assert_eq!(display_date(d(2024, 3, 10), today), "Tomorrow");
        assert_eq!(display_date(d(2024, 3, 8), today), "Yesterday");
        assert_eq!(display_date(d(2024, 3, 20), today), "Wed Mar 20");
    }
}
