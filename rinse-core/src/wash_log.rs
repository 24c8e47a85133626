//! The wash log: every calendar day on which a wash was recorded.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Outcome of recording a wash. Logging a day twice is a friendly no-op,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Logged,
    AlreadyLogged,
}

/// Set of calendar days with a logged wash. A day appears at most once;
/// iteration is ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WashLog {
    days: BTreeSet<NaiveDate>,
}

impl WashLog {
    pub fn new() -> Self {
        WashLog::default()
    }

    pub fn from_days(days: impl IntoIterator<Item = NaiveDate>) -> Self {
        WashLog {
            days: days.into_iter().collect(),
        }
    }

    pub fn record(&mut self, date: NaiveDate) -> LogOutcome {
        if self.days.insert(date) {
            LogOutcome::Logged
        } else {
            LogOutcome::AlreadyLogged
        }
    }

    /// Remove a logged wash. Returns false if the day wasn't logged.
    pub fn unrecord(&mut self, date: NaiveDate) -> bool {
        self.days.remove(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    /// The most recent wash day, if any.
    pub fn most_recent(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn record_is_idempotent() {
        let mut log = WashLog::new();
        assert_eq!(log.record(d(2024, 1, 1)), LogOutcome::Logged);
        assert_eq!(log.record(d(2024, 1, 1)), LogOutcome::AlreadyLogged);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn most_recent_is_the_maximum() {
        let log = WashLog::from_days([d(2024, 1, 5), d(2024, 1, 1), d(2024, 1, 3)]);
        assert_eq!(log.most_recent(), Some(d(2024, 1, 5)));
    }

    #[test]
    fn most_recent_of_empty_log() {
        assert_eq!(WashLog::new().most_recent(), None);
    }

    #[test]
    fn unrecord_removes_only_whats_there() {
        let mut log = WashLog::from_days([d(2024, 1, 1)]);
        assert!(log.unrecord(d(2024, 1, 1)));
        assert!(!log.unrecord(d(2024, 1, 1)));
        assert!(log.is_empty());
    }

    #[test]
    fn days_iterate_ascending() {
        let log = WashLog::from_days([d(2024, 1, 5), d(2024, 1, 1), d(2024, 1, 3)]);
        let days: Vec<_> = log.days().collect();
        assert_eq!(days, vec![d(2024, 1, 1), d(2024, 1, 3), d(2024, 1, 5)]);
    }
}
