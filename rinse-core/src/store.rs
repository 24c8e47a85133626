//! File-backed tracker state.
//!
//! The store owns the canonical copies of the wash log, the agenda, the
//! profile, and the notification flag, persisted as plain files in the
//! data directory:
//!
//! - `washdays` — one `YYYY-MM-DD` key per line, sorted
//! - `events.json` — calendar entries
//! - `profile.json` — hair profile
//! - `notifications` — `true`/`false` reminder gate
//!
//! Writes go through a temp file and rename.

use std::fs;
use std::path::PathBuf;

use crate::config::RinseConfig;
use crate::date::{format_key, parse_key};
use crate::entry::Agenda;
use crate::error::{RinseError, RinseResult};
use crate::profile::{Cadence, Profile};
use crate::wash_log::WashLog;

const WASHDAYS_FILE: &str = "washdays";
const EVENTS_FILE: &str = "events.json";
const PROFILE_FILE: &str = "profile.json";
const NOTIFICATIONS_FILE: &str = "notifications";

/// Everything rinse knows, loaded in one piece and saved in one piece.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    pub wash_log: WashLog,
    pub agenda: Agenda,
    pub profile: Profile,
    pub notifications_enabled: bool,
}

/// The on-disk home of a `Tracker`.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Store at the configured data directory.
    pub fn open() -> RinseResult<Self> {
        let config = RinseConfig::load()?;
        Ok(Store {
            dir: config.data_path(),
        })
    }

    /// Store at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn load(&self) -> RinseResult<Tracker> {
        let mut tracker = Tracker {
            wash_log: self.load_wash_log()?,
            agenda: self.load_agenda()?,
            profile: self.load_profile()?,
            notifications_enabled: self.load_notifications_flag(),
        };
        tracker.profile.cadence = tracker.profile.cadence.map(Cadence::normalized);
        Ok(tracker)
    }

    pub fn save(&self, tracker: &Tracker) -> RinseResult<()> {
        fs::create_dir_all(&self.dir)?;
        self.save_wash_log(&tracker.wash_log)?;
        self.save_agenda(&tracker.agenda)?;
        self.save_profile(&tracker.profile)?;
        self.save_notifications_flag(tracker.notifications_enabled)?;
        Ok(())
    }

    fn load_wash_log(&self) -> RinseResult<WashLog> {
        let path = self.dir.join(WASHDAYS_FILE);
        if !path.exists() {
            return Ok(WashLog::new());
        }

        let content = fs::read_to_string(&path)?;
        let mut log = WashLog::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            log.record(parse_key(line)?);
        }
        Ok(log)
    }

    fn save_wash_log(&self, log: &WashLog) -> RinseResult<()> {
        let content = log.days().map(format_key).collect::<Vec<_>>().join("\n");
        self.write_atomic(WASHDAYS_FILE, content.as_bytes())
    }

    fn load_agenda(&self) -> RinseResult<Agenda> {
        let path = self.dir.join(EVENTS_FILE);
        if !path.exists() {
            return Ok(Agenda::new());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| RinseError::Serialization(format!("{EVENTS_FILE}: {e}")))
    }

    fn save_agenda(&self, agenda: &Agenda) -> RinseResult<()> {
        let content = serde_json::to_string_pretty(agenda)
            .map_err(|e| RinseError::Serialization(format!("{EVENTS_FILE}: {e}")))?;
        self.write_atomic(EVENTS_FILE, content.as_bytes())
    }

    fn load_profile(&self) -> RinseResult<Profile> {
        let path = self.dir.join(PROFILE_FILE);
        if !path.exists() {
            return Ok(Profile::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| RinseError::Serialization(format!("{PROFILE_FILE}: {e}")))
    }

    fn save_profile(&self, profile: &Profile) -> RinseResult<()> {
        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| RinseError::Serialization(format!("{PROFILE_FILE}: {e}")))?;
        self.write_atomic(PROFILE_FILE, content.as_bytes())
    }

    fn load_notifications_flag(&self) -> bool {
        let path = self.dir.join(NOTIFICATIONS_FILE);
        match fs::read_to_string(path) {
            Ok(content) => content.trim() == "true",
            Err(_) => false,
        }
    }

    fn save_notifications_flag(&self, enabled: bool) -> RinseResult<()> {
        let content = if enabled { "true" } else { "false" };
        self.write_atomic(NOTIFICATIONS_FILE, content.as_bytes())
    }

    fn write_atomic(&self, name: &str, content: &[u8]) -> RinseResult<()> {
        let path = self.dir.join(name);
        let temp = self.dir.join(format!("{name}.tmp"));

        fs::write(&temp, content)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryKind};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn load_from_an_empty_dir_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = Store::at(dir.path()).load().unwrap();

        assert!(tracker.wash_log.is_empty());
        assert!(tracker.agenda.is_empty());
        assert_eq!(tracker.profile, Profile::default());
        assert!(!tracker.notifications_enabled);
    }

    #[test]
    fn tracker_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());

        let mut tracker = Tracker::default();
        tracker.wash_log.record(d(2024, 1, 5));
        tracker.wash_log.record(d(2024, 1, 1));
        tracker.agenda.add(Entry {
            id: 3,
            date: d(2024, 1, 10),
            name: "Party".to_string(),
            kind: EntryKind::Event,
        });
        tracker.agenda.add(Entry {
            id: 4,
            date: d(2024, 1, 9),
            name: "Wash before Party".to_string(),
            kind: EntryKind::ScheduledWash,
        });
        tracker.profile.cadence = Some(Cadence::Range { min: 2, max: 5 });
        tracker.profile.shampoo = Some("tea tree".to_string());
        tracker.notifications_enabled = true;

        store.save(&tracker).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.wash_log, tracker.wash_log);
        assert_eq!(loaded.agenda, tracker.agenda);
        assert_eq!(loaded.profile, tracker.profile);
        assert!(loaded.notifications_enabled);
    }

    #[test]
    fn washdays_file_is_sorted_line_oriented_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());

        let mut tracker = Tracker::default();
        tracker.wash_log.record(d(2024, 2, 1));
        tracker.wash_log.record(d(2024, 1, 1));
        store.save(&tracker).unwrap();

        let content = std::fs::read_to_string(dir.path().join("washdays")).unwrap();
        assert_eq!(content, "2024-01-01\n2024-02-01");
    }

    #[test]
    fn corrupt_washdays_line_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("washdays"), "2024-01-01\nnot-a-date").unwrap();

        assert!(Store::at(dir.path()).load().is_err());
    }

    #[test]
    fn collapsed_range_is_normalized_on_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("profile.json"),
            r#"{"frequency":{"min":4,"max":4}}"#,
        )
        .unwrap();

        let tracker = Store::at(dir.path()).load().unwrap();
        assert_eq!(
            tracker.profile.cadence,
            Some(Cadence::Range { min: 4, max: 5 })
        );
    }

    #[test]
    fn save_overwrites_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());

        let mut tracker = Tracker::default();
        tracker.wash_log.record(d(2024, 1, 1));
        store.save(&tracker).unwrap();

        tracker.wash_log.unrecord(d(2024, 1, 1));
        tracker.wash_log.record(d(2024, 2, 2));
        store.save(&tracker).unwrap();

        let loaded = store.load().unwrap();
        assert!(!loaded.wash_log.contains(d(2024, 1, 1)));
        assert!(loaded.wash_log.contains(d(2024, 2, 2)));
    }
}
