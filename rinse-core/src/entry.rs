//! Calendar entries and the agenda that holds them.
//!
//! An `Entry` is either a user event or a (planned) wash day. Entries are
//! never edited in place: they are created, listed, and deleted by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a calendar entry marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A user-entered occasion (party, trip, appointment).
    #[serde(rename = "event")]
    Event,
    /// A planned or recommended wash day.
    #[serde(rename = "wash")]
    ScheduledWash,
}

/// A calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Insertion-ordered collection of calendar entries.
///
/// Ids are caller-supplied; `next_id` hands out the next free one so two
/// entries can never collide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Agenda {
    entries: Vec<Entry>,
}

impl Agenda {
    pub fn new() -> Self {
        Agenda::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Agenda { entries }
    }

    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// The next free id: one past the largest id in use.
    pub fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().map_or(1, |m| m + 1)
    }

    /// Delete the entry with this id. Returns false if absent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries of `kind` on or after `from`, ascending by date. Entries on
    /// the same date keep their insertion order.
    pub fn upcoming(&self, kind: EntryKind, from: NaiveDate) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| e.kind == kind && e.date >= from)
            .collect();
        entries.sort_by_key(|e| e.date);
        entries
    }

    pub fn exists_on(&self, date: NaiveDate, kind: EntryKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind && e.date == date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(id: u64, date: NaiveDate, name: &str, kind: EntryKind) -> Entry {
        Entry {
            id,
            date,
            name: name.to_string(),
            kind,
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(Agenda::new().next_id(), 1);
    }

    #[test]
    fn next_id_is_one_past_the_max() {
        let mut agenda = Agenda::new();
        agenda.add(entry(7, d(2024, 1, 1), "a", EntryKind::Event));
        agenda.add(entry(3, d(2024, 1, 2), "b", EntryKind::Event));
        assert_eq!(agenda.next_id(), 8);
    }

    #[test]
    fn remove_by_id() {
        let mut agenda = Agenda::new();
        agenda.add(entry(1, d(2024, 1, 1), "a", EntryKind::Event));
        assert!(agenda.remove(1));
        assert!(!agenda.remove(1));
        assert!(agenda.is_empty());
    }

    #[test]
    fn upcoming_filters_by_kind_and_date() {
        let mut agenda = Agenda::new();
        agenda.add(entry(1, d(2024, 1, 5), "past", EntryKind::Event));
        agenda.add(entry(2, d(2024, 1, 20), "late", EntryKind::Event));
        agenda.add(entry(3, d(2024, 1, 12), "soon", EntryKind::Event));
        agenda.add(entry(4, d(2024, 1, 15), "wash", EntryKind::ScheduledWash));

        let upcoming = agenda.upcoming(EntryKind::Event, d(2024, 1, 10));
        let names: Vec<_> = upcoming.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["soon", "late"]);
    }

    #[test]
    fn upcoming_is_stable_for_equal_dates() {
        let mut agenda = Agenda::new();
        agenda.add(entry(1, d(2024, 1, 12), "first", EntryKind::Event));
        agenda.add(entry(2, d(2024, 1, 12), "second", EntryKind::Event));

        let upcoming = agenda.upcoming(EntryKind::Event, d(2024, 1, 1));
        let names: Vec<_> = upcoming.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn exists_on_matches_kind() {
        let mut agenda = Agenda::new();
        agenda.add(entry(1, d(2024, 3, 9), "wash", EntryKind::ScheduledWash));
        assert!(agenda.exists_on(d(2024, 3, 9), EntryKind::ScheduledWash));
        assert!(!agenda.exists_on(d(2024, 3, 9), EntryKind::Event));
        assert!(!agenda.exists_on(d(2024, 3, 10), EntryKind::ScheduledWash));
    }

    #[test]
    fn entry_serializes_with_wire_field_names() {
        let e = entry(5, d(2024, 3, 10), "Party", EntryKind::Event);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(
            json,
            r#"{"id":5,"date":"2024-03-10","name":"Party","type":"event"}"#
        );

        let wash = r#"{"id":6,"date":"2024-03-09","name":"Wash before Party","type":"wash"}"#;
        let parsed: Entry = serde_json::from_str(wash).unwrap();
        assert_eq!(parsed.kind, EntryKind::ScheduledWash);
        assert_eq!(parsed.date, d(2024, 3, 9));
    }
}
