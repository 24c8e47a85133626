//! The scheduling engine.
//!
//! Pure functions over borrowed snapshots of the wash log, the agenda, and
//! the cadence. `today` is always an explicit parameter, so every path is
//! deterministic under test. The engine returns status values or new
//! entries; appending them and persisting belongs to the caller.

use chrono::NaiveDate;

use crate::date::{add_days, day_difference};
use crate::entry::{Agenda, Entry, EntryKind};
use crate::profile::Cadence;
use crate::wash_log::WashLog;

/// How far ahead the range-cadence walk plans.
pub const PLAN_HORIZON_DAYS: i64 = 30;

/// Washes generated per fixed-cadence run.
pub const FIXED_BATCH: usize = 4;

pub const SCHEDULED_WASH_NAME: &str = "Scheduled hair wash";

/// Urgency attached to the last-wash status when a cadence is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Inside the comfortable part of a range cadence.
    Fresh,
    /// Range cadence: past `min`, not yet at `max`.
    WindowOpen,
    DueTomorrow,
    Due,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastWashStatus {
    NeverLogged,
    Logged {
        date: NaiveDate,
        days_ago: i64,
        urgency: Option<Urgency>,
    },
}

impl LastWashStatus {
    pub fn message(&self) -> String {
        match self {
            LastWashStatus::NeverLogged => "Last wash: never logged.".to_string(),
            LastWashStatus::Logged {
                date,
                days_ago,
                urgency,
            } => {
                let when = match days_ago {
                    0 => "today".to_string(),
                    1 => "yesterday".to_string(),
                    n => format!("{n} days ago"),
                };
                let mut message = format!("Last wash: {} ({when}).", date.format("%a %b %-d"));
                if let Some(urgency) = urgency {
                    message.push(' ');
                    message.push_str(match urgency {
                        Urgency::Fresh => "Still fresh.",
                        Urgency::WindowOpen => "Wash window is open.",
                        Urgency::DueTomorrow => "Wash due tomorrow.",
                        Urgency::Due => "Time for a wash!",
                        Urgency::Overdue => "Overdue for a wash!",
                    });
                }
                message
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextWashStatus {
    /// No cadence configured: nothing to recommend yet.
    CadenceUnset,
    /// Cadence configured but no wash ever logged.
    NothingLogged,
    /// The recommended day has passed.
    Overdue,
    Today,
    Tomorrow,
    /// Fixed cadence: the next wash lands on `date`, `days` days out.
    InDays { date: NaiveDate, days: i64 },
    /// Range cadence: the window is open with no event to aim for.
    AnytimeUntil { until: NaiveDate },
    /// Wash on `date`, the day before `event`.
    BeforeEvent { date: NaiveDate, event: String },
    /// Range cadence, still fresh: the window opens on `opens`.
    WindowOpens { opens: NaiveDate, days: i64 },
}

impl NextWashStatus {
    pub fn message(&self) -> String {
        match self {
            NextWashStatus::CadenceUnset => {
                "Set a wash cadence in your profile to get a next-wash recommendation.".to_string()
            }
            NextWashStatus::NothingLogged => {
                "Log your first wash to get a next-wash recommendation.".to_string()
            }
            NextWashStatus::Overdue => "You're overdue for a wash.".to_string(),
            NextWashStatus::Today => "Wash day is today.".to_string(),
            NextWashStatus::Tomorrow => "Next wash: tomorrow.".to_string(),
            NextWashStatus::InDays { date, days } => {
                format!("Next wash: {} (in {days} days).", date.format("%a %b %-d"))
            }
            NextWashStatus::AnytimeUntil { until } => {
                format!("Wash any time until {}.", until.format("%a %b %-d"))
            }
            NextWashStatus::BeforeEvent { date, event } => {
                format!(
                    "Wash on {}, the day before {event}.",
                    date.format("%a %b %-d")
                )
            }
            NextWashStatus::WindowOpens { opens, days } => {
                let when = if *days == 1 {
                    "tomorrow".to_string()
                } else {
                    format!("in {days} days")
                };
                format!(
                    "Still fresh. Window opens {} ({when}).",
                    opens.format("%a %b %-d")
                )
            }
        }
    }
}

/// Describe the most recent wash relative to `today`.
pub fn last_wash_status(
    log: &WashLog,
    cadence: Option<Cadence>,
    today: NaiveDate,
) -> LastWashStatus {
    let Some(last) = log.most_recent() else {
        return LastWashStatus::NeverLogged;
    };
    let days_ago = day_difference(today, last);

    let urgency = cadence.map(Cadence::normalized).and_then(|c| match c {
        Cadence::Fixed(n) => {
            let n = i64::from(n);
            if days_ago >= n {
                Some(Urgency::Due)
            } else if days_ago == n - 1 {
                Some(Urgency::DueTomorrow)
            } else {
                None
            }
        }
        Cadence::Range { min, max } => Some(if days_ago >= i64::from(max) {
            Urgency::Overdue
        } else if days_ago >= i64::from(min) {
            Urgency::WindowOpen
        } else {
            Urgency::Fresh
        }),
    });

    LastWashStatus::Logged {
        date: last,
        days_ago,
        urgency,
    }
}

/// Recommend when to wash next.
///
/// Needs both a cadence and a prior wash; missing either yields a guidance
/// status rather than an error. Range cadences prefer washing the day
/// before an upcoming event when that day falls inside the window.
pub fn next_wash_status(
    log: &WashLog,
    agenda: &Agenda,
    cadence: Option<Cadence>,
    today: NaiveDate,
) -> NextWashStatus {
    let Some(cadence) = cadence else {
        return NextWashStatus::CadenceUnset;
    };
    let Some(last) = log.most_recent() else {
        return NextWashStatus::NothingLogged;
    };

    match cadence.normalized() {
        Cadence::Fixed(n) => {
            let next = add_days(last, i64::from(n));
            match day_difference(next, today) {
                d if d < 0 => NextWashStatus::Overdue,
                0 => NextWashStatus::Today,
                1 => NextWashStatus::Tomorrow,
                d => NextWashStatus::InDays {
                    date: next,
                    days: d,
                },
            }
        }
        Cadence::Range { min, max } => {
            let (min, max) = (i64::from(min), i64::from(max));
            let days_since = day_difference(today, last);
            if days_since >= max {
                return NextWashStatus::Overdue;
            }

            let min_date = add_days(last, min);
            let max_date = add_days(last, max);
            let window_start = min_date.max(today);

            for event in agenda.upcoming(EntryKind::Event, today) {
                let day_before = add_days(event.date, -1);
                if day_before >= window_start && day_before <= max_date {
                    return NextWashStatus::BeforeEvent {
                        date: day_before,
                        event: event.name.clone(),
                    };
                }
            }

            if days_since >= min {
                NextWashStatus::AnytimeUntil { until: max_date }
            } else {
                NextWashStatus::WindowOpens {
                    opens: min_date,
                    days: min - days_since,
                }
            }
        }
    }
}

/// Outcome of the day-before wash suggestion for a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WashSuggestion {
    /// Append this entry (after the user confirms).
    Propose(Entry),
    /// A wash is already scheduled on the day before.
    AlreadyScheduled { date: NaiveDate },
    /// The day before has already passed.
    InThePast,
}

/// Day-before wash suggestion for a freshly added `Event` entry.
///
/// Opportunistic: a declined or skipped suggestion is never re-attempted.
/// Returns `None` for non-event entries.
pub fn pre_event_wash(agenda: &Agenda, event: &Entry, today: NaiveDate) -> Option<WashSuggestion> {
    if event.kind != EntryKind::Event {
        return None;
    }

    let day_before = add_days(event.date, -1);
    if day_before < today {
        return Some(WashSuggestion::InThePast);
    }
    if agenda.exists_on(day_before, EntryKind::ScheduledWash) {
        return Some(WashSuggestion::AlreadyScheduled { date: day_before });
    }

    Some(WashSuggestion::Propose(Entry {
        id: agenda.next_id(),
        date: day_before,
        name: format!("Wash before {}", event.name),
        kind: EntryKind::ScheduledWash,
    }))
}

/// Generate future `ScheduledWash` entries from the configured cadence.
///
/// Ids are allocated from `agenda.next_id()` onward; the caller appends the
/// returned entries and persists.
pub fn auto_schedule(
    log: &WashLog,
    agenda: &Agenda,
    cadence: Cadence,
    today: NaiveDate,
) -> Vec<Entry> {
    match cadence.normalized() {
        Cadence::Fixed(n) => schedule_fixed(log, agenda, i64::from(n), today),
        Cadence::Range { min, max } => {
            schedule_range(log, agenda, i64::from(min), i64::from(max), today)
        }
    }
}

/// Fixed cadence: four candidates spaced `every` days apart, starting one
/// interval after the last wash (or tomorrow with an empty log). Candidates
/// on or before today, or already scheduled, are skipped.
fn schedule_fixed(log: &WashLog, agenda: &Agenda, every: i64, today: NaiveDate) -> Vec<Entry> {
    let first = match log.most_recent() {
        Some(last) => add_days(last, every),
        None => add_days(today, 1),
    };

    let mut next_id = agenda.next_id();
    let mut planned = Vec::new();
    for i in 0..FIXED_BATCH as i64 {
        let date = add_days(first, every * i);
        if date <= today || agenda.exists_on(date, EntryKind::ScheduledWash) {
            continue;
        }
        planned.push(Entry {
            id: next_id,
            date,
            name: SCHEDULED_WASH_NAME.to_string(),
            kind: EntryKind::ScheduledWash,
        });
        next_id += 1;
    }
    planned
}

/// Range cadence: walk forward from the last wash (or today), one window
/// `[current+min, current+max]` per step. Each step lands on the day before
/// the first upcoming event that fits the window, or at the end of the
/// window. The walk stops past `today + PLAN_HORIZON_DAYS`; it terminates
/// because `current` advances at least `min >= 1` days per step.
fn schedule_range(
    log: &WashLog,
    agenda: &Agenda,
    min: i64,
    max: i64,
    today: NaiveDate,
) -> Vec<Entry> {
    let horizon = add_days(today, PLAN_HORIZON_DAYS);
    let mut current = log.most_recent().unwrap_or(today);
    let mut next_id = agenda.next_id();
    let mut planned = Vec::new();

    loop {
        let window_start = add_days(current, min);
        let window_end = add_days(current, max);

        let mut chosen = window_end;
        let mut name = SCHEDULED_WASH_NAME.to_string();
        for event in agenda.upcoming(EntryKind::Event, add_days(today, 1)) {
            let day_before = add_days(event.date, -1);
            if day_before > window_end {
                break;
            }
            if day_before >= window_start {
                chosen = day_before;
                name = format!("Wash before {}", event.name);
                break;
            }
        }

        if chosen > horizon {
            break;
        }
        // Dates in the past or already taken are skipped as output but still
        // anchor the next window.
        if chosen > today && !agenda.exists_on(chosen, EntryKind::ScheduledWash) {
            planned.push(Entry {
                id: next_id,
                date: chosen,
                name,
                kind: EntryKind::ScheduledWash,
            });
            next_id += 1;
        }
        current = chosen;
    }
    planned
}
