//! Core library for rinse: the wash log, the agenda, the profile, and the
//! scheduling engine that turns them into recommendations.
//!
//! The CLI owns the terminal and notifications; this crate owns data and
//! decisions. Scheduling functions take `today` explicitly and never read
//! the clock, so everything is deterministic under test.

pub mod config;
pub mod date;
pub mod entry;
pub mod error;
pub mod profile;
pub mod schedule;
pub mod store;
pub mod wash_log;

pub use entry::{Agenda, Entry, EntryKind};
pub use error::{RinseError, RinseResult};
pub use profile::{Cadence, Profile};
pub use schedule::{LastWashStatus, NextWashStatus, Urgency, WashSuggestion};
pub use store::{Store, Tracker};
pub use wash_log::{LogOutcome, WashLog};
