//! Terminal rendering for rinse types.
//!
//! Extension trait adding colored output on top of the plain-text messages
//! the core types produce.

use owo_colors::OwoColorize;
use rinse_core::{Entry, EntryKind, LastWashStatus, NextWashStatus, Urgency};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EntryKind {
    fn render(&self) -> String {
        match self {
            EntryKind::Event => "[event]".magenta().to_string(),
            EntryKind::ScheduledWash => "[wash]".cyan().to_string(),
        }
    }
}

impl Render for Entry {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            format!("#{}", self.id).dimmed(),
            self.name,
            self.kind.render()
        )
    }
}

impl Render for LastWashStatus {
    fn render(&self) -> String {
        let message = self.message();
        match self {
            LastWashStatus::NeverLogged => message.dimmed().to_string(),
            LastWashStatus::Logged { urgency, .. } => colorize_urgency(*urgency, &message),
        }
    }
}

impl Render for NextWashStatus {
    fn render(&self) -> String {
        let message = self.message();
        match self {
            NextWashStatus::CadenceUnset | NextWashStatus::NothingLogged => {
                message.dimmed().to_string()
            }
            NextWashStatus::Overdue | NextWashStatus::Today => message.red().to_string(),
            NextWashStatus::Tomorrow => message.yellow().to_string(),
            NextWashStatus::BeforeEvent { .. } => message.yellow().to_string(),
            NextWashStatus::AnytimeUntil { .. } => message.to_string(),
            NextWashStatus::InDays { .. } | NextWashStatus::WindowOpens { .. } => {
                message.to_string()
            }
        }
    }
}

fn colorize_urgency(urgency: Option<Urgency>, text: &str) -> String {
    match urgency {
        Some(Urgency::Due | Urgency::Overdue) => text.red().to_string(),
        Some(Urgency::DueTomorrow | Urgency::WindowOpen) => text.yellow().to_string(),
        Some(Urgency::Fresh) => text.green().to_string(),
        None => text.to_string(),
    }
}
