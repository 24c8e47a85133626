use anyhow::Result;
use chrono::Local;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use rinse_core::date::{display_date, parse_key};
use rinse_core::{Entry, EntryKind, Store, WashSuggestion, schedule};

use crate::render::Render;

pub fn add(date: &str, name: &str, wash: bool, yes: bool, no_prompt: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let date = parse_key(date)?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Event name cannot be empty");
    }

    let store = Store::open()?;
    let mut tracker = store.load()?;

    let kind = if wash {
        EntryKind::ScheduledWash
    } else {
        EntryKind::Event
    };

    if kind == EntryKind::ScheduledWash && tracker.agenda.exists_on(date, EntryKind::ScheduledWash)
    {
        println!(
            "{}",
            format!("A wash is already scheduled for {}.", date.format("%a %b %-d")).dimmed()
        );
        return Ok(());
    }

    let entry = Entry {
        id: tracker.agenda.next_id(),
        date,
        name: name.to_string(),
        kind,
    };
    tracker.agenda.add(entry.clone());
    println!(
        "{}",
        format!("Added: {} on {}", entry.name, date.format("%a %b %-d")).green()
    );

    if kind == EntryKind::Event && tracker.profile.event_wash_reminder && !no_prompt {
        offer_pre_event_wash(&mut tracker, &entry, today, yes)?;
    }

    store.save(&tracker)?;
    Ok(())
}

/// Offer the day-before wash from the scheduling engine. Declines are final:
/// the suggestion is never re-attempted for this event.
fn offer_pre_event_wash(
    tracker: &mut rinse_core::Tracker,
    entry: &Entry,
    today: chrono::NaiveDate,
    yes: bool,
) -> Result<()> {
    match schedule::pre_event_wash(&tracker.agenda, entry, today) {
        Some(WashSuggestion::Propose(wash_entry)) => {
            let accepted = yes
                || Confirm::new()
                    .with_prompt(format!(
                        "Schedule a wash for {} (day before {})?",
                        wash_entry.date.format("%a %b %-d"),
                        entry.name
                    ))
                    .default(true)
                    .interact()?;
            if accepted {
                println!(
                    "{}",
                    format!("Wash scheduled for {}.", wash_entry.date.format("%a %b %-d")).green()
                );
                tracker.agenda.add(wash_entry);
            }
        }
        Some(WashSuggestion::AlreadyScheduled { date }) => {
            println!(
                "{}",
                format!("A wash is already scheduled for {}.", date.format("%a %b %-d")).dimmed()
            );
        }
        Some(WashSuggestion::InThePast) | None => {}
    }
    Ok(())
}

pub fn rm(id: u64) -> Result<()> {
    let store = Store::open()?;
    let mut tracker = store.load()?;

    if !tracker.agenda.remove(id) {
        println!("{}", format!("No entry with id {id}.").dimmed());
        return Ok(());
    }

    store.save(&tracker)?;
    println!("{}", format!("Removed entry {id}.").green());
    Ok(())
}

pub fn list(all: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let tracker = Store::open()?.load()?;

    let mut entries = tracker.agenda.upcoming(EntryKind::Event, today);
    if all {
        entries.extend(tracker.agenda.upcoming(EntryKind::ScheduledWash, today));
        entries.sort_by_key(|e| e.date);
    }

    if entries.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    // Group entries by day and print
    let mut current_label: Option<String> = None;
    for entry in entries {
        let label = display_date(entry.date, today);
        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                println!();
            }
            println!("{}", label.bold());
            current_label = Some(label);
        }
        println!("  {}", entry.render());
    }
    Ok(())
}
