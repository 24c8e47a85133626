use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use rinse_core::date::parse_key;
use rinse_core::{LogOutcome, Store, schedule};

pub fn run(date: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let date = match date {
        Some(s) => parse_key(s)?,
        None => today,
    };

    let store = Store::open()?;
    let mut tracker = store.load()?;

    if tracker.wash_log.record(date) == LogOutcome::AlreadyLogged {
        println!(
            "{}",
            format!("Already logged for {}. Squeaky clean.", date.format("%a %b %-d")).dimmed()
        );
        return Ok(());
    }

    // Re-plan upcoming washes around the new anchor when the profile asks.
    let mut replanned = 0;
    if tracker.profile.auto_schedule_washes {
        if let Some(cadence) = tracker.profile.cadence {
            let fresh = schedule::auto_schedule(&tracker.wash_log, &tracker.agenda, cadence, today);
            replanned = fresh.len();
            for entry in fresh {
                tracker.agenda.add(entry);
            }
        }
    }

    store.save(&tracker)?;

    println!(
        "{}",
        format!("Wash logged for {}.", date.format("%a %b %-d")).green()
    );
    if replanned > 0 {
        let noun = if replanned == 1 { "wash" } else { "washes" };
        println!("{}", format!("Planned {replanned} upcoming {noun}.").dimmed());
    }
    Ok(())
}
