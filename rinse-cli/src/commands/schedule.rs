use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use rinse_core::{Store, schedule};

use crate::render::Render;

pub fn run() -> Result<()> {
    let today = Local::now().date_naive();
    let store = Store::open()?;
    let mut tracker = store.load()?;

    let Some(cadence) = tracker.profile.cadence else {
        anyhow::bail!(
            "No wash cadence configured.\n\n\
            Set one first with:\n  \
            rinse profile set --every 3\n\n\
            or a range:\n  \
            rinse profile set --between 2 5"
        );
    };

    let planned = schedule::auto_schedule(&tracker.wash_log, &tracker.agenda, cadence, today);
    if planned.is_empty() {
        println!(
            "{}",
            "Nothing to schedule: upcoming washes are already planned.".dimmed()
        );
        return Ok(());
    }

    for entry in &planned {
        println!(
            "   {} {} {}",
            "+".green(),
            entry.date.format("%a %b %-d"),
            entry.render()
        );
    }

    let count = planned.len();
    for entry in planned {
        tracker.agenda.add(entry);
    }
    store.save(&tracker)?;

    let noun = if count == 1 { "wash" } else { "washes" };
    println!("{}", format!("Scheduled {count} {noun}.").green());
    Ok(())
}
