use anyhow::Result;
use chrono::Local;
use notify_rust::Notification;
use owo_colors::OwoColorize;
use rinse_core::{EntryKind, Store};

/// Local wall-clock hour of the evening nudge.
const REMINDER_HOUR: u32 = 20;

/// One-shot reminder for today's scheduled wash. Nothing persists across
/// runs: if the process isn't around at 20:00, the nudge is simply lost
/// until the next invocation.
pub fn run(wait: bool) -> Result<()> {
    let tracker = Store::open()?.load()?;

    if !tracker.notifications_enabled {
        println!(
            "{}",
            "Notifications are off. Enable them with: rinse notifications on".dimmed()
        );
        return Ok(());
    }

    let now = Local::now().naive_local();
    let today = now.date();
    if !tracker.agenda.exists_on(today, EntryKind::ScheduledWash) {
        println!("{}", "No wash scheduled for today.".dimmed());
        return Ok(());
    }

    let due_at = today.and_hms_opt(REMINDER_HOUR, 0, 0).unwrap();
    if now < due_at {
        if !wait {
            println!(
                "Wash scheduled for today. The reminder is due at {REMINDER_HOUR}:00; \
                re-run with --wait to stick around for it."
            );
            return Ok(());
        }
        println!("{}", format!("Waiting until {REMINDER_HOUR}:00...").dimmed());
        std::thread::sleep((due_at - now).to_std()?);
    }

    Notification::new()
        .summary("Hair wash reminder")
        .body("Don't forget to wash your hair tonight!")
        .show()?;
    println!("{}", "Reminder sent.".green());
    Ok(())
}
