use anyhow::Result;
use chrono::Local;
use rinse_core::{Store, schedule};

use crate::render::Render;

pub fn run() -> Result<()> {
    let today = Local::now().date_naive();
    let tracker = Store::open()?.load()?;

    let last = schedule::last_wash_status(&tracker.wash_log, tracker.profile.cadence, today);
    let next = schedule::next_wash_status(
        &tracker.wash_log,
        &tracker.agenda,
        tracker.profile.cadence,
        today,
    );

    println!("{}", last.render());
    println!("{}", next.render());
    Ok(())
}
