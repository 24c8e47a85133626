use anyhow::Result;
use owo_colors::OwoColorize;
use rinse_core::Store;
use rinse_core::date::parse_key;

pub fn run(date: &str) -> Result<()> {
    let date = parse_key(date)?;

    let store = Store::open()?;
    let mut tracker = store.load()?;

    if !tracker.wash_log.unrecord(date) {
        println!(
            "{}",
            format!("No wash logged on {}.", date.format("%a %b %-d")).dimmed()
        );
        return Ok(());
    }

    store.save(&tracker)?;
    println!(
        "{}",
        format!("Removed wash log for {}.", date.format("%a %b %-d")).green()
    );
    Ok(())
}
