use anyhow::Result;
use owo_colors::OwoColorize;
use rinse_core::Store;

pub fn run(state: &str) -> Result<()> {
    let enabled = match state {
        "on" => true,
        "off" => false,
        other => anyhow::bail!("Expected \"on\" or \"off\", got \"{other}\""),
    };

    let store = Store::open()?;
    let mut tracker = store.load()?;
    tracker.notifications_enabled = enabled;
    store.save(&tracker)?;

    if enabled {
        println!("{}", "Wash reminders on.".green());
        println!(
            "{}",
            "Run `rinse remind --wait` in the evening to get the 20:00 nudge.".dimmed()
        );
    } else {
        println!("Wash reminders off.");
    }
    Ok(())
}
