use anyhow::Result;
use owo_colors::OwoColorize;
use rinse_core::{Cadence, Store};

/// Profile fields to change; `None` leaves the saved value alone.
#[derive(Default)]
pub struct Update {
    pub hair_type: Option<String>,
    pub hair_length: Option<String>,
    pub shampoo: Option<String>,
    pub conditioner: Option<String>,
    pub treatments: Option<String>,
    pub notes: Option<String>,
    pub every: Option<u32>,
    pub between: Option<Vec<u32>>,
    pub event_reminders: Option<String>,
    pub auto_schedule: Option<String>,
}

pub fn show() -> Result<()> {
    let tracker = Store::open()?.load()?;
    let profile = &tracker.profile;

    print_field("Hair type", profile.hair_type.as_deref());
    print_field("Hair length", profile.hair_length.as_deref());
    print_field("Shampoo", profile.shampoo.as_deref());
    print_field("Conditioner", profile.conditioner.as_deref());
    print_field("Treatments", profile.treatments.as_deref());
    print_field("Notes", profile.notes.as_deref());

    match profile.cadence {
        Some(cadence) => println!("{:<13} {}", "Cadence", cadence.describe()),
        None => println!("{:<13} {}", "Cadence", "unset".dimmed()),
    }
    println!(
        "{:<13} {}",
        "Event washes",
        toggle_label(profile.event_wash_reminder)
    );
    println!(
        "{:<13} {}",
        "Auto-plan",
        toggle_label(profile.auto_schedule_washes)
    );
    Ok(())
}

fn print_field(label: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("{label:<13} {v}"),
        None => println!("{label:<13} {}", "unset".dimmed()),
    }
}

fn toggle_label(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

pub fn set(update: Update) -> Result<()> {
    let store = Store::open()?;
    let mut tracker = store.load()?;
    let profile = &mut tracker.profile;

    apply_text(&mut profile.hair_type, update.hair_type);
    apply_text(&mut profile.hair_length, update.hair_length);
    apply_text(&mut profile.shampoo, update.shampoo);
    apply_text(&mut profile.conditioner, update.conditioner);
    apply_text(&mut profile.treatments, update.treatments);
    apply_text(&mut profile.notes, update.notes);

    if let Some(every) = update.every {
        profile.cadence = Some(Cadence::Fixed(every).normalized());
    } else if let Some(between) = update.between {
        // clap guarantees exactly two values
        let requested = Cadence::Range {
            min: between[0],
            max: between[1],
        };
        let normalized = requested.normalized();
        if normalized != requested {
            println!(
                "{}",
                format!("Adjusted range to {}.", normalized.describe()).dimmed()
            );
        }
        profile.cadence = Some(normalized);
    }

    if let Some(value) = update.event_reminders {
        profile.event_wash_reminder = parse_toggle(&value)?;
    }
    if let Some(value) = update.auto_schedule {
        profile.auto_schedule_washes = parse_toggle(&value)?;
    }

    store.save(&tracker)?;
    println!("{}", "Profile saved.".green());
    Ok(())
}

/// An empty string clears the field; `None` leaves it untouched.
fn apply_text(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        let value = value.trim().to_string();
        *field = if value.is_empty() { None } else { Some(value) };
    }
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => anyhow::bail!("Expected \"on\" or \"off\", got \"{other}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_parses_on_and_off_only() {
        assert!(parse_toggle("on").unwrap());
        assert!(!parse_toggle("off").unwrap());
        assert!(parse_toggle("yes").is_err());
    }

    #[test]
    fn apply_text_clears_on_empty() {
        let mut field = Some("curly".to_string());
        apply_text(&mut field, Some("  ".to_string()));
        assert_eq!(field, None);
    }

    #[test]
    fn apply_text_keeps_when_unset() {
        let mut field = Some("curly".to_string());
        apply_text(&mut field, None);
        assert_eq!(field, Some("curly".to_string()));
    }

    #[test]
    fn apply_text_trims() {
        let mut field = None;
        apply_text(&mut field, Some(" wavy ".to_string()));
        assert_eq!(field, Some("wavy".to_string()));
    }
}
