use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use owo_colors::OwoColorize;
use rinse_core::{EntryKind, Store, Tracker};

/// Cells in the month grid: six Sun-first weeks, padded with the
/// neighboring months.
const GRID_CELLS: i64 = 42;

pub fn run(month: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let first = match month {
        Some(s) => parse_month(s)?,
        None => today.with_day(1).unwrap(),
    };

    let tracker = Store::open()?.load()?;

    println!("{}", first.format("%B %Y").bold());
    for day in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
        print!("{:>3} ", day);
    }
    println!();

    let grid = month_grid(first);
    for week in grid.chunks(7) {
        let mut line = String::new();
        for date in week {
            line.push_str(&render_day(*date, first.month(), today, &tracker));
        }
        println!("{line}");
    }

    println!();
    println!(
        "{} washed   {} event   {} planned wash",
        "■".blue(),
        "■".magenta(),
        "■".cyan()
    );
    Ok(())
}

/// Parse `YYYY-MM` into the first day of that month.
fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM", s))
}

/// The 42 days shown for a month, starting on the Sunday on or before
/// the 1st.
fn month_grid(first: NaiveDate) -> Vec<NaiveDate> {
    let lead = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(lead);
    (0..GRID_CELLS).map(|i| start + Duration::days(i)).collect()
}

fn render_day(date: NaiveDate, month: u32, today: NaiveDate, tracker: &Tracker) -> String {
    let cell = format!("{:>3}", date.day());

    if date.month() != month {
        return format!("{} ", cell.dimmed());
    }

    let mut cell = if tracker.wash_log.contains(date) {
        cell.blue().to_string()
    } else if tracker.agenda.exists_on(date, EntryKind::Event) {
        cell.magenta().to_string()
    } else if tracker.agenda.exists_on(date, EntryKind::ScheduledWash) {
        cell.cyan().to_string()
    } else {
        cell
    };

    if date == today {
        cell = cell.bold().underline().to_string();
    }
    format!("{cell} ")
}
