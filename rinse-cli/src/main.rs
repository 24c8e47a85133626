mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rinse")]
#[command(about = "Track hair washes and plan the next one")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a wash (today unless a date is given)
    Log {
        /// Day of the wash (YYYY-MM-DD)
        date: Option<String>,
    },
    /// Remove a logged wash
    Unlog {
        /// Day to remove (YYYY-MM-DD)
        date: String,
    },
    /// Show last-wash and next-wash status
    Status,
    /// Manage calendar events
    #[command(subcommand)]
    Event(EventCommands),
    /// Generate scheduled washes from your cadence
    Schedule,
    /// Month view of washes and events
    Calendar {
        /// Month to show (YYYY-MM), current month by default
        month: Option<String>,
    },
    /// Show or edit your hair profile
    #[command(subcommand)]
    Profile(ProfileCommands),
    /// Turn wash reminders on or off
    Notifications {
        /// "on" or "off"
        state: String,
    },
    /// Send tonight's wash reminder if one is due
    Remind {
        /// Block until 20:00 before sending
        #[arg(long)]
        wait: bool,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// Add a calendar entry
    Add {
        /// Day of the event (YYYY-MM-DD)
        date: String,

        /// What's happening
        name: String,

        /// Add a scheduled wash instead of an event
        #[arg(long)]
        wash: bool,

        /// Accept the day-before wash suggestion without asking
        #[arg(long)]
        yes: bool,

        /// Skip the day-before wash suggestion
        #[arg(long, conflicts_with = "yes")]
        no_prompt: bool,
    },
    /// Remove an entry by id
    Rm { id: u64 },
    /// List upcoming events
    List {
        /// Include scheduled washes
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Print the saved profile
    Show,
    /// Update profile fields (only the flags you pass change)
    Set {
        #[arg(long)]
        hair_type: Option<String>,

        #[arg(long)]
        hair_length: Option<String>,

        #[arg(long)]
        shampoo: Option<String>,

        #[arg(long)]
        conditioner: Option<String>,

        #[arg(long)]
        treatments: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Wash every N days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..), conflicts_with = "between")]
        every: Option<u32>,

        /// Wash every MIN to MAX days
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], value_parser = clap::value_parser!(u32).range(1..))]
        between: Option<Vec<u32>>,

        /// Offer a wash the day before new events ("on"/"off")
        #[arg(long, value_name = "ON|OFF")]
        event_reminders: Option<String>,

        /// Re-plan washes automatically after logging ("on"/"off")
        #[arg(long, value_name = "ON|OFF")]
        auto_schedule: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Log { date } => commands::log::run(date.as_deref()),
        Commands::Unlog { date } => commands::unlog::run(&date),
        Commands::Status => commands::status::run(),
        Commands::Event(event) => match event {
            EventCommands::Add {
                date,
                name,
                wash,
                yes,
                no_prompt,
            } => commands::event::add(&date, &name, wash, yes, no_prompt),
            EventCommands::Rm { id } => commands::event::rm(id),
            EventCommands::List { all } => commands::event::list(all),
        },
        Commands::Schedule => commands::schedule::run(),
        Commands::Calendar { month } => commands::calendar::run(month.as_deref()),
        Commands::Profile(profile) => match profile {
            ProfileCommands::Show => commands::profile::show(),
            ProfileCommands::Set {
                hair_type,
                hair_length,
                shampoo,
                conditioner,
                treatments,
                notes,
                every,
                between,
                event_reminders,
                auto_schedule,
            } => commands::profile::set(commands::profile::Update {
                hair_type,
                hair_length,
                shampoo,
                conditioner,
                treatments,
                notes,
                every,
                between,
                event_reminders,
                auto_schedule,
            }),
        },
        Commands::Notifications { state } => commands::notifications::run(&state),
        Commands::Remind { wait } => commands::remind::run(wait),
    }
}
