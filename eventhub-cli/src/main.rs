mod commands;
mod render;
mod utils;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use eventhub_core::config::HubConfig;
use eventhub_core::store::EventStore;

#[derive(Parser)]
#[command(name = "eventhub")]
#[command(about = "Discover, create, and register for events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the featured event and upcoming events
    Events,

    /// Show the events calendar
    Calendar {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Navigate by this many months from the displayed month (e.g. -1, 3)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Calendar view: 'month' or 'list' (defaults from config)
        #[arg(short, long)]
        view: Option<String>,
    },

    /// Show full details for one event
    Show {
        /// Event id (see `eventhub events`)
        id: String,
    },

    /// Register for an event
    Register {
        /// Event id (see `eventhub events`)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Create a new event
    New {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// End date for multi-day events (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Start time (HH:MM, 24-hour)
        #[arg(long)]
        start_time: Option<String>,

        /// End time (HH:MM, 24-hour)
        #[arg(long)]
        end_time: Option<String>,

        /// Maximum number of attendees
        #[arg(long)]
        capacity: Option<String>,

        /// conference, workshop, webinar, networking, social, or other
        #[arg(long)]
        category: Option<String>,
    },

    /// Your events: upcoming and past, with registration numbers
    Dashboard {
        /// Show past events instead of upcoming ones
        #[arg(long)]
        past: bool,
    },

    /// Show or change settings
    Config {
        /// Default calendar view: 'month' or 'list'
        #[arg(long)]
        view: Option<String>,

        /// Organizer name for created events (empty string clears it)
        #[arg(long)]
        organizer: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = HubConfig::load()?;
    let mut store = EventStore::seeded();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Events => commands::events::run(&store, today),
        Commands::Calendar {
            month,
            offset,
            view,
        } => commands::calendar::run(&store, &config, today, month.as_deref(), offset, view.as_deref()),
        Commands::Show { id } => commands::show::run(&store, &id, today),
        Commands::Register {
            id,
            name,
            email,
            phone,
        } => commands::register::run(&mut store, &id, name, email, phone).await,
        Commands::New {
            title,
            description,
            location,
            date,
            end_date,
            start_time,
            end_time,
            capacity,
            category,
        } => {
            commands::new::run(
                &mut store,
                &config,
                commands::new::Args {
                    title,
                    description,
                    location,
                    date,
                    end_date,
                    start_time,
                    end_time,
                    capacity,
                    category,
                },
            )
            .await
        }
        Commands::Dashboard { past } => commands::dashboard::run(&store, today, past),
        Commands::Config { view, organizer } => {
            commands::config::run(view.as_deref(), organizer.as_deref())
        }
    }
}
