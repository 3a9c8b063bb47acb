mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventfinder_core::config::EventFinderConfig;
use eventfinder_core::store::SqliteStore;

#[derive(Parser)]
#[command(name = "eventfinder")]
#[command(about = "Browse, add and remove community events near you")]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, nearest first when a location is given
    List {
        /// Your latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Your longitude
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Only show events within this many km (0 = no limit)
        #[arg(short, long, default_value_t = 0.0)]
        radius: f64,

        #[arg(short, long)]
        district: Option<String>,

        #[arg(short, long)]
        place: Option<String>,

        /// Music, Tech, Sports, Art or Dance
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a single event
    Show { id: i64 },
    /// Add a new event
    Add {
        #[arg(long)]
        name: String,

        /// YYYY-MM-DD or "March 10, 2026"
        #[arg(long)]
        date: String,

        /// HH:MM (24-hour) or "7:00 PM"
        #[arg(long)]
        time: String,

        #[arg(long)]
        category: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        #[arg(long)]
        district: Option<String>,

        #[arg(long)]
        place: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Ticket price; marks the event as paid
        #[arg(long)]
        price: Option<f64>,
    },
    /// Delete an event
    Delete { id: i64 },
    /// Show config and database paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List {
            lat,
            lng,
            radius,
            district,
            place,
            category,
        } => {
            let store = open_store(&config)?;
            commands::list::run(&store, lat, lng, radius, district, place, category)
        }
        Commands::Show { id } => commands::show::run(&open_store(&config)?, id),
        Commands::Add {
            name,
            date,
            time,
            category,
            lat,
            lng,
            district,
            place,
            description,
            price,
        } => {
            let submission = commands::add::Submission {
                name,
                date,
                time,
                category,
                lat,
                lng,
                district,
                place,
                description,
                price,
            };
            commands::add::run(&open_store(&config)?, submission)
        }
        Commands::Delete { id } => commands::delete::run(&open_store(&config)?, id),
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<EventFinderConfig> {
    let config = match path {
        Some(path) => EventFinderConfig::load_from(path)?,
        None => EventFinderConfig::load()?,
    };
    Ok(config)
}

fn open_store(config: &EventFinderConfig) -> Result<SqliteStore> {
    let store = SqliteStore::open(&config.database_path(), config.seed_on_first_run)?;
    Ok(store)
}
