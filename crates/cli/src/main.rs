//! Aris Farm CLI - Inspect and manage grand-opening registrations.
//!
//! Works directly on the site's data directory, so it can be run next to a
//! live server or against a copy of its data.
//!
//! # Usage
//!
//! ```bash
//! # List registrations
//! af-cli registrations list
//!
//! # Totals and preference breakdowns
//! af-cli registrations stats
//!
//! # Export to CSV (stdout, or a file)
//! af-cli registrations export -o aris-farm-registrations.csv
//!
//! # Append registrations from a YAML file
//! af-cli registrations seed -f guests.yaml
//!
//! # Show the last saved drink selection
//! af-cli selection show
//! ```
//!
//! # Environment Variables
//!
//! - `SITE_DATA_DIR` - Data directory shared with the site (default: data)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use aris_farm_site::db::{EventStore, open_storage};

mod commands;

#[derive(Parser)]
#[command(name = "af-cli")]
#[command(author, version, about = "Aris Farm grand opening CLI tools")]
struct Cli {
    /// Directory holding the site's stored data
    #[arg(long, env = "SITE_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with RSVP registrations
    Registrations {
        #[command(subcommand)]
        action: RegistrationsAction,
    },
    /// Work with the saved drink selection
    Selection {
        #[command(subcommand)]
        action: SelectionAction,
    },
}

#[derive(Subcommand)]
enum RegistrationsAction {
    /// List every registration in submission order
    List,
    /// Show totals and meal/beverage breakdowns
    Stats,
    /// Export registrations as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Append registrations from a YAML file
    Seed {
        /// YAML file containing a list of registrations
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SelectionAction {
    /// Show the last saved drink selection
    Show,
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never mix with CSV on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aris_farm_cli=info,aris_farm_site=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let storage = open_storage(&cli.data_dir)?;
    let store = EventStore::new(storage);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Registrations { action } => match action {
            RegistrationsAction::List => commands::registrations::list(&store, &mut stdout)?,
            RegistrationsAction::Stats => commands::registrations::stats(&store, &mut stdout)?,
            RegistrationsAction::Export { output } => {
                commands::registrations::export(&store, output.as_deref(), &mut stdout)?;
            }
            RegistrationsAction::Seed { file } => {
                let count = commands::seed::registrations_from_file(&store, &file)?;
                tracing::info!(count, path = %file.display(), "Seeding complete");
            }
        },
        Commands::Selection { action } => match action {
            SelectionAction::Show => commands::selection::show(&store, &mut stdout)?,
        },
    }
    Ok(())
}
