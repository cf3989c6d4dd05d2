//! Maison De Valeur CLI - Order status inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Classify an order snapshot from a file
//! mdv-cli classify order.json
//!
//! # Classify from stdin, as a customer-facing screen would
//! curl -s https://api.example.com/orders/1042 | mdv-cli classify --context customer
//!
//! # Emit the full result as JSON, logging the decision
//! mdv-cli classify order.json --json --log
//!
//! # Print the status transition table
//! mdv-cli transitions
//!
//! # Validate a single transition (exits 1 when not allowed)
//! mdv-cli transitions --from pending --to processing
//! ```
//!
//! # Commands
//!
//! - `classify` - Map an order snapshot to canonical UI statuses
//! - `transitions` - Inspect and validate the status transition table

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "mdv-cli")]
#[command(author, version, about = "Maison De Valeur CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an order snapshot into canonical UI statuses
    Classify {
        /// Path to an order JSON file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Viewer context (`admin` or `customer`)
        #[arg(short, long, default_value = "admin")]
        context: String,

        /// Log the classification decision through tracing
        #[arg(short, long)]
        log: bool,

        /// Emit the full result as JSON instead of a report
        #[arg(short, long)]
        json: bool,
    },
    /// Inspect the status transition table
    Transitions {
        /// Starting status in snake_case; prints the whole table when omitted
        #[arg(long)]
        from: Option<String>,

        /// Target status to validate against `--from`
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
}

fn main() {
    // .env may carry RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing with EnvFilter
    // Defaults to debug for the core crate so --log output is visible
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "maison_de_valeur_core=debug,mdv_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Classify {
            file,
            context,
            log,
            json,
        } => commands::classify::run(file.as_deref(), &context, log, json)?,
        Commands::Transitions { from, to } => {
            commands::transitions::run(from.as_deref(), to.as_deref())?;
        }
    }
    Ok(())
}
