//! Place Vendor bridge CLI - authentication, directory and submission tools.
//!
//! # Usage
//!
//! ```bash
//! # Probe the configured credentials against the login mutation
//! pv-cli auth test
//!
//! # List warehouses visible to the account's company
//! pv-cli warehouses --name Central
//!
//! # Submit a confirmed order's fulfillment events
//! pv-cli submit --file order.json --kind sale --warehouse 7
//! ```
//!
//! # Commands
//!
//! - `auth test` - Run the login probe and persist the outcome
//! - `warehouses` - Fetch the warehouse directory and show the selection state
//! - `submit` - Push an order's deliveries or receptions to a warehouse

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};

use placevendor_core::OrderKind;

mod commands;

#[derive(Parser)]
#[command(name = "pv-cli")]
#[command(author, version, about = "Place Vendor bridge CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authentication against the Place Vendor endpoint
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Fetch the warehouse directory and show the selection state
    Warehouses {
        /// Filter warehouses by name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Submit an order's fulfillment events
    Submit {
        /// Path to a JSON file with the order and its events
        #[arg(short, long)]
        file: String,

        /// Order kind (sale orders send deliveries, purchase orders receptions)
        #[arg(short, long)]
        kind: Kind,

        /// Target warehouse id; omitted, the selection flow decides
        #[arg(short, long)]
        warehouse: Option<i64>,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Run the login probe with the configured credentials
    Test,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Sale,
    Purchase,
}

impl From<Kind> for OrderKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Sale => Self::Sale,
            Kind::Purchase => Self::Purchase,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Test => commands::auth::test().await?,
        },
        Commands::Warehouses { name } => {
            commands::warehouses::list(name.as_deref()).await?;
        }
        Commands::Submit {
            file,
            kind,
            warehouse,
        } => {
            commands::submit::order(&file, kind.into(), warehouse).await?;
        }
    }
    Ok(())
}
