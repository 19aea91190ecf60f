//! NUBAN CLI - Main entry point

use clap::{Parser, Subcommand};
use nuban_cli::commands;
use nuban_registry::{EmbeddedProvider, FileProvider, RegistryProvider};
use nuban_suggest::PrioritizationPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nuban")]
#[command(about = "NUBAN account validation and issuing-bank suggestion", long_about = None)]
struct Cli {
    /// Bank list JSON file (defaults to the bundled registry)
    #[arg(short, long, global = true)]
    banks: Option<PathBuf>,

    /// Prioritization policy JSON file (defaults to the documented policy)
    #[arg(short, long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest which banks could have issued an account number
    Suggest {
        /// 10-digit NUBAN account number (spaces/hyphens allowed)
        account: String,
    },

    /// Validate an account number against one bank code
    Validate {
        /// 10-digit NUBAN account number
        account: String,
        /// 3-digit DMB or 5-digit OFI bank code
        bank_code: String,
    },

    /// Search the registry by bank name
    Search {
        /// Case-insensitive substring of the bank name
        name: String,
    },

    /// Print the whole bank registry
    List,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let provider: Box<dyn RegistryProvider> = match cli.banks {
        Some(path) => Box::new(FileProvider::new(path)),
        None => Box::new(EmbeddedProvider::new()),
    };

    let policy = match cli.policy {
        Some(path) => PrioritizationPolicy::from_file(&path)?,
        None => PrioritizationPolicy::default(),
    };

    match cli.command {
        Commands::Suggest { account } => commands::suggest(provider.as_ref(), &account, &policy),
        Commands::Validate { account, bank_code } => commands::validate(&account, &bank_code),
        Commands::Search { name } => commands::search(provider.as_ref(), &name),
        Commands::List => commands::list(provider.as_ref()),
    }
}
