//! Vessel CLI - Command-line access to the vessel store
//!
//! Usage:
//!   vessel list --center <uuid>           - List vessels visible to a center
//!   vessel find <uuid>                    - Show one vessel
//!   vessel add --name <n> --category <uuid> --center <uuid> [--visibility <v>]
//!                                         - Register a vessel, print its UUID
//!
//! Logging goes to stderr and is controlled by RUST_LOG.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{AddCommand, FindCommand, ListCommand};
use cli::output::Output;
use cli::store;
use vessel_adapter::{InMemoryVesselCollection, VesselService};
use vessel_domain::VesselRepository;

#[derive(Parser)]
#[command(name = "vessel")]
#[command(about = "Vessel store - list, find and register vessels in MongoDB")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (uri, database, collection)
    #[arg(short = 'C', long, global = true, env = "VESSEL_CONFIG")]
    config: Option<PathBuf>,

    /// Use an empty, process-local collection instead of MongoDB
    #[arg(long, global = true)]
    in_memory: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List vessels visible to a center
    List(ListCommand),
    /// Show a vessel by UUID
    Find(FindCommand),
    /// Register a new vessel
    Add(AddCommand),
}

impl Commands {
    async fn run<R: VesselRepository>(&self, repo: &R, output: Output) -> anyhow::Result<String> {
        match self {
            Commands::List(cmd) => cmd.run(repo, output).await,
            Commands::Find(cmd) => cmd.run(repo, output).await,
            Commands::Add(cmd) => cmd.run(repo, output).await,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(cli.json);

    let rendered = if cli.in_memory {
        let repo = VesselService::new(InMemoryVesselCollection::new());
        cli.command.run(&repo, output).await?
    } else {
        let config = store::load_config(cli.config.as_deref())?;
        let repo = VesselService::new(store::connect(&config).await?);
        cli.command.run(&repo, output).await?
    };

    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}
