//! roomfeed CLI — the main entry point.
//!
//! Commands:
//! - `feed`   — Build and print the recent-activity feed as JSON
//! - `doctor` — Diagnose configuration and platform connectivity
//! - `init`   — Write a default config file

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "roomfeed",
    about = "roomfeed — recent-activity feed for collaboration rooms",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the feed and print it as JSON
    Feed {
        /// Print compact JSON instead of pretty-printed
        #[arg(short, long)]
        compact: bool,
    },

    /// Diagnose configuration and platform connectivity
    Doctor,

    /// Write a default config file to ~/.roomfeed/config.toml
    Init,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Feed { compact } => commands::feed::run(compact).await?,
        Commands::Doctor => commands::doctor::run().await?,
        Commands::Init => commands::init::run()?,
    }

    Ok(())
}
