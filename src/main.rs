//! Repograph CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "repograph")]
#[command(about = "Repository structure and import graph analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Repository root path (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the repository and write the graph JSON
    Analyze {
        /// Output file for the serialized graph
        #[arg(short, long, default_value = "graph.json")]
        out: PathBuf,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "repograph={log_level},repograph_core={log_level},repograph_analyzer={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Analyze { out } => commands::analyze(cli.root, out).await,
        Commands::Version => {
            println!("Repograph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
