//! TomeKeeper CLI - reconcile curated careers and inspect extracted game data

pub mod commands;
pub mod progress;
pub mod prompt;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "tomekeeper")]
#[command(about = "TomeKeeper: reconcile curated ability catalogs against game data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the TomeKeeper CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
