//! microswim CLI - Q-learning gait discovery for a two-link micro-swimmer
//!
//! This CLI provides a unified interface for:
//! - Training the tabular Q-learning agent on the three-sphere swimmer
//! - Re-rendering saved training summaries

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "microswim")]
#[command(version, about = "Q-learning gait discovery for a micro-swimmer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the swimmer's gait with tabular Q-learning
    Train(microswim::cli::commands::train::TrainArgs),

    /// Render a saved training summary
    Report(microswim::cli::commands::report::ReportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => microswim::cli::commands::train::execute(args),
        Commands::Report(args) => microswim::cli::commands::report::execute(args),
    }
}
