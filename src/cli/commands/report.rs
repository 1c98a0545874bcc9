//! Report command - re-render a saved training summary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::pipeline::TrainingResult;

#[derive(Parser, Debug)]
#[command(about = "Render a saved training summary")]
pub struct ReportArgs {
    /// Path to a summary JSON written by `train --summary`
    pub summary: PathBuf,
}

/// Execute the report command
pub fn execute(args: ReportArgs) -> Result<()> {
    let result = TrainingResult::load(&args.summary)
        .with_context(|| format!("failed to load summary '{}'", args.summary.display()))?;
    super::train::print_result(&result);
    Ok(())
}
