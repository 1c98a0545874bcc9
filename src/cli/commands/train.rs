//! Train command - run the Q-learning loop and export its outputs

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_q_grid, print_section},
    pipeline::{
        ConsoleObserver, ProgressObserver, SnapshotObserver, TraceCsvObserver, TrainingConfig,
        TrainingPipeline, TrainingResult,
    },
    swimmer::HydroConstants,
};

#[derive(Parser, Debug)]
#[command(about = "Train the swimmer's gait", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Number of training steps
    #[arg(long, default_value_t = 200)]
    pub steps: usize,

    /// Learning rate alpha, within [0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f64,

    /// Discount factor gamma, within [0, 1)
    #[arg(long, default_value_t = 0.8)]
    pub gamma: f64,

    /// Exploration probability epsilon, within [0, 1)
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Stroke amplitude of the near arm
    #[arg(long, default_value_t = 1.35)]
    pub r1: f64,

    /// Stroke amplitude of the far arm
    #[arg(long, default_value_t = 1.44)]
    pub r2: f64,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the displacement/Q trajectories as CSV
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Write per-step sphere positions as JSONL for rendering
    #[arg(long)]
    pub snapshots: Option<PathBuf>,

    /// Write a JSON summary of the run
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Log every training step to stdout
    #[arg(long)]
    pub verbose: bool,

    /// Suppress the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

/// Execute the train command
pub fn execute(args: TrainArgs) -> Result<()> {
    let config = TrainingConfig {
        num_steps: args.steps,
        learning_rate: args.alpha,
        discount_factor: args.gamma,
        epsilon: args.epsilon,
        constants: HydroConstants {
            r1: args.r1,
            r2: args.r2,
        },
        seed: args.seed,
    };

    let mut pipeline = TrainingPipeline::new(config);
    if args.verbose {
        pipeline = pipeline.with_observer(Box::new(ConsoleObserver));
    }
    if !args.no_progress && !args.verbose {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.trace {
        pipeline = pipeline.with_observer(Box::new(TraceCsvObserver::create(path)?));
    }
    if let Some(path) = &args.snapshots {
        pipeline = pipeline.with_observer(Box::new(SnapshotObserver::create(path)?));
    }

    let result = pipeline.run()?;
    print_result(&result);

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        result.save(&path)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn print_result(result: &TrainingResult) {
    print_section("Training complete");
    print_kv("steps", &result.total_steps.to_string());
    print_kv("exploration steps", &result.exploration_steps.to_string());
    print_kv(
        "net displacement",
        &format!("{:+.4}", result.net_displacement),
    );
    if let Some(seed) = result.config.seed {
        print_kv("seed", &seed.to_string());
    }
    print_q_grid(&result.q_grid());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_path_appends_json_extension() {
        let path = sanitize_summary_path(Path::new("run_overview"));
        assert_eq!(path, PathBuf::from("run_overview.json"));

        let path = sanitize_summary_path(Path::new("results/run.JSON"));
        assert_eq!(path, PathBuf::from("results/run.JSON"));
    }

    #[test]
    fn summary_directory_gets_default_filename() {
        let raw = format!("summaries{}", std::path::MAIN_SEPARATOR);
        let path = sanitize_summary_path(Path::new(&raw));
        assert_eq!(path, Path::new("summaries").join("training_summary.json"));
    }
}
