//! Observer adapters for training pipelines
//!
//! Observers allow composable data collection during training without
//! coupling the loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Observer, StepEvent},
    swimmer::{SpherePositions, SwimmerState},
};

/// Progress bar observer - shows training progress and running displacement
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self { progress_bar: None }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_steps: usize) -> Result<()> {
        let pb = ProgressBar::new(total_steps as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} steps ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_step(&mut self, event: &StepEvent) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(event.step as u64 + 1);
            pb.set_message(format!("disp {:+.2}", event.net_displacement));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish();
        }
        Ok(())
    }
}

/// Console observer - one log line per training step
///
/// Reproduces the classic per-step trace:
/// `Training step    12,  net disp. 0.23  (exploring)`.
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn on_step(&mut self, event: &StepEvent) -> Result<()> {
        let flag = if event.explored { "  (exploring)" } else { "" };
        println!(
            "Training step {:5},  net disp. {:.2}{}",
            event.step, event.net_displacement, flag
        );
        Ok(())
    }
}

/// CSV trace observer - writes the displacement and Q trajectories
///
/// Emits one row per step plus a step-0 row for the initial values, so a
/// run of N steps produces N + 1 data rows.
pub struct TraceCsvObserver {
    writer: csv::Writer<File>,
}

#[derive(Debug, Serialize)]
struct TraceRow {
    step: usize,
    net_displacement: f64,
    q_first: f64,
}

impl TraceCsvObserver {
    /// Create the trace file, truncating any existing one
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create trace file '{}'", path.as_ref().display()),
            source,
        })?;
        Ok(Self {
            writer: csv::Writer::from_writer(file),
        })
    }
}

impl Observer for TraceCsvObserver {
    fn on_training_start(&mut self, _total_steps: usize) -> Result<()> {
        self.writer.serialize(TraceRow {
            step: 0,
            net_displacement: 0.0,
            q_first: 0.0,
        })?;
        Ok(())
    }

    fn on_step(&mut self, event: &StepEvent) -> Result<()> {
        self.writer.serialize(TraceRow {
            step: event.step + 1,
            net_displacement: event.net_displacement,
            q_first: event.q_first,
        })?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One rendering snapshot: sphere positions for a given step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub step: usize,
    pub state: SwimmerState,
    pub spheres: SpherePositions,
}

/// Snapshot observer - JSONL stream of sphere positions for rendering
///
/// Writes the initial configuration as step 0, then one record per stroke.
/// Positions are derived from the accumulated center-sphere position, not
/// from the reward, so they include the rigid-body drift.
pub struct SnapshotObserver {
    writer: BufWriter<File>,
}

impl SnapshotObserver {
    /// Create the snapshot file, truncating any existing one
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create snapshot file '{}'", path.as_ref().display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    fn write_record(&mut self, record: &SnapshotRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Observer for SnapshotObserver {
    fn on_training_start(&mut self, _total_steps: usize) -> Result<()> {
        let state = SwimmerState::default();
        self.write_record(&SnapshotRecord {
            step: 0,
            state,
            spheres: SpherePositions::from_center(0.0, state),
        })
    }

    fn on_step(&mut self, event: &StepEvent) -> Result<()> {
        self.write_record(&SnapshotRecord {
            step: event.step + 1,
            state: event.state,
            spheres: SpherePositions::from_center(event.center_position, event.state),
        })
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
