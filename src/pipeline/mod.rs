//! Training pipeline for the swimmer's Q-learning agent

pub mod observers;
pub mod training;

pub use observers::{ConsoleObserver, ProgressObserver, SnapshotObserver, TraceCsvObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};
