//! Error types for the microswim crate

use thiserror::Error;

/// Main error type for the microswim crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("learning rate {value} must be within [0, 1]")]
    InvalidLearningRate { value: f64 },

    #[error("discount factor {value} must be within [0, 1)")]
    InvalidDiscountFactor { value: f64 },

    #[error("exploration rate {value} must be within [0, 1)")]
    InvalidExplorationRate { value: f64 },

    #[error("stroke amplitudes must be finite, got r1={r1}, r2={r2}")]
    InvalidStrokeAmplitude { r1: f64, r2: f64 },

    #[error("training run must cover at least one step")]
    EmptyTrainingRun,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
