//! Q-learning gait discovery for a two-link micro-swimmer
//!
//! This crate simulates the Najafi-Golestanian three-sphere swimmer at low
//! Reynolds number and trains a tabular Q-learning agent to discover a
//! stroke pattern that produces net locomotion, despite the time-reversal
//! symmetry of Stokes flow.
//!
//! It provides:
//! - A discrete four-state, two-action model of the swimmer with
//!   precomputed physical reward tables ([`swimmer`])
//! - A seedable epsilon-greedy Q-learning agent over a fixed eight-slot
//!   value table ([`q_learning`])
//! - A training pipeline with composable observers for progress display,
//!   per-step logs, CSV traces, and rendering snapshots ([`pipeline`])
//!
//! References: Najafi and Golestanian, Phys. Rev. E (2004); Tsang et al.,
//! Phys. Rev. Fluids (2020).

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod swimmer;

pub use error::{Error, Result};
pub use pipeline::{TrainingConfig, TrainingPipeline, TrainingResult};
pub use q_learning::{QLearningAgent, QTable};
pub use swimmer::{Action, HydroConstants, LinkPhase, SwimmerModel, SwimmerState};
