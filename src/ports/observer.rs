//! Observer port - abstraction for training observation and data collection
//!
//! The training loop itself only accumulates the displacement and Q-value
//! trajectories; everything else a consumer might want (progress bars,
//! per-step logs, CSV traces, rendering snapshots) is collected through
//! this port, keeping the loop free of output concerns.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    swimmer::state::{Action, SwimmerState},
};

/// Everything observable about one completed training step
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StepEvent {
    /// Step number, 0-based
    pub step: usize,
    /// Configuration after the stroke
    pub state: SwimmerState,
    /// The stroke taken
    pub action: Action,
    /// True when the policy took the exploration branch
    pub explored: bool,
    /// Reward received for this stroke
    pub reward: f64,
    /// Cumulative net displacement including this stroke
    pub net_displacement: f64,
    /// Accumulated center-sphere position (rendering only)
    pub center_position: f64,
    /// Q-value of slot 0 after this step's update
    pub q_first: f64,
}

/// Observer trait for monitoring training
///
/// Observers compose: the pipeline holds a list of boxed observers and
/// notifies each in registration order.
///
/// # Event sequence
///
/// 1. `on_training_start(total_steps)` - once, before the first step
/// 2. `on_step(event)` - once per training step, after the Q update
/// 3. `on_training_end()` - once, after the last step
pub trait Observer: Send {
    /// Called before the first training step.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_training_start(&mut self, _total_steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each training step completes.
    fn on_step(&mut self, _event: &StepEvent) -> Result<()> {
        Ok(())
    }

    /// Called after the final training step.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to flush buffers or finalize output.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
