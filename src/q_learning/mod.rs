//! Tabular Q-learning for the swimmer's gait
//!
//! The state space has four configurations and two actions, so the entire
//! value function fits in a fixed eight-slot table. [`QTable`] owns that
//! table and the Bellman update; [`QLearningAgent`] adds the stochastic
//! epsilon-greedy policy on top of it.
//!
//! ## Tie-breaking
//!
//! The greedy policy prefers the left flip only when its Q-value is
//! *strictly* larger, so exact ties resolve to the right flip. This is a
//! deliberate policy choice, preserved from the original comparison; it
//! matters in practice only at initialization, when every Q-value is zero.

pub mod agent;
pub mod q_table;

pub use agent::{ActionChoice, QLearningAgent};
pub use q_table::QTable;
