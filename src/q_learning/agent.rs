//! Epsilon-greedy Q-learning agent

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Error, Result,
    q_learning::q_table::QTable,
    swimmer::state::{Action, SwimmerState},
};

/// Check the Q-learning parameter ranges shared by the agent and the
/// training configuration.
pub(crate) fn validate_params(learning_rate: f64, discount_factor: f64, epsilon: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&learning_rate) {
        return Err(Error::InvalidLearningRate {
            value: learning_rate,
        });
    }
    if !(0.0..1.0).contains(&discount_factor) {
        return Err(Error::InvalidDiscountFactor {
            value: discount_factor,
        });
    }
    if !(0.0..1.0).contains(&epsilon) {
        return Err(Error::InvalidExplorationRate { value: epsilon });
    }
    Ok(())
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// The action picked for one step, tagged with how it was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionChoice {
    pub action: Action,
    /// True when the exploration branch was taken
    pub explored: bool,
}

/// Q-learning agent (off-policy TD control)
///
/// Owns the Q-table and the random source. The policy consumes exactly one
/// uniform draw on an exploiting step and exactly two on an exploring step,
/// so a seeded agent replays a training run bit-for-bit.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create a new agent with a zeroed Q-table.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - alpha parameter, within [0, 1]
    /// * `discount_factor` - gamma parameter, within [0, 1)
    /// * `epsilon` - exploration probability, within [0, 1)
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any parameter is outside its range.
    pub fn new(learning_rate: f64, discount_factor: f64, epsilon: f64) -> Result<Self> {
        validate_params(learning_rate, discount_factor, epsilon)?;
        Ok(Self {
            q_table: QTable::new(learning_rate, discount_factor),
            epsilon,
            rng: build_rng(None),
            rng_seed: None,
        })
    }

    /// Seed the random source for deterministic runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Epsilon-greedy action selection.
    ///
    /// Exploits when the first uniform draw exceeds epsilon; otherwise a
    /// second draw picks uniformly between the two flips. The exploit branch
    /// delegates to [`QTable::greedy_action`], whose strict comparison sends
    /// exact ties to the right flip.
    pub fn select_action(&mut self, state: SwimmerState) -> ActionChoice {
        if self.rng.random::<f64>() > self.epsilon {
            ActionChoice {
                action: self.q_table.greedy_action(state),
                explored: false,
            }
        } else {
            let action = if self.rng.random::<f64>() < 0.5 {
                Action::FlipLeft
            } else {
                Action::FlipRight
            };
            ActionChoice {
                action,
                explored: true,
            }
        }
    }

    /// Apply the one-step Bellman update for an observed transition
    pub fn learn(
        &mut self,
        state: SwimmerState,
        action: Action,
        reward: f64,
        next_state: SwimmerState,
    ) {
        self.q_table.update(state, action, reward, next_state);
    }

    /// The learned value table
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Reset learned values and replay the seed, if any
    pub fn reset(&mut self) {
        self.q_table.reset();
        self.rng = build_rng(self.rng_seed);
    }
}
