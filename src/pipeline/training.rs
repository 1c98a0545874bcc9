//! Training loop: epsilon-greedy policy over the swimmer's transition model

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Observer, StepEvent},
    q_learning::QLearningAgent,
    swimmer::{HydroConstants, SwimmerModel, SwimmerState, state::NUM_SLOTS},
};

/// Training configuration
///
/// An immutable bundle of every constant the run depends on, validated once
/// at pipeline construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training steps (the loop always runs exactly this many)
    pub num_steps: usize,

    /// Learning rate alpha, within [0, 1]
    pub learning_rate: f64,

    /// Discount factor gamma, within [0, 1)
    pub discount_factor: f64,

    /// Exploration probability epsilon, within [0, 1)
    pub epsilon: f64,

    /// Hydrodynamic stroke amplitudes for the reward tables
    pub constants: HydroConstants,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_steps: 200,
            learning_rate: 0.5,
            discount_factor: 0.8,
            epsilon: 0.1,
            constants: HydroConstants::default(),
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate every parameter range.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found: a zero-length run, a
    /// non-finite stroke amplitude, or a Q-learning parameter outside the
    /// ranges accepted by [`QLearningAgent::new`].
    pub fn validate(&self) -> Result<()> {
        if self.num_steps == 0 {
            return Err(crate::Error::EmptyTrainingRun);
        }
        self.constants.validate()?;
        crate::q_learning::agent::validate_params(
            self.learning_rate,
            self.discount_factor,
            self.epsilon,
        )
    }
}

/// Result of a training run, handed to the reporting collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total steps taken
    pub total_steps: usize,

    /// How many steps took the exploration branch
    pub exploration_steps: usize,

    /// Final net displacement of the swimmer
    pub net_displacement: f64,

    /// Final Q-values in slot order
    pub q_values: [f64; NUM_SLOTS],

    /// Cumulative net displacement per step; index 0 is the initial 0.0,
    /// so the length is `total_steps + 1`
    pub displacement_trace: Vec<f64>,

    /// Q-value of slot 0 per step, same length as `displacement_trace`
    pub q_first_trace: Vec<f64>,

    /// Configuration the run was produced with
    pub config: TrainingConfig,
}

impl TrainingResult {
    /// The final Q-table as a 4x2 grid, row-major by state then action.
    ///
    /// Rows correspond to states (0,0), (0,1), (1,0), (1,1); columns to the
    /// left and right flips.
    pub fn q_grid(&self) -> [[f64; 2]; 4] {
        let mut grid = [[0.0; 2]; 4];
        for (row, chunk) in self.q_values.chunks_exact(2).enumerate() {
            grid[row] = [chunk[0], chunk[1]];
        }
        grid
    }

    /// Save result to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline: owns the configuration and the observers
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the full training loop.
    ///
    /// The loop never terminates early: it performs exactly
    /// `config.num_steps` strokes from the both-links-extended start state.
    /// Each step selects an action, applies the transition, accumulates the
    /// trajectories, and applies the Bellman update at the pre-transition
    /// slot using the best Q-value reachable from the new state.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or when an observer fails.
    pub fn run(&mut self) -> Result<TrainingResult> {
        self.config.validate()?;

        let mut agent = QLearningAgent::new(
            self.config.learning_rate,
            self.config.discount_factor,
            self.config.epsilon,
        )?;
        if let Some(seed) = self.config.seed {
            agent = agent.with_seed(seed);
        }

        let model = SwimmerModel::new(self.config.constants);
        let mut state = SwimmerState::default();
        let mut net_displacement = 0.0;
        let mut center_position = 0.0;
        let mut exploration_steps = 0;

        let mut displacement_trace = Vec::with_capacity(self.config.num_steps + 1);
        let mut q_first_trace = Vec::with_capacity(self.config.num_steps + 1);
        displacement_trace.push(0.0);
        q_first_trace.push(0.0);

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_steps)?;
        }

        for step in 0..self.config.num_steps {
            let choice = agent.select_action(state);
            if choice.explored {
                exploration_steps += 1;
            }

            let transition = model.transition(state, choice.action);
            net_displacement += transition.reward;
            center_position += transition.center_shift;
            displacement_trace.push(net_displacement);

            agent.learn(state, choice.action, transition.reward, transition.next);
            state = transition.next;

            let q_first = agent.q_table().values()[0];
            q_first_trace.push(q_first);

            let event = StepEvent {
                step,
                state,
                action: choice.action,
                explored: choice.explored,
                reward: transition.reward,
                net_displacement,
                center_position,
                q_first,
            };
            for observer in &mut self.observers {
                observer.on_step(&event)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult {
            total_steps: self.config.num_steps,
            exploration_steps,
            net_displacement,
            q_values: *agent.q_table().values(),
            displacement_trace,
            q_first_trace,
            config: self.config.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_epsilon_is_rejected_before_running() {
        let config = TrainingConfig {
            epsilon: 1.0,
            ..TrainingConfig::default()
        };
        assert!(TrainingPipeline::new(config).run().is_err());
    }

    #[test]
    fn traces_have_one_more_entry_than_steps() {
        let config = TrainingConfig::default().with_seed(3);
        let result = TrainingPipeline::new(config).run().unwrap();
        assert_eq!(result.displacement_trace.len(), result.total_steps + 1);
        assert_eq!(result.q_first_trace.len(), result.total_steps + 1);
        assert_eq!(result.displacement_trace[0], 0.0);
        assert_eq!(result.q_first_trace[0], 0.0);
    }

    #[test]
    fn q_grid_matches_flat_slot_order() {
        let config = TrainingConfig::default().with_seed(3);
        let result = TrainingPipeline::new(config).run().unwrap();
        let grid = result.q_grid();
        for row in 0..4 {
            assert_eq!(grid[row][0], result.q_values[2 * row]);
            assert_eq!(grid[row][1], result.q_values[2 * row + 1]);
        }
    }
}
