//! Fixed-size Q-table over the eight (state, action) slots

use serde::{Deserialize, Serialize};

use crate::swimmer::state::{Action, NUM_SLOTS, NUM_STATES, SwimmerState};

/// Q-values for every (state, action) slot, plus the update parameters
///
/// Slot order follows [`SwimmerState::slot`]. All entries start at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    values: [f64; NUM_SLOTS],
    /// Learning rate alpha
    learning_rate: f64,
    /// Discount factor gamma
    discount_factor: f64,
}

impl QTable {
    /// Create a zero-initialized Q-table.
    ///
    /// Parameter ranges are validated upstream by
    /// [`crate::pipeline::TrainingConfig::validate`].
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: [0.0; NUM_SLOTS],
            learning_rate,
            discount_factor,
        }
    }

    /// Q-value for a (state, action) pair
    pub fn get(&self, state: SwimmerState, action: Action) -> f64 {
        self.values[state.slot(action)]
    }

    /// Maximum Q-value over the two actions available in `state`
    pub fn max_q(&self, state: SwimmerState) -> f64 {
        f64::max(
            self.get(state, Action::FlipLeft),
            self.get(state, Action::FlipRight),
        )
    }

    /// Greedy action for `state`.
    ///
    /// Uses a strict comparison, so an exact tie selects [`Action::FlipRight`]
    /// (see the module docs).
    pub fn greedy_action(&self, state: SwimmerState) -> Action {
        if self.get(state, Action::FlipLeft) > self.get(state, Action::FlipRight) {
            Action::FlipLeft
        } else {
            Action::FlipRight
        }
    }

    /// One-step Q-learning update (off-policy TD control).
    ///
    /// `Q(s,a) <- (1 - alpha) * Q(s,a) + alpha * (r + gamma * max_a' Q(s',a'))`
    ///
    /// The convex-combination form is kept as written rather than the
    /// equivalent TD-error form so that repeated runs are bit-reproducible
    /// against the reference trajectories.
    pub fn update(
        &mut self,
        state: SwimmerState,
        action: Action,
        reward: f64,
        next_state: SwimmerState,
    ) {
        let slot = state.slot(action);
        let foresight = self.max_q(next_state);
        self.values[slot] = (1.0 - self.learning_rate) * self.values[slot]
            + self.learning_rate * (reward + self.discount_factor * foresight);
    }

    /// All eight Q-values in slot order
    pub fn values(&self) -> &[f64; NUM_SLOTS] {
        &self.values
    }

    /// Reshape into a 4x2 grid, row-major by state then action
    pub fn to_grid(&self) -> [[f64; 2]; NUM_STATES] {
        let mut grid = [[0.0; 2]; NUM_STATES];
        for (row, chunk) in self.values.chunks_exact(2).enumerate() {
            grid[row] = [chunk[0], chunk[1]];
        }
        grid
    }

    /// Rebuild the flat table from a 4x2 grid, inverting [`QTable::to_grid`]
    pub fn from_grid(
        grid: [[f64; 2]; NUM_STATES],
        learning_rate: f64,
        discount_factor: f64,
    ) -> Self {
        let mut values = [0.0; NUM_SLOTS];
        for (row, pair) in grid.iter().enumerate() {
            values[2 * row] = pair[0];
            values[2 * row + 1] = pair[1];
        }
        Self {
            values,
            learning_rate,
            discount_factor,
        }
    }

    /// Reset all Q-values to zero
    pub fn reset(&mut self) {
        self.values = [0.0; NUM_SLOTS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swimmer::state::LinkPhase::{Contracted, Extended};

    fn table_with(values: [f64; NUM_SLOTS]) -> QTable {
        let mut table = QTable::new(0.5, 0.8);
        table.values = values;
        table
    }

    #[test]
    fn greedy_prefers_strictly_larger_left() {
        let table = table_with([0.2, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            table.greedy_action(SwimmerState::default()),
            Action::FlipLeft
        );
    }

    #[test]
    fn greedy_tie_breaks_toward_right() {
        let table = QTable::new(0.5, 0.8);
        for state in SwimmerState::ALL {
            assert_eq!(table.greedy_action(state), Action::FlipRight);
        }

        let tied = table_with([0.7, 0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            tied.greedy_action(SwimmerState::default()),
            Action::FlipRight
        );
    }

    #[test]
    fn update_is_convex_combination_toward_target() {
        let mut table = table_with([0.4, 0.0, 0.3, 0.1, 0.0, 0.0, 0.0, 0.0]);
        let state = SwimmerState::default();
        let next = SwimmerState::new(Extended, Contracted); // slots 2, 3

        table.update(state, Action::FlipLeft, 1.0, next);

        // (1 - 0.5) * 0.4 + 0.5 * (1.0 + 0.8 * 0.3) = 0.82
        assert!((table.get(state, Action::FlipLeft) - 0.82).abs() < 1e-12);
        // The other slot is untouched
        assert_eq!(table.get(state, Action::FlipRight), 0.0);
    }

    #[test]
    fn grid_round_trip_is_lossless() {
        let table = table_with([0.1, -0.2, 0.3, -0.4, 0.5, -0.6, 0.7, -0.8]);
        let rebuilt = QTable::from_grid(table.to_grid(), 0.5, 0.8);
        assert_eq!(rebuilt.values(), table.values());
    }

    #[test]
    fn grid_is_row_major_by_state() {
        let table = table_with([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let grid = table.to_grid();
        for state in SwimmerState::ALL {
            let row = state.index() - 1;
            assert_eq!(grid[row][0], table.get(state, Action::FlipLeft));
            assert_eq!(grid[row][1], table.get(state, Action::FlipRight));
        }
    }
}
