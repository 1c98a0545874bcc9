//! Swimmer configuration and stroke actions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of swimmer configurations (two binary links)
pub const NUM_STATES: usize = 4;

/// Number of (state, action) slots in the flat reward/Q tables
pub const NUM_SLOTS: usize = 8;

/// Phase of a single link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkPhase {
    /// Fully extended arm (phase bit 0)
    Extended,
    /// Contracted arm (phase bit 1)
    Contracted,
}

impl LinkPhase {
    /// Flip this link to the opposite phase
    pub fn toggled(self) -> LinkPhase {
        match self {
            LinkPhase::Extended => LinkPhase::Contracted,
            LinkPhase::Contracted => LinkPhase::Extended,
        }
    }

    /// Phase bit used by the state index encoding
    pub fn bit(self) -> usize {
        match self {
            LinkPhase::Extended => 0,
            LinkPhase::Contracted => 1,
        }
    }
}

/// A stroke choice: flip one of the two links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    FlipLeft,
    FlipRight,
}

impl Action {
    /// Action index within a state's pair of slots (L = 0, R = 1)
    pub fn index(self) -> usize {
        match self {
            Action::FlipLeft => 0,
            Action::FlipRight => 1,
        }
    }

    /// Single-letter label used in table headings
    pub fn label(self) -> char {
        match self {
            Action::FlipLeft => 'L',
            Action::FlipRight => 'R',
        }
    }

    /// Both actions in slot order
    pub const ALL: [Action; 2] = [Action::FlipLeft, Action::FlipRight];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Complete swimmer configuration: the phase of each link
///
/// This type implements `Copy`; the whole state space is four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwimmerState {
    pub left: LinkPhase,
    pub right: LinkPhase,
}

impl SwimmerState {
    /// Create a state from the two link phases
    pub fn new(left: LinkPhase, right: LinkPhase) -> Self {
        Self { left, right }
    }

    /// All four states in index order
    pub const ALL: [SwimmerState; NUM_STATES] = [
        SwimmerState {
            left: LinkPhase::Extended,
            right: LinkPhase::Extended,
        },
        SwimmerState {
            left: LinkPhase::Extended,
            right: LinkPhase::Contracted,
        },
        SwimmerState {
            left: LinkPhase::Contracted,
            right: LinkPhase::Extended,
        },
        SwimmerState {
            left: LinkPhase::Contracted,
            right: LinkPhase::Contracted,
        },
    ];

    /// One-based state index: `2*left + right + 1`, in 1..=4
    ///
    /// The mapping is a bijection between the four phase pairs and
    /// {1, 2, 3, 4}; see the slot layout in [`SwimmerState::slot`].
    pub fn index(self) -> usize {
        2 * self.left.bit() + self.right.bit() + 1
    }

    /// Flat slot for a (state, action) pair, in 0..=7
    ///
    /// Layout (row-major by state, then action):
    ///
    /// ```text
    /// state  (l,r)  |  L  R
    /// --------------+-------
    ///   1    (0,0)  |  0  1
    ///   2    (0,1)  |  2  3
    ///   3    (1,0)  |  4  5
    ///   4    (1,1)  |  6  7
    /// ```
    pub fn slot(self, action: Action) -> usize {
        2 * (self.index() - 1) + action.index()
    }

    /// The state reached by performing `action` from this state
    pub fn apply(self, action: Action) -> SwimmerState {
        match action {
            Action::FlipLeft => SwimmerState {
                left: self.left.toggled(),
                right: self.right,
            },
            Action::FlipRight => SwimmerState {
                left: self.left,
                right: self.right.toggled(),
            },
        }
    }
}

impl Default for SwimmerState {
    /// Both links extended, matching the conventional initial configuration
    fn default() -> Self {
        SwimmerState::new(LinkPhase::Extended, LinkPhase::Extended)
    }
}

impl fmt::Display for SwimmerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.left.bit(), self.right.bit())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn state_index_is_a_bijection() {
        let indices: HashSet<usize> = SwimmerState::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices.len(), NUM_STATES);
        for state in SwimmerState::ALL {
            assert!((1..=NUM_STATES).contains(&state.index()));
        }
    }

    #[test]
    fn slots_cover_zero_to_seven() {
        let slots: HashSet<usize> = SwimmerState::ALL
            .iter()
            .flat_map(|s| Action::ALL.iter().map(|&a| s.slot(a)))
            .collect();
        assert_eq!(slots, (0..NUM_SLOTS).collect());
    }

    #[test]
    fn apply_toggles_exactly_one_link() {
        for state in SwimmerState::ALL {
            let left_flipped = state.apply(Action::FlipLeft);
            assert_eq!(left_flipped.left, state.left.toggled());
            assert_eq!(left_flipped.right, state.right);

            let right_flipped = state.apply(Action::FlipRight);
            assert_eq!(right_flipped.left, state.left);
            assert_eq!(right_flipped.right, state.right.toggled());
        }
    }

    #[test]
    fn apply_is_an_involution() {
        for state in SwimmerState::ALL {
            for action in Action::ALL {
                assert_eq!(state.apply(action).apply(action), state);
            }
        }
    }

    #[test]
    fn index_matches_table_layout() {
        use LinkPhase::{Contracted, Extended};
        assert_eq!(SwimmerState::new(Extended, Extended).index(), 1);
        assert_eq!(SwimmerState::new(Extended, Contracted).index(), 2);
        assert_eq!(SwimmerState::new(Contracted, Extended).index(), 3);
        assert_eq!(SwimmerState::new(Contracted, Contracted).index(), 4);
    }

    #[test]
    fn display_uses_phase_bits() {
        assert_eq!(SwimmerState::default().to_string(), "(0,0)");
        assert_eq!(
            SwimmerState::new(LinkPhase::Contracted, LinkPhase::Extended).to_string(),
            "(1,0)"
        );
    }
}
