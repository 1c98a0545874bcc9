//! Precomputed transition tables for the three-sphere swimmer
//!
//! At low Reynolds number the displacement produced by a single stroke
//! depends only on the configuration before the stroke and on which link
//! moves, so the whole transition model reduces to two fixed eight-entry
//! lookup tables: one for the center sphere's raw displacement (used for
//! rendering) and one for the net center-of-mass displacement (the reward).

use serde::{Deserialize, Serialize};

use super::state::{Action, NUM_SLOTS, SwimmerState};
use crate::{Error, Result};

/// Rigid-body drift of the three-sphere assembly per stroke; the reward
/// table nets this out of the raw center-sphere displacement.
const CENTER_OF_MASS_CORRECTION: f64 = 4.0 / 3.0;

/// Hydrodynamic stroke amplitudes for the two link lengths
///
/// The defaults reproduce the values tabulated in Najafi and Golestanian
/// (Phys. Rev. E 2004) for the standard geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydroConstants {
    /// Center-sphere displacement magnitude for a stroke of the near arm
    pub r1: f64,
    /// Center-sphere displacement magnitude for a stroke of the far arm
    pub r2: f64,
}

impl Default for HydroConstants {
    fn default() -> Self {
        Self { r1: 1.35, r2: 1.44 }
    }
}

impl HydroConstants {
    /// Validate that both amplitudes are finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrokeAmplitude`] if either value is NaN or
    /// infinite.
    pub fn validate(&self) -> Result<()> {
        if self.r1.is_finite() && self.r2.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidStrokeAmplitude {
                r1: self.r1,
                r2: self.r2,
            })
        }
    }
}

/// Outcome of one stroke: the new configuration, the learning reward, and
/// the raw center-sphere shift used for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next: SwimmerState,
    pub reward: f64,
    pub center_shift: f64,
}

/// Stateless transition model built from the hydrodynamic constants
#[derive(Debug, Clone)]
pub struct SwimmerModel {
    reward: [f64; NUM_SLOTS],
    center_shift: [f64; NUM_SLOTS],
}

/// Per-slot displacement pattern shared by both tables.
///
/// Slot order follows [`SwimmerState::slot`]: state 1 actions L,R, then
/// state 2, and so on.
fn stroke_table(r1: f64, r2: f64) -> [f64; NUM_SLOTS] {
    [-r1, r1, -r2, -r1, r1, r2, r2, -r2]
}

impl SwimmerModel {
    /// Build the reward and center-displacement tables.
    ///
    /// The raw center-sphere table uses the amplitudes as given; the reward
    /// table subtracts the center-of-mass correction from each amplitude
    /// first, so that the reward is the net center-of-mass displacement of
    /// the whole assembly.
    pub fn new(constants: HydroConstants) -> Self {
        let reward = stroke_table(
            constants.r1 - CENTER_OF_MASS_CORRECTION,
            constants.r2 - CENTER_OF_MASS_CORRECTION,
        );
        let center_shift = stroke_table(constants.r1, constants.r2);
        Self {
            reward,
            center_shift,
        }
    }

    /// Perform one stroke from `state`.
    ///
    /// Pure and deterministic: the reward and center shift are looked up by
    /// the slot of the *pre-transition* state.
    pub fn transition(&self, state: SwimmerState, action: Action) -> Transition {
        let slot = state.slot(action);
        Transition {
            next: state.apply(action),
            reward: self.reward[slot],
            center_shift: self.center_shift[slot],
        }
    }

    /// Reward for one stroke without performing it
    pub fn reward(&self, state: SwimmerState, action: Action) -> f64 {
        self.reward[state.slot(action)]
    }

    /// The full reward table in slot order
    pub fn reward_table(&self) -> &[f64; NUM_SLOTS] {
        &self.reward
    }

    /// The full center-displacement table in slot order
    pub fn center_shift_table(&self) -> &[f64; NUM_SLOTS] {
        &self.center_shift
    }
}

impl Default for SwimmerModel {
    fn default() -> Self {
        Self::new(HydroConstants::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swimmer::state::LinkPhase;

    const EPS: f64 = 1e-12;

    #[test]
    fn reward_table_matches_literal_values() {
        let model = SwimmerModel::default();
        let r1 = 1.35 - 4.0 / 3.0;
        let r2 = 1.44 - 4.0 / 3.0;
        let expected = [-r1, r1, -r2, -r1, r1, r2, r2, -r2];
        for (got, want) in model.reward_table().iter().zip(expected) {
            assert!((got - want).abs() < EPS, "got {got}, want {want}");
        }
    }

    #[test]
    fn center_table_uses_uncorrected_amplitudes() {
        let model = SwimmerModel::default();
        let expected = [-1.35, 1.35, -1.44, -1.35, 1.35, 1.44, 1.44, -1.44];
        for (got, want) in model.center_shift_table().iter().zip(expected) {
            assert!((got - want).abs() < EPS, "got {got}, want {want}");
        }
    }

    #[test]
    fn reward_table_is_antisymmetric_under_stroke_reversal() {
        // Flipping a link and flipping it back are the same physical move in
        // opposite phase directions, so their rewards must cancel.
        let model = SwimmerModel::default();
        for state in SwimmerState::ALL {
            for action in Action::ALL {
                let forward = model.transition(state, action);
                let backward = model.transition(forward.next, action);
                assert!(
                    (forward.reward + backward.reward).abs() < EPS,
                    "{state} {action}: {} vs {}",
                    forward.reward,
                    backward.reward
                );
                assert!((forward.center_shift + backward.center_shift).abs() < EPS);
            }
        }
    }

    #[test]
    fn transition_uses_pre_transition_slot() {
        let model = SwimmerModel::default();
        let state = SwimmerState::default(); // (0,0), slots 0 and 1
        let t = model.transition(state, Action::FlipRight);
        assert_eq!(t.next, SwimmerState::new(LinkPhase::Extended, LinkPhase::Contracted));
        assert!((t.reward - (1.35 - 4.0 / 3.0)).abs() < EPS);
        assert!((t.center_shift - 1.35).abs() < EPS);
    }

    #[test]
    fn non_finite_amplitudes_are_rejected() {
        let constants = HydroConstants {
            r1: f64::NAN,
            r2: 1.44,
        };
        assert!(matches!(
            constants.validate(),
            Err(Error::InvalidStrokeAmplitude { .. })
        ));
        assert!(HydroConstants::default().validate().is_ok());
    }
}
