//! Sphere positions for rendering
//!
//! Purely a presentation concern: given the accumulated center-sphere
//! position and the current configuration, reconstruct where the three
//! spheres sit on the swimming axis. An extended arm holds its outer
//! sphere 10 radii from the center, a contracted arm 6.

use serde::{Deserialize, Serialize};

use super::state::{LinkPhase, SwimmerState};

const ARM_EXTENDED: f64 = 10.0;
const ARM_CONTRACTED: f64 = 6.0;

fn arm_length(phase: LinkPhase) -> f64 {
    match phase {
        LinkPhase::Extended => ARM_EXTENDED,
        LinkPhase::Contracted => ARM_CONTRACTED,
    }
}

/// Positions of the three spheres along the swimming axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpherePositions {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl SpherePositions {
    /// Reconstruct the sphere layout from the center position and state
    pub fn from_center(center: f64, state: SwimmerState) -> Self {
        Self {
            left: center - arm_length(state.left),
            center,
            right: center + arm_length(state.right),
        }
    }

    /// Center of mass of the three spheres
    pub fn center_of_mass(&self) -> f64 {
        (self.left + self.center + self.right) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swimmer::state::LinkPhase::{Contracted, Extended};

    #[test]
    fn arm_offsets_follow_link_phases() {
        let p = SpherePositions::from_center(0.0, SwimmerState::new(Extended, Extended));
        assert_eq!((p.left, p.right), (-10.0, 10.0));

        let p = SpherePositions::from_center(0.0, SwimmerState::new(Contracted, Extended));
        assert_eq!((p.left, p.right), (-6.0, 10.0));

        let p = SpherePositions::from_center(2.5, SwimmerState::new(Extended, Contracted));
        assert_eq!((p.left, p.right), (-7.5, 8.5));
    }

    #[test]
    fn center_of_mass_is_sphere_average() {
        let p = SpherePositions::from_center(3.0, SwimmerState::new(Extended, Extended));
        assert!((p.center_of_mass() - 3.0).abs() < 1e-12);
    }
}
