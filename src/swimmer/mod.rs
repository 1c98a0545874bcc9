//! Two-link swimmer model (Najafi-Golestanian three-sphere swimmer)
//!
//! This module provides the physical side of the simulation:
//!
//! - **State space**: each of the two links is either extended or
//!   contracted, giving four configurations indexed 1-4.
//! - **Action space**: flip the left link or flip the right link.
//! - **Transition model**: precomputed displacement and reward tables for
//!   all eight (state, action) combinations, derived from the hydrodynamic
//!   coupling between the three spheres (Najafi and Golestanian,
//!   Phys. Rev. E 2004; Tsang et al., Phys. Rev. Fluids 2020).
//!
//! The transition model is pure and stateless; the learning side lives in
//! [`crate::q_learning`].

pub mod geometry;
pub mod model;
pub mod state;

pub use geometry::SpherePositions;
pub use model::{HydroConstants, SwimmerModel, Transition};
pub use state::{Action, LinkPhase, SwimmerState};
