//! Ports - abstractions at the boundary of the training core
//!
//! Ports define interfaces between the training pipeline and external
//! collaborators (progress display, file exports, renderers). Concrete
//! adapters live in [`crate::pipeline::observers`].

pub mod observer;

pub use observer::{Observer, StepEvent};
