//! CLI infrastructure for the microswim toolkit
//!
//! This module provides the command-line interface for training the
//! swimmer and re-rendering saved training summaries.

pub mod commands;
pub mod output;
