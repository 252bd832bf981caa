// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the target program, using
//! `tokio::process::Command`, and handing the timed result back to `run`.
//!
//! - [`launcher`] owns the spawn-wait-measure sequence and the outcome
//!   classification.

pub mod launcher;

pub use launcher::{launch_and_measure, ChildOutcome, Measurement};
