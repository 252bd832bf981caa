// src/errors.rs

//! Crate-wide error aliases and the fixed diagnostic lines.
//!
//! Mostly a thin wrapper around `anyhow`, plus the one-line diagnostics that
//! the three hard-failure paths print to stdout before exiting with status 1.

pub use anyhow::{Error, Result};

/// Printed when no target program is supplied.
pub const USAGE: &str = "Usage: ctime <target-path> [args...]";

/// Printed when the composed command line exceeds the length cap.
pub const SIZE_EXCEEDED: &str = "Exceeded max input size";

/// Printed when the target process cannot be created.
pub const CREATION_FAILURE: &str = "Process creation failure";
