// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `ctime`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ctime",
    version,
    about = "Run a program and report its exit status and wall-clock time.",
    long_about = None
)]
pub struct CliArgs {
    /// Kill the target and report a timeout after this many seconds.
    ///
    /// If omitted, the wait is unbounded.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CTIME_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Target executable followed by its arguments.
    ///
    /// Everything from the first positional onwards belongs to the target,
    /// including values starting with `-`.
    #[arg(
        value_name = "TARGET",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
