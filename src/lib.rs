// src/lib.rs

pub mod cli;
pub mod cmdline;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - command-line composition (with the length cap)
/// - echoing the composed line
/// - spawning the target and waiting for it, timed
/// - the stdout report
///
/// The returned error's top-level message is the one-line diagnostic for the
/// hard-failure paths (missing target, oversized command line, spawn
/// failure); `main` prints it to stdout and exits 1.
pub async fn run(args: CliArgs) -> Result<()> {
    let line = cmdline::compose(&args.command)?;
    println!("{line}");

    let limit = parse_timeout(&args)?;

    let target = &args.command[0];
    let measurement = exec::launch_and_measure(target, &args.command[1..], limit).await?;

    debug!(
        outcome = ?measurement.outcome,
        elapsed = ?measurement.elapsed,
        "reporting result"
    );
    report::print_report(&measurement);

    Ok(())
}

/// Convert the optional `--timeout` seconds into a `Duration`.
fn parse_timeout(args: &CliArgs) -> Result<Option<Duration>> {
    args.timeout
        .map(Duration::try_from_secs_f64)
        .transpose()
        .context("invalid --timeout value (must be a non-negative number of seconds)")
}
