// src/exec/launcher.rs

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{error, info, warn};

use crate::errors::CREATION_FAILURE;

/// How the child process ended, as far as the launcher is concerned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Normal termination with the given exit code.
    Exited(i32),
    /// Terminated without an exit code (killed by a signal).
    Signaled,
    /// Still running when the bounded wait expired; the child was killed.
    TimedOut,
}

impl ChildOutcome {
    /// Success means a clean exit with code zero; everything else is
    /// reported as failure.
    pub fn is_success(&self) -> bool {
        matches!(self, ChildOutcome::Exited(0))
    }
}

/// Outcome of one launch, plus the wall-clock interval around it.
#[derive(Debug, Copy, Clone)]
pub struct Measurement {
    pub outcome: ChildOutcome,
    pub elapsed: Duration,
}

/// Spawn `target` directly (no shell) with `args`, wait for it to exit and
/// measure the wall-clock time from just before the spawn until the wait
/// returns.
///
/// With `limit = None` the wait is unbounded. With a limit, a child that is
/// still running when the limit expires is killed and reported as
/// [`ChildOutcome::TimedOut`].
///
/// A spawn failure is the only error path; its top-level message is the
/// diagnostic line `main` prints to stdout.
pub async fn launch_and_measure(
    target: &str,
    args: &[String],
    limit: Option<Duration>,
) -> Result<Measurement> {
    info!(program = %target, args = ?args, "starting target process");

    let mut cmd = Command::new(target);
    cmd.args(args).kill_on_drop(true);

    let start = Instant::now();
    let mut child = cmd
        .spawn()
        .inspect_err(|err| error!(program = %target, error = %err, "failed to spawn target"))
        .context(CREATION_FAILURE)?;

    let status = match limit {
        None => child
            .wait()
            .await
            .with_context(|| format!("waiting for '{target}'"))?,
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(waited) => waited.with_context(|| format!("waiting for '{target}'"))?,
            Err(_) => {
                warn!(program = %target, limit = ?limit, "target exceeded timeout, killing it");
                child
                    .kill()
                    .await
                    .with_context(|| format!("killing timed-out '{target}'"))?;
                return Ok(Measurement {
                    outcome: ChildOutcome::TimedOut,
                    elapsed: start.elapsed(),
                });
            }
        },
    };
    let elapsed = start.elapsed();

    let outcome = match status.code() {
        Some(code) => ChildOutcome::Exited(code),
        None => ChildOutcome::Signaled,
    };

    info!(
        program = %target,
        exit_code = ?status.code(),
        success = status.success(),
        "target process exited"
    );

    Ok(Measurement { outcome, elapsed })
}
