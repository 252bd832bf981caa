// src/report.rs

//! Human-readable execution report printed to stdout.

use crate::exec::{ChildOutcome, Measurement};

/// Fixed phrase for the child's outcome line.
pub fn outcome_line(outcome: ChildOutcome) -> &'static str {
    if outcome.is_success() {
        "Process reported success"
    } else {
        "Process reported failure"
    }
}

/// Elapsed-time line, seconds with six decimals.
pub fn elapsed_line(elapsed_secs: f64) -> String {
    format!("Execution time: {elapsed_secs:.6} seconds")
}

/// Print the post-execution report: a blank line, the outcome line, then the
/// elapsed time (always, regardless of the child's outcome).
pub fn print_report(measurement: &Measurement) {
    println!();
    println!("{}", outcome_line(measurement.outcome));
    println!("{}", elapsed_line(measurement.elapsed.as_secs_f64()));
}
