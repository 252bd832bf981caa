use ctime::exec::ChildOutcome;
use ctime::report::{elapsed_line, outcome_line};

#[test]
fn outcome_lines_use_the_fixed_phrases() {
    assert_eq!(
        outcome_line(ChildOutcome::Exited(0)),
        "Process reported success"
    );
    assert_eq!(
        outcome_line(ChildOutcome::Exited(1)),
        "Process reported failure"
    );
    assert_eq!(
        outcome_line(ChildOutcome::Exited(3)),
        "Process reported failure"
    );
    assert_eq!(
        outcome_line(ChildOutcome::Signaled),
        "Process reported failure"
    );
    assert_eq!(
        outcome_line(ChildOutcome::TimedOut),
        "Process reported failure"
    );
}

#[test]
fn elapsed_line_renders_six_decimal_seconds() {
    assert_eq!(elapsed_line(0.5), "Execution time: 0.500000 seconds");
    assert_eq!(elapsed_line(12.0), "Execution time: 12.000000 seconds");
    assert_eq!(elapsed_line(0.0), "Execution time: 0.000000 seconds");
}
