use std::error::Error;

use ctime::cli::CliArgs;

type TestResult = Result<(), Box<dyn Error>>;

fn args_for(command: Vec<String>) -> CliArgs {
    CliArgs {
        timeout: None,
        log_level: None,
        command,
    }
}

#[tokio::test]
async fn run_with_no_target_fails_with_usage() {
    let err = ctime::run(args_for(vec![])).await.unwrap_err();
    assert!(err.to_string().starts_with("Usage: ctime"));
}

#[tokio::test]
async fn run_with_oversized_command_line_fails_before_spawning() {
    // Well over the 1000-character cap; the target path does not even need
    // to exist because composition rejects the line first.
    let err = ctime::run(args_for(vec!["x".repeat(1200)]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Exceeded max input size");
}

#[tokio::test]
async fn run_with_a_clean_child_succeeds() -> TestResult {
    let command: Vec<String> = if cfg!(windows) {
        vec!["cmd".into(), "/C".into(), "exit 0".into()]
    } else {
        vec!["sh".into(), "-c".into(), "exit 0".into()]
    };

    ctime::run(args_for(command)).await?;
    Ok(())
}

#[tokio::test]
async fn run_exits_cleanly_even_when_the_child_fails() -> TestResult {
    // A failing child is reported textually; it is not a launcher error.
    let command: Vec<String> = if cfg!(windows) {
        vec!["cmd".into(), "/C".into(), "exit 7".into()]
    } else {
        vec!["sh".into(), "-c".into(), "exit 7".into()]
    };

    ctime::run(args_for(command)).await?;
    Ok(())
}
