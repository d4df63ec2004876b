use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

type TestResult = Result<(), Box<dyn Error>>;

/// Run the built `waitmark` binary against a marker/log pair in `dir`.
fn run_gate(dir: &Path, ticks: &str) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_waitmark"))
        .arg("--marker")
        .arg(dir.join("done.marker"))
        .arg("--log-file")
        .arg(dir.join("task.log"))
        .args(["--ticks", ticks, "--tick-interval", "10ms"])
        .output()
}

#[test]
fn marker_found_exits_zero_with_the_log_on_stdout() -> TestResult {
    let dir = tempfile::tempdir()?;
    let log_text = "collected 42 items\nall tests passed\n";
    fs::write(dir.path().join("task.log"), log_text)?;
    fs::write(dir.path().join("done.marker"), "")?;

    let output = run_gate(dir.path(), "3")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, log_text);
    Ok(())
}

#[test]
fn timeout_exits_one_and_still_emits_the_log() -> TestResult {
    let dir = tempfile::tempdir()?;
    let log_text = "started run\nthen nothing\n";
    fs::write(dir.path().join("task.log"), log_text)?;

    let output = run_gate(dir.path(), "2")?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout)?, log_text);
    Ok(())
}

#[test]
fn launched_command_drives_the_exit_code() -> TestResult {
    let dir = tempfile::tempdir()?;
    let cmd = format!(
        "echo finished > {log} && touch {marker}",
        log = dir.path().join("task.log").display(),
        marker = dir.path().join("done.marker").display(),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_waitmark"))
        .arg("--marker")
        .arg(dir.path().join("done.marker"))
        .arg("--log-file")
        .arg(dir.path().join("task.log"))
        .args(["--ticks", "100", "--tick-interval", "10ms", "--cmd", &cmd])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "finished\n");
    Ok(())
}

#[test]
fn missing_log_does_not_change_the_verdict() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("done.marker"), "")?;

    let output = run_gate(dir.path(), "2")?;

    // Marker wins; the unavailable log only softens the stdout contract.
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("unavailable"), "stdout was: {stdout}");
    Ok(())
}

#[test]
fn bad_arguments_exit_nonzero() -> TestResult {
    // No marker from either source is an operational error, not a timeout.
    let output = Command::new(env!("CARGO_BIN_EXE_waitmark"))
        .args(["--log-file", "whatever.log"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
