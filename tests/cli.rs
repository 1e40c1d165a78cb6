use assert_cmd::Command;
use predicates::prelude::*;

fn forecaster() -> Command {
    Command::cargo_bin("quantumforecaster").unwrap()
}

#[test]
fn test_no_arguments_succeeds_quietly() {
    forecaster()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_succeeds() {
    forecaster().arg("--verbose").assert().success();
    forecaster().arg("-v").assert().success();
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    forecaster()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("forecast run started"));
}

#[test]
fn test_unknown_flag_prints_usage() {
    forecaster()
        .arg("--bogus")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--bogus"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_positional_argument_rejected() {
    forecaster().arg("tomorrow").assert().failure().code(2);
}

#[test]
fn test_help_lists_verbose() {
    forecaster()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("Enable verbose logging"));
}

#[test]
fn test_version_is_rejected() {
    forecaster()
        .arg("--version")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--version"));
    forecaster().arg("-V").assert().failure().code(2);
}

#[test]
fn test_single_dash_verbose() {
    forecaster()
        .arg("-verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("forecast run started"));
}

#[test]
fn test_verbose_with_boolean_value() {
    forecaster()
        .arg("-verbose=true")
        .assert()
        .success()
        .stderr(predicate::str::contains("forecast run started"));
    forecaster()
        .arg("--verbose=false")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    forecaster().arg("-verbose=false").assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_with_bad_value() {
    forecaster()
        .arg("--verbose=maybe")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("maybe"));
}

#[test]
fn test_every_transition_is_logged() {
    let output = forecaster().arg("--verbose").output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("lifecycle transition").count(), 3);
    assert!(stderr.contains("from=Idle to=Configured"));
    assert!(stderr.contains("from=Configured to=Running"));
    assert!(stderr.contains("from=Running to=Succeeded"));
}

#[test]
fn test_piped_logs_have_no_color() {
    let output = forecaster().arg("--verbose").output().unwrap();
    assert!(!output.stderr.contains(&0x1b));
}
