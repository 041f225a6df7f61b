//! End-to-end CLI tests for the harvester binary.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("harvester").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("harvest matching links"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("harvester").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("harvester"));
}

/// Test that a missing URL argument causes non-zero exit.
#[test]
fn test_binary_missing_url_returns_error() {
    let mut cmd = Command::cargo_bin("harvester").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that an unparsable URL causes non-zero exit.
#[test]
fn test_binary_invalid_url_returns_error() {
    let mut cmd = Command::cargo_bin("harvester").unwrap();
    cmd.arg("not a url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid page URL"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("harvester").unwrap();
    cmd.arg("https://example.com")
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
