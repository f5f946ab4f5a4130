// Integration tests for the fitcheck CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fitcheck() -> Command {
    Command::cargo_bin("fitcheck").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    fitcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fitcheck"));
}

#[test]
fn cli_help_flag() {
    fitcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Design Systems Specialist"));
}

#[test]
fn score_requires_sheet() {
    fitcheck()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn verbose_and_quiet_conflict() {
    fitcheck()
        .args(["-v", "-q", "questions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_instrument_is_rejected() {
    fitcheck()
        .args(["questions", "--instrument", "personality"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
