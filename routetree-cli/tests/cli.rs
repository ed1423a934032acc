//! Integration tests for the routetree CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary without arguments fails and shows usage.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("routetree").expect("Failed to find routetree binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("routetree").expect("Failed to find routetree binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("routetree"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("routetree").expect("Failed to find routetree binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Resolve nested route declarations into URL paths",
        ))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("kebab"));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("routetree").expect("Failed to find routetree binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that completions are generated for bash.
#[test]
fn test_cli_completions_bash() {
    let mut cmd = Command::cargo_bin("routetree").expect("Failed to find routetree binary");

    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("routetree"))
        .stderr(predicate::str::contains("# Generating bash completion script"));
}
