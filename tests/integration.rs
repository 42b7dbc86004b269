// Integration tests for the repoaudit CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the repoaudit binary.
fn repoaudit() -> Command {
    Command::cargo_bin("repoaudit").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    repoaudit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repoaudit"));
}

#[test]
fn cli_help_flag() {
    repoaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("community standards"));
}

#[test]
fn audit_requires_path() {
    repoaudit()
        .arg("audit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn structure_requires_path() {
    repoaudit()
        .arg("structure")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn audit_missing_path_exits_with_runtime_failure() {
    repoaudit()
        .args(["audit", "/nonexistent/repoaudit-target"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn audit_rejects_unknown_format() {
    repoaudit()
        .args(["audit", ".", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn audit_rejects_verbose_with_quiet() {
    repoaudit()
        .args(["audit", ".", "-v", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
