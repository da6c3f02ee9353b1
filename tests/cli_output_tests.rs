//! CLI output integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fraudlens() -> Command {
    Command::cargo_bin("fraudlens").expect("binary built")
}

#[test]
fn test_help() {
    fraudlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fraudlens"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version() {
    fraudlens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fraudlens"));
}

#[test]
fn test_run_help_lists_overrides() {
    fraudlens()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--records"))
        .stdout(predicate::str::contains("--no-chart"))
        .stdout(predicate::str::contains("--csv-out"));
}

#[test]
fn test_unknown_subcommand_fails() {
    fraudlens().arg("frobnicate").assert().failure();
}
