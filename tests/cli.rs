// ABOUTME: Integration tests for the respec CLI commands.
// ABOUTME: Validates --help output and offline convert behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn respec_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("respec"))
}

const FIXTURE: &str = include_str!("fixtures/inspect.json");

#[test]
fn help_shows_commands() {
    respec_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("derive"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn convert_reads_inspect_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report_path = temp_dir.path().join("inspect.json");
    fs::write(&report_path, FIXTURE).unwrap();

    respec_cmd()
        .arg("convert")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: web"))
        .stdout(predicate::str::contains("image: myorg/app:1.2"));
}

#[test]
fn convert_reads_stdin_by_default() {
    respec_cmd()
        .arg("convert")
        .write_stdin(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: web"));
}

#[test]
fn convert_emits_json_when_requested() {
    respec_cmd()
        .arg("--format")
        .arg("json")
        .arg("convert")
        .write_stdin(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"web\""));
}

#[test]
fn convert_rejects_malformed_json() {
    respec_cmd()
        .arg("convert")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn convert_rejects_missing_file() {
    respec_cmd()
        .arg("convert")
        .arg("/nonexistent/inspect.json")
        .assert()
        .failure();
}
