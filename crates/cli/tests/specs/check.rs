//! Config check specs

use crate::prelude::*;

#[test]
fn check_prints_resolved_config() {
    let project = Project::empty();
    project.file("settle.toml", "debounce = \"250ms\"\npolicy = \"defer\"\n");

    project
        .settle()
        .args(&["check", "settle.toml"])
        .passes()
        .stdout_eq("debounce: 250ms\npolicy: defer\n");
}

#[test]
fn check_fills_defaults() {
    let project = Project::empty();
    project.file("settle.toml", "");

    project
        .settle()
        .args(&["check", "settle.toml"])
        .passes()
        .stdout_eq("debounce: 100ms\npolicy: data-only\n");
}

#[test]
fn check_json_output() {
    let project = Project::empty();
    project.file("settle.toml", "policy = \"normal\"\n");

    let output = project
        .settle()
        .args(&["check", "settle.toml", "--format", "json"])
        .passes()
        .stdout();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["debounce"], "100ms");
    assert_eq!(value["policy"], "normal");
}

#[test]
fn check_rejects_zero_debounce() {
    let project = Project::empty();
    project.file("settle.toml", "debounce = \"0ms\"\n");

    project
        .settle()
        .args(&["check", "settle.toml"])
        .fails()
        .stderr_has("debounce interval must be greater than zero");
}

#[test]
fn check_rejects_oversized_debounce() {
    let project = Project::empty();
    project.file("settle.toml", "debounce = \"500000000000years\"\n");

    project
        .settle()
        .args(&["check", "settle.toml"])
        .fails()
        .stderr_has("exceeds the maximum of 3600s");
}

#[test]
fn check_reports_missing_file() {
    Project::empty()
        .settle()
        .args(&["check", "nope.toml"])
        .fails()
        .stderr_has("nope.toml");
}
