//! Scenario replay specs

use crate::prelude::*;

#[test]
fn replay_combat_scenario() {
    let project = Project::empty();
    project.file("combat.toml", COMBAT_SCENARIO);

    project
        .settle()
        .args(&["replay", "combat.toml"])
        .passes()
        .stdout_eq("100ms data-refresh\n250ms full-rebuild\n");
}

#[test]
fn replay_json_includes_stats() {
    let project = Project::empty();
    project.file("combat.toml", COMBAT_SCENARIO);

    let output = project
        .settle()
        .args(&["replay", "combat.toml", "--format", "json"])
        .passes()
        .stdout();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["runs"][0]["at_ms"], 100);
    assert_eq!(value["runs"][0]["kind"], "data-refresh");
    assert_eq!(value["runs"][1]["kind"], "full-rebuild");
    assert_eq!(value["stats"]["deferred"], 1);
    assert_eq!(value["stats"]["resumed"], 1);
    assert_eq!(value["stats"]["executed"], 2);
}

#[test]
fn replay_defer_policy_holds_everything() {
    let project = Project::empty();
    project.file(
        "defer.toml",
        r#"
[coordinator]
policy = "defer"

[[step]]
at = "0ms"
action = "restrict"

[[step]]
at = "10ms"
action = "schedule"
kind = "data-refresh"

[[step]]
at = "1s"
action = "release"
"#,
    );

    project
        .settle()
        .args(&["replay", "defer.toml"])
        .passes()
        .stdout_eq("1100ms data-refresh\n");
}

#[test]
fn replay_policy_flag_overrides_scenario() {
    let project = Project::empty();
    project.file("combat.toml", COMBAT_SCENARIO);

    project
        .settle()
        .args(&["replay", "combat.toml", "--policy", "defer"])
        .passes()
        .stdout_eq("250ms full-rebuild\n");
}

#[test]
fn replay_rejects_unknown_policy_flag() {
    let project = Project::empty();
    project.file("combat.toml", COMBAT_SCENARIO);

    project
        .settle()
        .args(&["replay", "combat.toml", "--policy", "allow-sort"])
        .fails()
        .stderr_has("unknown restricted policy: allow-sort");
}

#[test]
fn replay_clear_prints_nothing_ran() {
    let project = Project::empty();
    project.file(
        "clear.toml",
        r#"
[[step]]
at = "0ms"
action = "schedule"
kind = "sort-required"

[[step]]
at = "10ms"
action = "clear"
"#,
    );

    project
        .settle()
        .args(&["replay", "clear.toml"])
        .passes()
        .stdout_eq("No updates ran\n");
}

#[test]
fn replay_unknown_kind_fails_loudly() {
    let project = Project::empty();
    project.file(
        "bad.toml",
        r#"
[[step]]
at = "0ms"
action = "schedule"
kind = "redraw"
"#,
    );

    project
        .settle()
        .args(&["replay", "bad.toml"])
        .fails()
        .stderr_has("unknown update kind: redraw");
}

#[test]
fn replay_verbose_logs_to_stderr() {
    let project = Project::empty();
    project.file("combat.toml", COMBAT_SCENARIO);

    project
        .settle()
        .args(&["-v", "replay", "combat.toml"])
        .passes()
        .stdout_eq("100ms data-refresh\n250ms full-rebuild\n")
        .stderr_has("update executed");
}
