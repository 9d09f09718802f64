// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn run(toml: &str) -> ReplayReport {
    replay(&Scenario::from_toml_str(toml).unwrap()).unwrap()
}

fn runs(report: &ReplayReport) -> Vec<(u64, UpdateKind)> {
    report.runs.iter().map(|r| (r.at_ms, r.kind)).collect()
}

#[test]
fn combat_scenario_runs_data_then_rebuild() {
    let report = run(r#"
        [coordinator]
        debounce = "100ms"
        policy = "data-only"

        [[step]]
        at = "0ms"
        action = "restrict"

        [[step]]
        at = "0ms"
        action = "schedule"
        kind = "data-refresh"

        [[step]]
        at = "0ms"
        action = "schedule"
        kind = "full-rebuild"

        [[step]]
        at = "150ms"
        action = "release"
        "#);

    assert_eq!(
        runs(&report),
        vec![(100, UpdateKind::DataRefresh), (250, UpdateKind::FullRebuild)]
    );
    assert_eq!(report.stats.deferred, 1);
    assert_eq!(report.stats.resumed, 1);
}

#[test]
fn burst_is_coalesced_and_postponed() {
    let report = run(r#"
        [[step]]
        at = "0ms"
        action = "schedule"
        kind = "data-refresh"

        [[step]]
        at = "80ms"
        action = "schedule"
        kind = "sort-required"

        [[step]]
        at = "160ms"
        action = "schedule"
        kind = "data-refresh"
        "#);

    assert_eq!(runs(&report), vec![(260, UpdateKind::SortRequired)]);
    assert_eq!(report.stats.coalesced, 1);
}

#[test]
fn timers_fire_between_steps() {
    let report = run(r#"
        [[step]]
        at = "0ms"
        action = "schedule"
        kind = "data-refresh"

        [[step]]
        at = "500ms"
        action = "schedule"
        kind = "full-rebuild"
        "#);

    assert_eq!(
        runs(&report),
        vec![(100, UpdateKind::DataRefresh), (600, UpdateKind::FullRebuild)]
    );
}

#[test]
fn flush_runs_at_step_time() {
    let report = run(r#"
        [[step]]
        at = "10ms"
        action = "schedule"
        kind = "sort-required"

        [[step]]
        at = "20ms"
        action = "flush"
        "#);

    assert_eq!(runs(&report), vec![(20, UpdateKind::SortRequired)]);
}

#[test]
fn clear_discards_work() {
    let report = run(r#"
        [[step]]
        at = "0ms"
        action = "schedule"
        kind = "full-rebuild"

        [[step]]
        at = "50ms"
        action = "clear"
        "#);

    assert!(report.runs.is_empty());
    assert_eq!(report.to_string(), "No updates ran");
}

#[test]
fn report_displays_one_line_per_run() {
    let report = ReplayReport {
        runs: vec![
            Run {
                at_ms: 100,
                kind: UpdateKind::DataRefresh,
            },
            Run {
                at_ms: 250,
                kind: UpdateKind::FullRebuild,
            },
        ],
        stats: CoordinatorStats::default(),
    };
    assert_eq!(report.to_string(), "100ms data-refresh\n250ms full-rebuild");
}

#[test]
fn longest_debounce_and_latest_step_replay_cleanly() {
    let report = run(r#"
        [coordinator]
        debounce = "1h"

        [[step]]
        at = "24h"
        action = "schedule"
        kind = "full-rebuild"
        "#);

    assert_eq!(
        runs(&report),
        vec![(25 * 60 * 60 * 1000, UpdateKind::FullRebuild)]
    );
}
