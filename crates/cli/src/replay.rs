// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic scenario replay on a fake clock

use crate::scenario::{Operation, Scenario};
use serde::Serialize;
use settle_core::{
    Clock, Coordinator, CoordinatorBuilder, CoordinatorError, CoordinatorStats, FakeClock,
    HandlerTable, ManualTimers, UpdateKind,
};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type ReplayCoordinator = Coordinator<ManualTimers<FakeClock>>;

/// One handler execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub at_ms: u64,
    pub kind: UpdateKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub runs: Vec<Run>,
    pub stats: CoordinatorStats,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.runs.is_empty() {
            return write!(f, "No updates ran");
        }
        let lines: Vec<String> = self
            .runs
            .iter()
            .map(|run| format!("{}ms {}", run.at_ms, run.kind))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Play every step, then let outstanding timers expire
pub fn replay(scenario: &Scenario) -> Result<ReplayReport, CoordinatorError> {
    let clock = FakeClock::new();
    let runs: Arc<Mutex<Vec<Run>>> = Arc::default();

    let mut handlers = HandlerTable::new();
    for kind in UpdateKind::ALL {
        let runs = runs.clone();
        let clock = clock.clone();
        handlers.insert(kind, move || {
            let at_ms = clock.elapsed().as_millis() as u64;
            runs.lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(Run { at_ms, kind });
        });
    }

    let mut coordinator = CoordinatorBuilder::new()
        .config(scenario.config)
        .handlers(handlers)
        .build(ManualTimers::new(clock.clone()))?;

    for step in &scenario.steps {
        advance_to(&clock, &mut coordinator, step.at);
        tracing::debug!(at_ms = step.at.as_millis() as u64, operation = ?step.operation, "step");
        apply(&mut coordinator, step.operation);
    }
    drain(&clock, &mut coordinator);

    let stats = coordinator.stats();
    drop(coordinator);

    let runs = std::mem::take(&mut *runs.lock().unwrap_or_else(|e| e.into_inner()));
    Ok(ReplayReport { runs, stats })
}

fn apply(coordinator: &mut ReplayCoordinator, operation: Operation) {
    match operation {
        Operation::SetRestricted(active) => coordinator.set_restricted_mode(active),
        Operation::Schedule(kind) => coordinator.schedule_update(kind),
        Operation::Flush => {
            coordinator.flush();
        }
        Operation::ClearAll => coordinator.clear_all(),
    }
}

/// Fire timers in deadline order up to `target`, then move the clock there
fn advance_to(clock: &FakeClock, coordinator: &mut ReplayCoordinator, target: Duration) {
    while let Some(next) = coordinator.timers().next_fire_time() {
        let due_in = next.saturating_duration_since(clock.now());
        if clock.elapsed() + due_in > target {
            break;
        }
        clock.advance(due_in);
        coordinator.fire_due();
    }
    clock.advance_to(target);
}

fn drain(clock: &FakeClock, coordinator: &mut ReplayCoordinator) {
    while let Some(next) = coordinator.timers().next_fire_time() {
        clock.advance(next.saturating_duration_since(clock.now()));
        coordinator.fire_due();
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
