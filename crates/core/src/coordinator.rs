// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debounced, priority-coalescing update coordinator
//!
//! Requests accumulate in a pending set while a single debounce timer is
//! restarted on every accepted request. When the timer expires (or on an
//! explicit flush) only the highest-priority pending kind runs; the rest
//! are dropped. While restricted mode is active, kinds the policy does not
//! admit collapse into one deferred slot that is rescheduled on exit.

use crate::clock::Clock;
use crate::config::CoordinatorConfig;
use crate::error::CoordinatorError;
use crate::handlers::HandlerTable;
use crate::kind::{RestrictedPolicy, UpdateKind};
use crate::timer::{ManualTimers, TimerFacility, TimerId};
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;

/// Monotonic counters describing what the coordinator has done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoordinatorStats {
    /// Requests added to the pending set
    pub accepted: u64,
    /// Requests held back while restricted
    pub deferred: u64,
    /// Times an outstanding timer was replaced by a newer request
    pub restarts: u64,
    /// Handlers invoked
    pub executed: u64,
    /// Pending kinds dropped because a higher one won the flush
    pub coalesced: u64,
    /// Deferred kinds rescheduled on leaving restricted mode
    pub resumed: u64,
}

/// Assembles a [`Coordinator`] from config, handlers and a timer facility
#[derive(Debug, Default)]
pub struct CoordinatorBuilder {
    config: CoordinatorConfig,
    handlers: HandlerTable,
}

impl CoordinatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: CoordinatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.config.debounce = debounce;
        self
    }

    pub fn policy(mut self, policy: RestrictedPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn handler(mut self, kind: UpdateKind, handler: impl FnMut() + Send + 'static) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn handlers(mut self, handlers: HandlerTable) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn build<T: TimerFacility>(self, timers: T) -> Result<Coordinator<T>, CoordinatorError> {
        Coordinator::new(self.handlers, timers, self.config)
    }
}

pub struct Coordinator<T: TimerFacility> {
    handlers: HandlerTable,
    timers: T,
    debounce: Duration,
    policy: RestrictedPolicy,
    pending: BTreeSet<UpdateKind>,
    /// The only live debounce timer
    timer: Option<TimerId>,
    restricted: bool,
    deferred: Option<UpdateKind>,
    stats: CoordinatorStats,
}

impl<T: TimerFacility> Coordinator<T> {
    pub fn new(
        handlers: HandlerTable,
        timers: T,
        config: CoordinatorConfig,
    ) -> Result<Self, CoordinatorError> {
        if handlers.is_empty() {
            return Err(CoordinatorError::NoHandlers);
        }
        config.validate()?;

        tracing::debug!(
            handlers = ?handlers.kinds(),
            debounce_ms = config.debounce.as_millis() as u64,
            policy = %config.policy,
            "coordinator created"
        );

        Ok(Self {
            handlers,
            timers,
            debounce: config.debounce,
            policy: config.policy,
            pending: BTreeSet::new(),
            timer: None,
            restricted: false,
            deferred: None,
            stats: CoordinatorStats::default(),
        })
    }

    pub fn builder() -> CoordinatorBuilder {
        CoordinatorBuilder::new()
    }

    /// Request that `kind`'s handler eventually runs
    pub fn schedule_update(&mut self, kind: UpdateKind) {
        if self.restricted && !self.policy.admits(kind) {
            let merged = self.deferred.map_or(kind, |held| held.max(kind));
            self.deferred = Some(merged);
            self.stats.deferred += 1;
            tracing::debug!(kind = %kind, deferred = %merged, "deferred while restricted");
            return;
        }

        self.pending.insert(kind);
        self.stats.accepted += 1;

        if let Some(previous) = self.timer.take() {
            self.timers.cancel(previous);
            self.stats.restarts += 1;
        }
        let id = self.timers.schedule_once(self.debounce);
        self.timer = Some(id);

        tracing::debug!(kind = %kind, timer = %id, pending = self.pending.len(), "scheduled");
    }

    /// Deliver expiry of `id`. Stale ids (cancelled or replaced) are ignored.
    ///
    /// Returns the kind that won the flush, if any.
    pub fn on_timer(&mut self, id: TimerId) -> Option<UpdateKind> {
        if self.timer != Some(id) {
            tracing::debug!(timer = %id, "ignoring stale timer");
            return None;
        }
        self.timer = None;
        self.run_pending()
    }

    /// Run the pending update now, synchronously
    pub fn flush(&mut self) -> Option<UpdateKind> {
        if let Some(id) = self.timer.take() {
            self.timers.cancel(id);
        }
        self.run_pending()
    }

    /// Discard pending and deferred work without running anything
    pub fn clear_all(&mut self) {
        if let Some(id) = self.timer.take() {
            self.timers.cancel(id);
        }
        self.pending.clear();
        self.deferred = None;
        tracing::debug!("cleared");
    }

    pub fn set_restricted_mode(&mut self, active: bool) {
        if self.restricted == active {
            return;
        }
        self.restricted = active;
        tracing::info!(restricted = active, "restricted mode changed");

        if !active {
            if let Some(kind) = self.deferred.take() {
                self.stats.resumed += 1;
                tracing::debug!(kind = %kind, "resuming deferred update");
                self.schedule_update(kind);
            }
        }
    }

    pub fn has_pending_updates(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Highest kind held back while restricted
    pub fn deferred(&self) -> Option<UpdateKind> {
        self.deferred
    }

    /// Id of the outstanding debounce timer
    pub fn live_timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn policy(&self) -> RestrictedPolicy {
        self.policy
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn stats(&self) -> CoordinatorStats {
        self.stats
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    fn run_pending(&mut self) -> Option<UpdateKind> {
        let winner = self.pending.last().copied()?;
        let dropped = self.pending.len() as u64 - 1;
        self.pending.clear();
        self.stats.coalesced += dropped;

        if self.handlers.invoke(winner) {
            self.stats.executed += 1;
            tracing::info!(kind = %winner, coalesced = dropped, "update executed");
        } else {
            tracing::warn!(kind = %winner, "no handler registered");
        }
        Some(winner)
    }
}

impl<C: Clock> Coordinator<ManualTimers<C>> {
    /// Deliver every timer due at the facility clock's current time
    pub fn fire_due(&mut self) -> Vec<UpdateKind> {
        let now = self.timers.clock().now();
        let due = self.timers.poll(now);
        due.into_iter().filter_map(|id| self.on_timer(id)).collect()
    }
}

impl<T: TimerFacility> Drop for Coordinator<T> {
    fn drop(&mut self) {
        if let Some(id) = self.timer.take() {
            self.timers.cancel(id);
        }
    }
}

impl<T: TimerFacility> std::fmt::Debug for Coordinator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("handlers", &self.handlers)
            .field("debounce", &self.debounce)
            .field("policy", &self.policy)
            .field("pending", &self.pending)
            .field("timer", &self.timer)
            .field("restricted", &self.restricted)
            .field("deferred", &self.deferred)
            .finish()
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
