// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delayed-callback facilities
//!
//! A facility hands out a [`TimerId`] per one-shot timer. Expiry is
//! delivered by whoever drives the facility, by passing the id back to
//! [`Coordinator::on_timer`](crate::Coordinator::on_timer).

use crate::clock::Clock;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::time::{Duration, Instant};

/// Handle to one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Host timer primitive: one-shot timers with cancellation
pub trait TimerFacility {
    /// Start a timer that expires after `delay`
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    /// Cancel a timer. Unknown or already expired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct PendingTimer {
    id: TimerId,
    fire_at: Instant,
}

impl PartialEq for PendingTimer {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.id == other.id
    }
}

impl Eq for PendingTimer {}

impl PartialOrd for PendingTimer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingTimer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Min-heap: earliest first, then oldest id
        (Reverse(self.fire_at), Reverse(self.id)).cmp(&(Reverse(other.fire_at), Reverse(other.id)))
    }
}

/// Deterministic timers driven by a [`Clock`]
///
/// Nothing fires on its own: call [`poll`](Self::poll) with the current
/// time to collect expired ids.
pub struct ManualTimers<C: Clock> {
    clock: C,
    items: BinaryHeap<PendingTimer>,
    live: HashSet<TimerId>,
    next_id: u64,
}

impl<C: Clock> ManualTimers<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            items: BinaryHeap::new(),
            live: HashSet::new(),
            next_id: 1,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Remove and return every live timer due at or before `now`, in fire order
    pub fn poll(&mut self, now: Instant) -> Vec<TimerId> {
        let mut ready = Vec::new();

        while let Some(item) = self.items.peek() {
            if item.fire_at > now {
                break;
            }

            let Some(item) = self.items.pop() else {
                break;
            };

            // Cancelled timers stay in the heap until their time passes
            if self.live.remove(&item.id) {
                ready.push(item.id);
            }
        }

        ready
    }

    /// Number of timers that are scheduled and not cancelled
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_idle(&self) -> bool {
        self.live.is_empty()
    }

    /// Fire time of the earliest live timer
    pub fn next_fire_time(&self) -> Option<Instant> {
        self.items
            .iter()
            .filter(|item| self.live.contains(&item.id))
            .map(|item| item.fire_at)
            .min()
    }
}

impl<C: Clock> TimerFacility for ManualTimers<C> {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // A deadline past the end of `Instant` never comes due
        if let Some(fire_at) = self.clock.now().checked_add(delay) {
            self.items.push(PendingTimer { id, fire_at });
        }
        self.live.insert(id);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.live.remove(&id);
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
