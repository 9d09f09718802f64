// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer facility backed by `tokio::time`
//!
//! Each timer is a spawned sleep task. Expiry is reported as a [`TimerId`]
//! on [`TimerExpiries`]; cancelling aborts the task. An id may still be
//! delivered if the task finished just before the cancel, so consumers
//! must treat ids they no longer expect as stale.

use settle_core::{TimerFacility, TimerId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct TokioTimers {
    expired: mpsc::UnboundedSender<TimerId>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    next_id: u64,
}

/// Receiving side of [`TokioTimers`]
pub struct TimerExpiries {
    rx: mpsc::UnboundedReceiver<TimerId>,
}

impl TimerExpiries {
    /// Next expired timer. `None` once the facility is dropped.
    pub async fn recv(&mut self) -> Option<TimerId> {
        self.rx.recv().await
    }
}

impl TokioTimers {
    pub fn new() -> (Self, TimerExpiries) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timers = Self {
            expired: tx,
            tasks: HashMap::new(),
            next_id: 1,
        };
        (timers, TimerExpiries { rx })
    }

    /// Timers whose sleep has not finished yet
    pub fn active(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl TimerFacility for TokioTimers {
    /// Must be called from within a tokio runtime
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let expired = self.expired.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owner is shutting down
            let _ = expired.send(id);
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod tests;
