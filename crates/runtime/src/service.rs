// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordinator service: one task owns the coordinator
//!
//! Every public operation becomes a [`Command`] on a single channel, so
//! callers on any thread are serialized without locking the coordinator.
//! Handlers run on the service task. A handler that schedules more work
//! through a [`CoordinatorHandle`] only enqueues a command, which is
//! applied after the handler returns and opens a fresh debounce window.

use crate::error::ServiceError;
use crate::timers::{TimerExpiries, TokioTimers};
use settle_core::{
    Coordinator, CoordinatorBuilder, CoordinatorError, CoordinatorStats, RestrictedPolicy,
    Traced, UpdateKind,
};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Point-in-time view of the coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorStatus {
    pub pending: bool,
    pub restricted: bool,
    pub deferred: Option<UpdateKind>,
    pub policy: RestrictedPolicy,
    pub debounce: Duration,
    pub stats: CoordinatorStats,
}

enum Command {
    Schedule(UpdateKind),
    Flush(oneshot::Sender<Option<UpdateKind>>),
    ClearAll,
    SetRestricted(bool),
    Status(oneshot::Sender<CoordinatorStatus>),
    Shutdown(oneshot::Sender<()>),
}

impl Traced for Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Schedule(_) => "schedule_update",
            Command::Flush(_) => "flush",
            Command::ClearAll => "clear_all",
            Command::SetRestricted(_) => "set_restricted_mode",
            Command::Status(_) => "status",
            Command::Shutdown(_) => "shutdown",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Command::Schedule(kind) => vec![("kind", kind.to_string())],
            Command::SetRestricted(active) => vec![("active", active.to_string())],
            _ => vec![],
        }
    }
}

/// Cloneable, thread-safe access to a running coordinator
#[derive(Clone)]
pub struct CoordinatorHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl CoordinatorHandle {
    /// Non-blocking; safe to call from inside a handler
    pub fn schedule_update(&self, kind: UpdateKind) -> Result<(), ServiceError> {
        self.commands.send(Command::Schedule(kind))?;
        Ok(())
    }

    pub fn clear_all(&self) -> Result<(), ServiceError> {
        self.commands.send(Command::ClearAll)?;
        Ok(())
    }

    pub fn set_restricted_mode(&self, active: bool) -> Result<(), ServiceError> {
        self.commands.send(Command::SetRestricted(active))?;
        Ok(())
    }

    /// Run pending work now. Resolves after the handler has returned.
    pub async fn flush(&self) -> Result<Option<UpdateKind>, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(Command::Flush(tx))?;
        Ok(rx.await?)
    }

    pub async fn status(&self) -> Result<CoordinatorStatus, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(Command::Status(tx))?;
        Ok(rx.await?)
    }

    pub async fn has_pending_updates(&self) -> Result<bool, ServiceError> {
        Ok(self.status().await?.pending)
    }

    pub async fn is_restricted(&self) -> Result<bool, ServiceError> {
        Ok(self.status().await?.restricted)
    }

    pub async fn stats(&self) -> Result<CoordinatorStats, ServiceError> {
        Ok(self.status().await?.stats)
    }

    /// Stop the service. Resolves once the coordinator and its timer are gone.
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(Command::Shutdown(tx))?;
        Ok(rx.await?)
    }
}

/// Owns the command channel until the service is spawned
///
/// Create the service first so handlers can capture a handle, then spawn.
pub struct CoordinatorService {
    handle: CoordinatorHandle,
    commands: mpsc::UnboundedReceiver<Command>,
}

impl Default for CoordinatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatorService {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle: CoordinatorHandle { commands: tx },
            commands: rx,
        }
    }

    pub fn handle(&self) -> CoordinatorHandle {
        self.handle.clone()
    }

    /// Build the coordinator and start its task. Must be called within a
    /// tokio runtime.
    ///
    /// Handlers that hold a handle keep the channel open, so stop the
    /// service with [`CoordinatorHandle::shutdown`].
    pub fn spawn(self, builder: CoordinatorBuilder) -> Result<CoordinatorHandle, CoordinatorError> {
        let (timers, expiries) = TokioTimers::new();
        let coordinator = builder.build(timers)?;
        tokio::spawn(run(coordinator, expiries, self.commands));
        Ok(self.handle)
    }
}

async fn run(
    mut coordinator: Coordinator<TokioTimers>,
    mut expiries: TimerExpiries,
    mut commands: mpsc::UnboundedReceiver<Command>,
) {
    tracing::info!("coordinator service started");
    let mut shutdown_ack = None;

    loop {
        tokio::select! {
            command = commands.recv() => {
                match command {
                    Some(Command::Shutdown(ack)) => {
                        shutdown_ack = Some(ack);
                        break;
                    }
                    Some(command) => apply(&mut coordinator, command),
                    None => break,
                }
            }

            Some(id) = expiries.recv() => {
                coordinator.on_timer(id);
            }
        }
    }

    // Coordinator drop cancels the live timer; close the channel before
    // acknowledging so later calls fail with Closed.
    drop(coordinator);
    drop(commands);
    if let Some(ack) = shutdown_ack {
        let _ = ack.send(());
    }
    tracing::info!("coordinator service stopped");
}

fn apply(coordinator: &mut Coordinator<TokioTimers>, command: Command) {
    let span = tracing::debug_span!("command", command = command.name());
    let _guard = span.enter();
    tracing::debug!(fields = ?command.fields(), "applying");

    match command {
        Command::Schedule(kind) => coordinator.schedule_update(kind),
        Command::Flush(reply) => {
            let ran = coordinator.flush();
            let _ = reply.send(ran);
        }
        Command::ClearAll => coordinator.clear_all(),
        Command::SetRestricted(active) => coordinator.set_restricted_mode(active),
        Command::Status(reply) => {
            let _ = reply.send(CoordinatorStatus {
                pending: coordinator.has_pending_updates(),
                restricted: coordinator.is_restricted(),
                deferred: coordinator.deferred(),
                policy: coordinator.policy(),
                debounce: coordinator.debounce(),
                stats: coordinator.stats(),
            });
        }
        // Handled by the loop
        Command::Shutdown(_) => {}
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
