// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge from a host restricted-mode signal to the coordinator

use crate::service::CoordinatorHandle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Forward the current value of `signal`, then every change, to
/// `set_restricted_mode`. Stops when either side closes.
pub fn forward_restricted_mode(
    mut signal: watch::Receiver<bool>,
    handle: CoordinatorHandle,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let active = *signal.borrow_and_update();
            if handle.set_restricted_mode(active).is_err() {
                tracing::debug!("coordinator closed, restricted-mode bridge stopping");
                break;
            }
            if signal.changed().await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
