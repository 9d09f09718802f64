// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! settle-runtime: hosts a coordinator on tokio
//!
//! The coordinator itself is single-owner. This crate serializes access to
//! it through one command channel and delivers debounce expiries from
//! `tokio::time` on the same task.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

mod error;
mod service;
mod signal;
mod timers;

pub use error::ServiceError;
pub use service::{CoordinatorHandle, CoordinatorService, CoordinatorStatus};
pub use signal::forward_restricted_mode;
pub use timers::{TimerExpiries, TokioTimers};
