// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! settle-core: debounced, priority-coalescing update coordination
//!
//! This crate provides:
//! - The [`Coordinator`] state machine (pending set, single debounce timer,
//!   restricted mode, deferred slot)
//! - Clock and timer-facility abstractions with deterministic fakes
//! - Update kinds, restricted-mode policies and TOML configuration

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod clock;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod handlers;
pub mod kind;
pub mod timer;
pub mod traced;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{CoordinatorConfig, DEFAULT_DEBOUNCE, MAX_DEBOUNCE};
pub use coordinator::{Coordinator, CoordinatorBuilder, CoordinatorStats};
pub use error::{ConfigError, CoordinatorError};
pub use handlers::{Handler, HandlerTable};
pub use kind::{RestrictedPolicy, UpdateKind};
pub use timer::{ManualTimers, TimerFacility, TimerId};
pub use traced::Traced;
