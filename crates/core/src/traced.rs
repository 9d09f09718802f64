// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Span naming for coordinator commands
//!
//! Hosts that queue coordinator operations (schedule, flush, clear, mode
//! changes) describe each queued command through [`Traced`] so every
//! command is logged under a span named after the coordinator operation
//! it performs.

/// A queued coordinator operation
pub trait Traced {
    /// Coordinator operation this command performs, used as the span name
    fn name(&self) -> &'static str;

    /// Arguments of the operation (kind, restricted flag), as log fields
    fn fields(&self) -> Vec<(&'static str, String)>;
}
