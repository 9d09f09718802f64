// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler table: one zero-argument operation per update kind

use crate::kind::UpdateKind;
use std::collections::HashMap;
use std::fmt;

/// Recomputation invoked when its kind wins a flush
///
/// Must tolerate being called when nothing changed since the last call.
pub type Handler = Box<dyn FnMut() + Send>;

/// Mapping from kind to handler. Kinds without a handler flush as no-ops.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<UpdateKind, Handler>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, kind: UpdateKind, handler: impl FnMut() + Send + 'static) -> Self {
        self.insert(kind, handler);
        self
    }

    /// Register `handler` for `kind`, replacing any previous one
    pub fn insert(&mut self, kind: UpdateKind, handler: impl FnMut() + Send + 'static) {
        self.handlers.insert(kind, Box::new(handler));
    }

    pub fn contains(&self, kind: UpdateKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Registered kinds, cheapest first
    pub fn kinds(&self) -> Vec<UpdateKind> {
        let mut kinds: Vec<UpdateKind> = self.handlers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Run the handler for `kind`. Returns false if none is registered.
    pub(crate) fn invoke(&mut self, kind: UpdateKind) -> bool {
        match self.handlers.get_mut(&kind) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
