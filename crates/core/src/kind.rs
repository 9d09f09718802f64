// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Update kinds and restricted-mode policies
//!
//! Kinds form a closed, totally ordered set. A higher priority kind is a
//! more comprehensive recomputation and supersedes every cheaper one.

use crate::error::CoordinatorError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A recomputation that can be requested from the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateKind {
    /// Refresh displayed values in place
    #[serde(alias = "DataRefresh")]
    DataRefresh,
    /// Re-sort existing entries
    #[serde(alias = "SortRequired")]
    SortRequired,
    /// Tear down and rebuild everything
    #[serde(alias = "FullRebuild")]
    FullRebuild,
}

impl UpdateKind {
    /// Every kind, cheapest first
    pub const ALL: [UpdateKind; 3] = [
        UpdateKind::DataRefresh,
        UpdateKind::SortRequired,
        UpdateKind::FullRebuild,
    ];

    /// Static priority. Distinct per kind.
    pub fn priority(self) -> u8 {
        match self {
            UpdateKind::DataRefresh => 1,
            UpdateKind::SortRequired => 2,
            UpdateKind::FullRebuild => 3,
        }
    }

    /// The cheapest kind, the only one `DataOnly` lets through while restricted
    pub fn lowest() -> Self {
        UpdateKind::DataRefresh
    }

    pub fn name(self) -> &'static str {
        match self {
            UpdateKind::DataRefresh => "data-refresh",
            UpdateKind::SortRequired => "sort-required",
            UpdateKind::FullRebuild => "full-rebuild",
        }
    }
}

impl Ord for UpdateKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for UpdateKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UpdateKind {
    type Err = CoordinatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data-refresh" | "DataRefresh" => Ok(UpdateKind::DataRefresh),
            "sort-required" | "SortRequired" => Ok(UpdateKind::SortRequired),
            "full-rebuild" | "FullRebuild" => Ok(UpdateKind::FullRebuild),
            other => Err(CoordinatorError::UnknownKind(other.to_string())),
        }
    }
}

/// What the coordinator lets through while restricted mode is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestrictedPolicy {
    /// Restriction is ignored
    Normal,
    /// Only the cheapest kind runs; everything else is deferred
    #[default]
    DataOnly,
    /// Everything is deferred
    Defer,
}

impl RestrictedPolicy {
    /// Whether `kind` may be scheduled while restricted
    pub fn admits(self, kind: UpdateKind) -> bool {
        match self {
            RestrictedPolicy::Normal => true,
            RestrictedPolicy::DataOnly => kind == UpdateKind::lowest(),
            RestrictedPolicy::Defer => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RestrictedPolicy::Normal => "normal",
            RestrictedPolicy::DataOnly => "data-only",
            RestrictedPolicy::Defer => "defer",
        }
    }
}

impl fmt::Display for RestrictedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RestrictedPolicy {
    type Err = CoordinatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" | "Normal" => Ok(RestrictedPolicy::Normal),
            "data-only" | "DataOnly" => Ok(RestrictedPolicy::DataOnly),
            "defer" | "Defer" => Ok(RestrictedPolicy::Defer),
            other => Err(CoordinatorError::UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
