// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay scenarios: timed coordinator operations loaded from TOML
//!
//! ```toml
//! [coordinator]
//! debounce = "100ms"
//! policy = "data-only"
//!
//! [[step]]
//! at = "0ms"
//! action = "restrict"
//!
//! [[step]]
//! at = "10ms"
//! action = "schedule"
//! kind = "full-rebuild"
//! ```

use serde::Deserialize;
use settle_core::{ConfigError, CoordinatorConfig, CoordinatorError, UpdateKind};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Latest step offset a scenario may use
pub const MAX_STEP_OFFSET: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid coordinator config: {0}")]
    Config(#[from] ConfigError),
    #[error("step {index}: {source}")]
    Step {
        index: usize,
        #[source]
        source: CoordinatorError,
    },
    #[error("step {index}: `{action}` requires a kind")]
    MissingKind { index: usize, action: Action },
    #[error("step {index}: `{action}` does not take a kind")]
    UnexpectedKind { index: usize, action: Action },
    #[error("step {index} at {at}ms is earlier than the previous step at {previous}ms")]
    OutOfOrder { index: usize, at: u128, previous: u128 },
    #[error("step {index} at {at:?} is past the replay limit of {max:?}")]
    TooLate {
        index: usize,
        at: Duration,
        max: Duration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Restrict,
    Release,
    Schedule,
    Flush,
    Clear,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Restrict => "restrict",
            Action::Release => "release",
            Action::Schedule => "schedule",
            Action::Flush => "flush",
            Action::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// A validated operation against the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SetRestricted(bool),
    Schedule(UpdateKind),
    Flush,
    ClearAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Offset from the start of the replay
    pub at: Duration,
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub config: CoordinatorConfig,
    pub steps: Vec<Step>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScenario {
    #[serde(default)]
    coordinator: CoordinatorConfig,
    #[serde(default, rename = "step")]
    steps: Vec<RawStep>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    #[serde(with = "humantime_serde")]
    at: Duration,
    action: Action,
    // Parsed by hand so an unknown name reports as an unknown kind
    kind: Option<String>,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        let raw: RawScenario = toml::from_str(content)?;
        raw.coordinator.validate()?;

        let mut steps = Vec::with_capacity(raw.steps.len());
        let mut previous = Duration::ZERO;
        for (index, step) in raw.steps.into_iter().enumerate() {
            if step.at > MAX_STEP_OFFSET {
                return Err(ScenarioError::TooLate {
                    index,
                    at: step.at,
                    max: MAX_STEP_OFFSET,
                });
            }
            if step.at < previous {
                return Err(ScenarioError::OutOfOrder {
                    index,
                    at: step.at.as_millis(),
                    previous: previous.as_millis(),
                });
            }
            previous = step.at;
            steps.push(Step {
                at: step.at,
                operation: resolve(index, step.action, step.kind)?,
            });
        }

        Ok(Self {
            config: raw.coordinator,
            steps,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

fn resolve(index: usize, action: Action, kind: Option<String>) -> Result<Operation, ScenarioError> {
    match (action, kind) {
        (Action::Schedule, Some(name)) => name
            .parse()
            .map(Operation::Schedule)
            .map_err(|source| ScenarioError::Step { index, source }),
        (Action::Schedule, None) => Err(ScenarioError::MissingKind { index, action }),
        (_, Some(_)) => Err(ScenarioError::UnexpectedKind { index, action }),
        (Action::Restrict, None) => Ok(Operation::SetRestricted(true)),
        (Action::Release, None) => Ok(Operation::SetRestricted(false)),
        (Action::Flush, None) => Ok(Operation::Flush),
        (Action::Clear, None) => Ok(Operation::ClearAll),
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
