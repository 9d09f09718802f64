// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for coordinator wiring and configuration
//!
//! Every variant here is a wiring bug or a bad config file. Benign gaps
//! (missing handler, redundant transitions, empty flush) are not errors.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while constructing or feeding a coordinator
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("handler table is empty")]
    NoHandlers,
    #[error("unknown update kind: {0}")]
    UnknownKind(String),
    #[error("unknown restricted policy: {0}")]
    UnknownPolicy(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors loading or validating a [`CoordinatorConfig`](crate::CoordinatorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("debounce interval must be greater than zero")]
    ZeroDebounce,
    #[error("debounce interval {debounce:?} exceeds the maximum of {max:?}")]
    DebounceTooLarge { debounce: Duration, max: Duration },
}
