// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordinator configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! debounce = "250ms"
//! policy = "defer"
//! ```

use crate::error::ConfigError;
use crate::kind::RestrictedPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Quiet period a burst must leave before the coordinator flushes
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Longest accepted debounce interval
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoordinatorConfig {
    #[serde(with = "humantime_serde")]
    pub debounce: Duration,
    pub policy: RestrictedPolicy,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            policy: RestrictedPolicy::default(),
        }
    }
}

impl CoordinatorConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_policy(mut self, policy: RestrictedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce.is_zero() {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.debounce > MAX_DEBOUNCE {
            return Err(ConfigError::DebounceTooLarge {
                debounce: self.debounce,
                max: MAX_DEBOUNCE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
