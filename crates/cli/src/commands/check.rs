// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config check command

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use settle_core::CoordinatorConfig;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Coordinator config file (TOML)
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Resolved(CoordinatorConfig);

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "debounce: {}", humantime::format_duration(self.0.debounce))?;
        write!(f, "policy: {}", self.0.policy)
    }
}

pub fn check(args: CheckArgs) -> Result<()> {
    let config = CoordinatorConfig::load(&args.config)?;
    output::print(&Resolved(config), args.format)
}
