// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay command

use crate::output::{self, OutputFormat};
use crate::replay::replay as run_replay;
use crate::scenario::Scenario;
use anyhow::Result;
use clap::Args;
use settle_core::RestrictedPolicy;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReplayArgs {
    /// Scenario file (TOML)
    pub scenario: PathBuf,

    /// Override the scenario's restricted-mode policy
    /// (normal, data-only, defer)
    #[arg(long)]
    pub policy: Option<RestrictedPolicy>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn replay(args: ReplayArgs) -> Result<()> {
    let mut scenario = Scenario::load(&args.scenario)?;
    if let Some(policy) = args.policy {
        scenario.config.policy = policy;
    }
    tracing::info!(
        scenario = %args.scenario.display(),
        steps = scenario.steps.len(),
        policy = %scenario.config.policy,
        "replaying"
    );

    let report = run_replay(&scenario)?;
    output::print(&report, args.format)
}
