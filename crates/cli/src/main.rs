// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! settle - update coordinator debugging tool

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

mod commands;
mod output;
mod replay;
mod scenario;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, replay as replay_cmd};

#[derive(Parser)]
#[command(
    name = "settle",
    version,
    about = "Replay and inspect debounced update coordination"
)]
struct Cli {
    /// Log coordinator decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario and print which handlers ran when
    Replay(replay_cmd::ReplayArgs),
    /// Validate a coordinator config file
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Replay(args) => replay_cmd::replay(args),
        Commands::Check(args) => check::check(args),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
/// `SETTLE_LOG` overrides the default filter.
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SETTLE_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
