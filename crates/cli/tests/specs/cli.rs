//! Top-level CLI specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .settle()
        .args(&["--help"])
        .passes()
        .stdout_has("replay")
        .stdout_has("check");
}

#[test]
fn missing_subcommand_fails() {
    Project::empty()
        .settle()
        .fails()
        .stderr_has("Usage");
}
