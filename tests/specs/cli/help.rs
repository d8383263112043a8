//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("variables")
        .stdout_has("parse");
}

#[test]
fn parse_help_shows_options() {
    cli()
        .args(&["parse", "--help"])
        .passes()
        .stdout_has("--event")
        .stdout_has("--subject")
        .stdout_has("--file");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
