// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shellcmd - resolve `{{variable}}` placeholders in configured shell commands

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod prompt;
mod table;

#[cfg(test)]
mod test_helpers;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{list, parse, variables, HostOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shellcmd",
    version,
    about = "Resolve variables in configured shell commands"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Settings file (default: $SHELLCMD_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Workspace root (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured shell commands
    List(list::ListArgs),
    /// List variables and where they can be used
    Variables(variables::VariablesArgs),
    /// Parse a shell command, asking for prompt values on stdin
    Parse(parse::ParseArgs),
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr, filtered by SHELLCMD_LOG.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let options = HostOptions {
        config: cli.config,
        root: cli.root,
    };

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::List(args) => list::handle(args, &options, format).await,
        Commands::Variables(args) => variables::handle(args, &options, format).await,
        Commands::Parse(args) => parse::handle(args, &options, format).await,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
