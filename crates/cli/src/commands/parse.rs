// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shellcmd parse`: prepare a command for execution and print it

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use shellcmd_parser::{prepare, Preparation};

use super::{event_context, open_host, HostOptions};
use crate::exit_error::ExitError;
use crate::output::{to_json, OutputFormat};
use crate::prompt::LinePrompt;

/// Exit code when the user cancels a prompt
pub const CANCELLED_EXIT_CODE: i32 = 130;

#[derive(Args)]
pub struct ParseArgs {
    /// Shell command id
    pub id: String,

    /// Active file, relative to the workspace root
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Parse as if triggered by this event, e.g. file-created
    #[arg(long, value_name = "CODE")]
    pub event: Option<String>,

    /// File or folder the event is about
    #[arg(long, value_name = "PATH")]
    pub subject: Option<PathBuf>,
}

pub async fn handle(args: ParseArgs, options: &HostOptions, format: OutputFormat) -> Result<()> {
    let root = options.root()?;
    let event = event_context(&root, args.event.as_deref(), args.subject.as_deref())?;
    let host = open_host(options, args.file.as_deref(), Arc::new(LinePrompt::stdin()))?;
    let command = host.require_command(&args.id)?;

    let preparation = prepare(&host, command, event).await?;
    report(&preparation, format, &mut std::io::stdout())
}

/// Print the outcome. Anything but a ready command becomes an [`ExitError`].
pub fn report(preparation: &Preparation, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    if format == OutputFormat::Json {
        out.write_all(to_json(preparation)?.as_bytes())?;
    }
    match preparation {
        Preparation::Ready(prepared) => {
            if format == OutputFormat::Text {
                writeln!(out, "{}", prepared.command)?;
            }
            Ok(())
        }
        Preparation::Cancelled => {
            let message = match format {
                OutputFormat::Text => "cancelled",
                OutputFormat::Json => "",
            };
            Err(ExitError::new(CANCELLED_EXIT_CODE, message).into())
        }
        Preparation::Failed { error_messages } => {
            let message = match format {
                OutputFormat::Text => error_messages.join("\n"),
                OutputFormat::Json => String::new(),
            };
            Err(ExitError::new(1, message).into())
        }
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
