// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shellcmd list`

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use shellcmd_parser::Host;

use super::{open_host, HostOptions};
use crate::output::{print_json, OutputFormat};
use crate::prompt::LinePrompt;
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ListArgs {
    /// Show titles with variables resolved where possible
    #[arg(long)]
    pub preview: bool,

    /// Active file, relative to the workspace root
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct CommandEntry {
    pub id: String,
    pub title: String,
    pub shell: String,
    pub events: Vec<String>,
    pub preactions: usize,
}

pub async fn handle(args: ListArgs, options: &HostOptions, format: OutputFormat) -> Result<()> {
    let host = open_host(options, args.file.as_deref(), Arc::new(LinePrompt::stdin()))?;
    let entries = entries(&host, args.preview).await;
    match format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Text => render(&entries, Table::new, &mut std::io::stdout()),
    }
    Ok(())
}

/// One entry per configured command, in settings order.
pub async fn entries(host: &Host, preview: bool) -> Vec<CommandEntry> {
    let mut entries = Vec::new();
    for command in host.commands() {
        let title = if preview {
            command.preview_title(host).await
        } else {
            command.alias_or_shell_command().to_string()
        };
        entries.push(CommandEntry {
            id: command.id().to_string(),
            title,
            shell: command.shell(host.settings()).to_string(),
            events: command
                .enabled_events()
                .iter()
                .map(|kind| kind.code().to_string())
                .collect(),
            preactions: command.preactions(host).len(),
        });
    }
    entries
}

fn render(entries: &[CommandEntry], table: fn(Vec<Column>) -> Table, out: &mut impl Write) {
    if entries.is_empty() {
        let _ = writeln!(out, "No shell commands configured");
        return;
    }
    let mut table = table(vec![
        Column::left("ID"),
        Column::left("TITLE").with_max(60),
        Column::muted("EVENTS"),
    ]);
    for entry in entries {
        table.row(vec![
            entry.id.clone(),
            entry.title.clone(),
            entry.events.join(", "),
        ]);
    }
    table.render(out);
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
