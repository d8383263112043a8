// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shellcmd variables`

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use shellcmd_core::EventKind;
use shellcmd_parser::Host;
use shellcmd_variables::{is_available_in, usage};

use super::{open_host, HostOptions};
use crate::output::{print_json, OutputFormat};
use crate::prompt::LinePrompt;
use crate::table::{Column, Table};

#[derive(Args)]
pub struct VariablesArgs {
    /// Report availability for commands triggered by this event
    #[arg(long, value_name = "CODE")]
    pub event: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VariableEntry {
    pub name: String,
    pub usage: String,
    pub description: String,
    pub available: bool,
    /// Events an event-scoped variable works in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}

pub async fn handle(
    args: VariablesArgs,
    options: &HostOptions,
    format: OutputFormat,
) -> Result<()> {
    let event = args.event.as_deref().map(str::parse::<EventKind>).transpose()?;
    let host = open_host(options, None, Arc::new(LinePrompt::stdin()))?;
    let entries = entries(&host, event);
    match format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Text => render(&entries, Table::new, &mut std::io::stdout()),
    }
    Ok(())
}

/// Built-in variables first, then custom ones.
pub fn entries(host: &Host, event: Option<EventKind>) -> Vec<VariableEntry> {
    host.registry()
        .snapshot()
        .iter()
        .map(|variable| VariableEntry {
            name: variable.name().to_string(),
            usage: usage(variable.as_ref()),
            description: variable.description().to_string(),
            available: is_available_in(variable.as_ref(), event),
            events: variable
                .supported_events()
                .map(|events| events.iter().map(|e| e.code().to_string()).collect()),
        })
        .collect()
}

fn render(entries: &[VariableEntry], table: fn(Vec<Column>) -> Table, out: &mut impl Write) {
    let mut table = table(vec![
        Column::left("VARIABLE"),
        Column::left("AVAILABLE"),
        Column::muted("DESCRIPTION"),
    ]);
    for entry in entries {
        let available = if entry.available { "yes" } else { "no" };
        table.row(vec![
            entry.usage.clone(),
            available.to_string(),
            entry.description.clone(),
        ]);
    }
    table.render(out);
}

#[cfg(test)]
#[path = "variables_tests.rs"]
mod tests;
