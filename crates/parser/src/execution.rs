// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preparing a command for execution: parse, run preactions, parse again

use crate::command::{ShellCommand, ALIAS_TARGET, SHELL_COMMAND_TARGET};
use crate::host::Host;
use crate::process::ProcessError;
use serde::Serialize;
use shellcmd_core::{EventContext, ShellCommandId};
use shellcmd_variables::ResolveContext;
use tracing::{info, warn};

/// A fully parsed command, ready to hand to a process spawner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedCommand {
    pub id: ShellCommandId,
    pub shell: String,
    pub command: String,
    pub alias: String,
    pub confirm_execution: bool,
    pub ignore_error_codes: Vec<i32>,
}

/// Outcome of [`prepare`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Preparation {
    Ready(PreparedCommand),
    /// A preaction was cancelled by the user.
    Cancelled,
    Failed { error_messages: Vec<String> },
}

/// Parse `command`, running its enabled preactions between the passes.
///
/// Pass 0 failing stops before any preaction runs, so the user is never
/// prompted for a command that cannot be parsed anyway.
pub async fn prepare(
    host: &Host,
    command: &ShellCommand,
    event: Option<EventContext>,
) -> Result<Preparation, ProcessError> {
    let mut process = command.create_parsing_process(host, event.clone());
    if !process.process().await? {
        warn!(command = %command.id(), "parsing failed before preactions");
        return Ok(Preparation::Failed {
            error_messages: process.error_messages(),
        });
    }

    let ctx = ResolveContext::new(host.state(), event.as_ref());
    for preaction in command.preactions(host) {
        match preaction.execute(&ctx, host.prompts()).await {
            Ok(true) => {}
            Ok(false) => {
                info!(command = %command.id(), preaction = preaction.kind(), "cancelled");
                return Ok(Preparation::Cancelled);
            }
            Err(e) => {
                warn!(command = %command.id(), preaction = preaction.kind(), error = %e, "preaction failed");
                return Ok(Preparation::Failed {
                    error_messages: vec![e.to_string()],
                });
            }
        }
    }

    if !process.process_rest().await? {
        warn!(command = %command.id(), "parsing failed");
        return Ok(Preparation::Failed {
            error_messages: process.error_messages(),
        });
    }

    let parsed = |key: &str| {
        process
            .result(key)
            .and_then(|r| r.parsed_content)
            .unwrap_or_default()
    };
    let prepared = PreparedCommand {
        id: command.id().clone(),
        shell: command.shell(host.settings()).to_string(),
        command: parsed(SHELL_COMMAND_TARGET),
        alias: parsed(ALIAS_TARGET),
        confirm_execution: command.confirm_execution(),
        ignore_error_codes: command.ignore_error_codes().to_vec(),
    };
    info!(command = %prepared.id, "command prepared");
    Ok(Preparation::Ready(prepared))
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
