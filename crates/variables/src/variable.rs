// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The variable capability and its resolution context

use crate::grammar::{Arguments, Parameter};
use crate::values::CustomVariableValues;
use async_trait::async_trait;
use shellcmd_core::{Clock, EventContext, EventKind, FileRef, Workspace};
use std::sync::Arc;
use thiserror::Error;

/// Why a variable could not produce a value.
///
/// This is the "no value" signal: an `Err` aborts the substitution, while
/// `Ok(String::new())` is a legitimate empty value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    #[error("{{{{{variable}}}}}: no file is currently active")]
    NoActiveFile { variable: String },
    #[error("{}", unsupported_event_message(.variable, .event))]
    UnsupportedEvent {
        variable: String,
        event: Option<EventKind>,
    },
    #[error("{{{{{variable}}}}}: the {event} event did not carry a file or folder")]
    MissingEventSubject { variable: String, event: EventKind },
    #[error("{{{{{variable}}}}} has not been assigned a value")]
    NoValue { variable: String },
    #[error("{{{{{variable}}}}}: environment variable {name} is not set")]
    NotSet { variable: String, name: String },
    #[error("{{{{{variable}}}}}: {reason}")]
    Unavailable { variable: String, reason: String },
}

fn unsupported_event_message(variable: &str, event: &Option<EventKind>) -> String {
    match event {
        Some(event) => format!("{{{{{variable}}}}} is not available in the {event} event"),
        None => format!("{{{{{variable}}}}} is only available when triggered by an event"),
    }
}

/// Process-scoped host state that variables read from
#[derive(Clone)]
pub struct HostState {
    workspace: Arc<dyn Workspace>,
    clock: Arc<dyn Clock>,
    values: CustomVariableValues,
}

impl HostState {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        clock: Arc<dyn Clock>,
        values: CustomVariableValues,
    ) -> Self {
        Self {
            workspace,
            clock,
            values,
        }
    }

    pub fn workspace(&self) -> &dyn Workspace {
        self.workspace.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn values(&self) -> &CustomVariableValues {
        &self.values
    }
}

/// Everything a variable may consult while producing its value
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    state: &'a HostState,
    event: Option<&'a EventContext>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(state: &'a HostState, event: Option<&'a EventContext>) -> Self {
        Self { state, event }
    }

    pub fn state(&self) -> &'a HostState {
        self.state
    }

    pub fn workspace(&self) -> &'a dyn Workspace {
        self.state.workspace()
    }

    pub fn clock(&self) -> &'a dyn Clock {
        self.state.clock()
    }

    pub fn values(&self) -> &'a CustomVariableValues {
        self.state.values()
    }

    pub fn event(&self) -> Option<&'a EventContext> {
        self.event
    }

    /// The focused file, or `NoActiveFile` on behalf of `variable`.
    pub fn active_file(&self, variable: &str) -> Result<&'a FileRef, VariableError> {
        self.workspace()
            .active_file()
            .ok_or_else(|| VariableError::NoActiveFile {
                variable: variable.to_string(),
            })
    }

    /// The triggering event, or `UnsupportedEvent` when there is none.
    pub fn require_event(&self, variable: &str) -> Result<&'a EventContext, VariableError> {
        self.event.ok_or_else(|| VariableError::UnsupportedEvent {
            variable: variable.to_string(),
            event: None,
        })
    }
}

/// A named value source addressed by `{{name:arg:...}}` placeholders.
///
/// Capabilities are declared, not inherited: a variable that needs an event
/// lists the events it supports, a variable that reads the active file says
/// so, and [`resolve`] checks both before `generate_value` runs.
#[async_trait]
pub trait Variable: Send + Sync {
    /// Placeholder name, unique within a registry.
    fn name(&self) -> &str;

    /// Stable key for per-command default values. Survives renames where
    /// the placeholder name does not.
    fn identifier(&self) -> &str {
        self.name()
    }

    fn description(&self) -> &str;

    /// Positional parameter grammar.
    fn parameters(&self) -> &[Parameter] {
        &[]
    }

    /// `Some` for event-scoped variables: the only events they work in.
    fn supported_events(&self) -> Option<&[EventKind]> {
        None
    }

    /// True when the value is derived from the active file.
    fn needs_active_file(&self) -> bool {
        false
    }

    /// Produce the value. Arguments already satisfy [`Variable::parameters`].
    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError>;
}

/// Whether `variable` can be used from the given trigger.
///
/// `None` means the command was started directly rather than by an event.
pub fn is_available_in(variable: &dyn Variable, event: Option<EventKind>) -> bool {
    match (variable.supported_events(), event) {
        (None, _) => true,
        (Some(supported), Some(event)) => supported.contains(&event),
        (Some(_), None) => false,
    }
}

/// Placeholder usage, e.g. `{{file_extension:with-dot|no-dot}}`.
pub fn usage(variable: &dyn Variable) -> String {
    let mut text = format!("{{{{{}", variable.name());
    for parameter in variable.parameters() {
        text.push(':');
        text.push_str(&parameter.usage());
    }
    text.push_str("}}");
    text
}

/// Check declared capabilities, then ask the variable for its value.
pub async fn resolve(
    variable: &dyn Variable,
    args: &Arguments,
    ctx: &ResolveContext<'_>,
) -> Result<String, VariableError> {
    let name = variable.name();
    if let Some(supported) = variable.supported_events() {
        match ctx.event() {
            Some(event) if event.is_supported(supported) => {}
            other => {
                return Err(VariableError::UnsupportedEvent {
                    variable: name.to_string(),
                    event: other.map(EventContext::kind),
                })
            }
        }
    }
    if variable.needs_active_file() {
        ctx.active_file(name)?;
    }

    let result = variable.generate_value(args, ctx).await;
    match &result {
        Ok(value) => tracing::debug!(variable = name, value_len = value.len(), "resolved"),
        Err(e) => tracing::debug!(variable = name, error = %e, "resolution failed"),
    }
    result
}

#[cfg(test)]
#[path = "variable_tests.rs"]
mod tests;
