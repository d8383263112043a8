// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variables describing the event that triggered a command

use super::{extension_value, path_value, DOT, MODE};
use crate::grammar::{Arguments, Parameter};
use crate::variable::{ResolveContext, Variable, VariableError};
use async_trait::async_trait;
use shellcmd_core::{EventKind, FileRef};

const FILE_AND_FOLDER_EVENTS: [EventKind; 11] = [
    EventKind::FileMenu,
    EventKind::FileCreated,
    EventKind::FileContentModified,
    EventKind::FileDeleted,
    EventKind::FileMoved,
    EventKind::FileRenamed,
    EventKind::FolderMenu,
    EventKind::FolderCreated,
    EventKind::FolderDeleted,
    EventKind::FolderMoved,
    EventKind::FolderRenamed,
];

fn event_file<'a>(ctx: &ResolveContext<'a>, variable: &str) -> Result<&'a FileRef, VariableError> {
    let event = ctx.require_event(variable)?;
    event.file().ok_or(VariableError::MissingEventSubject {
        variable: variable.to_string(),
        event: event.kind(),
    })
}

/// `{{event_file_extension:with-dot|no-dot}}`
pub struct EventFileExtension;

#[async_trait]
impl Variable for EventFileExtension {
    fn name(&self) -> &str {
        "event_file_extension"
    }

    fn description(&self) -> &str {
        "The event related file name's ending, with or without a preceding dot."
    }

    fn parameters(&self) -> &[Parameter] {
        &[DOT]
    }

    fn supported_events(&self) -> Option<&[EventKind]> {
        Some(&EventKind::FILE_EVENTS)
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let file = event_file(ctx, self.name())?;
        Ok(extension_value(file, args.get("dot") == Some("with-dot")))
    }
}

/// `{{event_file_name}}`
pub struct EventFileName;

#[async_trait]
impl Variable for EventFileName {
    fn name(&self) -> &str {
        "event_file_name"
    }

    fn description(&self) -> &str {
        "The event related file name, including its extension."
    }

    fn supported_events(&self) -> Option<&[EventKind]> {
        Some(&EventKind::FILE_EVENTS)
    }

    async fn generate_value(
        &self,
        _args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        Ok(event_file(ctx, self.name())?.name())
    }
}

/// `{{event_file_path:absolute|relative}}`
pub struct EventFilePath;

#[async_trait]
impl Variable for EventFilePath {
    fn name(&self) -> &str {
        "event_file_path"
    }

    fn description(&self) -> &str {
        "Path to the event related file, absolute or relative to the workspace root."
    }

    fn parameters(&self) -> &[Parameter] {
        &[MODE]
    }

    fn supported_events(&self) -> Option<&[EventKind]> {
        Some(&EventKind::FILE_EVENTS)
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let file = event_file(ctx, self.name())?;
        Ok(path_value(file, ctx.workspace().root(), args.get("mode")))
    }
}

/// `{{event_folder_path:absolute|relative}}`
pub struct EventFolderPath;

#[async_trait]
impl Variable for EventFolderPath {
    fn name(&self) -> &str {
        "event_folder_path"
    }

    fn description(&self) -> &str {
        "Path to the event related folder: the folder itself, or the folder containing the event's file."
    }

    fn parameters(&self) -> &[Parameter] {
        &[MODE]
    }

    fn supported_events(&self) -> Option<&[EventKind]> {
        Some(&FILE_AND_FOLDER_EVENTS)
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let event = ctx.require_event(self.name())?;
        let folder = event.folder().ok_or(VariableError::MissingEventSubject {
            variable: self.name().to_string(),
            event: event.kind(),
        })?;
        Ok(path_value(&folder, ctx.workspace().root(), args.get("mode")))
    }
}

/// `{{event_type}}`
pub struct EventType;

#[async_trait]
impl Variable for EventType {
    fn name(&self) -> &str {
        "event_type"
    }

    fn description(&self) -> &str {
        "Code of the event that triggered the command, e.g. file-created."
    }

    fn supported_events(&self) -> Option<&[EventKind]> {
        Some(&EventKind::ALL)
    }

    async fn generate_value(
        &self,
        _args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        Ok(ctx.require_event(self.name())?.kind().code().to_string())
    }
}
