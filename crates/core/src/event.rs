// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger events and the context they hand to event-scoped variables

use crate::workspace::FileRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unrecognized event code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event: {0}")]
pub struct UnknownEvent(pub String);

/// Kinds of events that can trigger a shell command.
///
/// Serializes as the event code, e.g. `file-menu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    OnStartup,
    OnQuit,
    EveryNSeconds,
    EditorMenu,
    FileMenu,
    FileCreated,
    FileContentModified,
    FileDeleted,
    FileMoved,
    FileRenamed,
    FolderMenu,
    FolderCreated,
    FolderDeleted,
    FolderMoved,
    FolderRenamed,
}

impl EventKind {
    pub const ALL: [EventKind; 15] = [
        EventKind::OnStartup,
        EventKind::OnQuit,
        EventKind::EveryNSeconds,
        EventKind::EditorMenu,
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

    /// Events whose subject is a single file.
    pub const FILE_EVENTS: [EventKind; 6] = [
        EventKind::FileMenu,
        EventKind::FileCreated,
        EventKind::FileContentModified,
        EventKind::FileDeleted,
        EventKind::FileMoved,
        EventKind::FileRenamed,
    ];

    /// Events whose subject is a folder.
    pub const FOLDER_EVENTS: [EventKind; 5] = [
        EventKind::FolderMenu,
        EventKind::FolderCreated,
        EventKind::FolderDeleted,
        EventKind::FolderMoved,
        EventKind::FolderRenamed,
    ];

    /// Code used in configuration files and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            EventKind::OnStartup => "on-startup",
            EventKind::OnQuit => "on-quit",
            EventKind::EveryNSeconds => "every-n-seconds",
            EventKind::EditorMenu => "editor-menu",
            EventKind::FileMenu => "file-menu",
            EventKind::FileCreated => "file-created",
            EventKind::FileContentModified => "file-content-modified",
            EventKind::FileDeleted => "file-deleted",
            EventKind::FileMoved => "file-moved",
            EventKind::FileRenamed => "file-renamed",
            EventKind::FolderMenu => "folder-menu",
            EventKind::FolderCreated => "folder-created",
            EventKind::FolderDeleted => "folder-deleted",
            EventKind::FolderMoved => "folder-moved",
            EventKind::FolderRenamed => "folder-renamed",
        }
    }

    /// Human readable title.
    pub fn title(self) -> &'static str {
        match self {
            EventKind::OnStartup => "After the application starts",
            EventKind::OnQuit => "Before the application quits",
            EventKind::EveryNSeconds => "Every n seconds",
            EventKind::EditorMenu => "Editor menu",
            EventKind::FileMenu => "File menu",
            EventKind::FileCreated => "File created",
            EventKind::FileContentModified => "File content modified",
            EventKind::FileDeleted => "File deleted",
            EventKind::FileMoved => "File moved",
            EventKind::FileRenamed => "File renamed",
            EventKind::FolderMenu => "Folder menu",
            EventKind::FolderCreated => "Folder created",
            EventKind::FolderDeleted => "Folder deleted",
            EventKind::FolderMoved => "Folder moved",
            EventKind::FolderRenamed => "Folder renamed",
        }
    }

    pub fn is_file_event(self) -> bool {
        Self::FILE_EVENTS.contains(&self)
    }

    pub fn is_folder_event(self) -> bool {
        Self::FOLDER_EVENTS.contains(&self)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEvent;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| UnknownEvent(code.to_string()))
    }
}

/// A concrete event occurrence handed to the parsing process.
///
/// The subject is the file for file events and the folder for folder events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    kind: EventKind,
    subject: Option<FileRef>,
}

impl EventContext {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: FileRef) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// True when the event is one of `supported`.
    pub fn is_supported(&self, supported: &[EventKind]) -> bool {
        supported.contains(&self.kind)
    }

    /// The event's file, only for file events.
    pub fn file(&self) -> Option<&FileRef> {
        self.subject.as_ref().filter(|_| self.kind.is_file_event())
    }

    /// The event's folder: the folder itself for folder events, the file's
    /// parent for file events.
    pub fn folder(&self) -> Option<FileRef> {
        let subject = self.subject.as_ref()?;
        if self.kind.is_folder_event() {
            Some(subject.clone())
        } else if self.kind.is_file_event() {
            Some(subject.parent())
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
