// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in variables

mod date;
mod environment;
mod event;
mod file;

pub use date::{format_moment, Date};
pub use environment::Environment;
pub use event::{EventFileExtension, EventFileName, EventFilePath, EventFolderPath, EventType};
pub use file::{FileExtension, FileName, FilePath, FolderName, FolderPath, Title, WorkspacePath};

use crate::grammar::Parameter;
use crate::variable::Variable;
use shellcmd_core::FileRef;
use std::path::Path;
use std::sync::Arc;

const DOT: Parameter = Parameter::options("dot", &["with-dot", "no-dot"]);
const MODE: Parameter = Parameter::options("mode", &["absolute", "relative"]);

/// Every built-in variable, in help order.
pub fn all() -> Vec<Arc<dyn Variable>> {
    vec![
        Arc::new(Date),
        Arc::new(Environment),
        Arc::new(FileExtension),
        Arc::new(FileName),
        Arc::new(FilePath),
        Arc::new(FolderName),
        Arc::new(FolderPath),
        Arc::new(Title),
        Arc::new(WorkspacePath),
        Arc::new(EventFileExtension),
        Arc::new(EventFileName),
        Arc::new(EventFilePath),
        Arc::new(EventFolderPath),
        Arc::new(EventType),
    ]
}

/// Extension of `file`; `with_dot` prefixes a dot only when there is one.
fn extension_value(file: &FileRef, with_dot: bool) -> String {
    let extension = file.extension();
    if with_dot && !extension.is_empty() {
        format!(".{extension}")
    } else {
        extension
    }
}

/// `file` as an absolute path or relative to the workspace root.
///
/// The root itself is `.` in relative mode.
fn path_value(file: &FileRef, root: &Path, mode: Option<&str>) -> String {
    if mode == Some("absolute") {
        return file.absolute(root).to_string_lossy().into_owned();
    }
    let relative = file.relative().to_string_lossy();
    if relative.is_empty() {
        ".".to_string()
    } else {
        relative.into_owned()
    }
}

/// Name of a folder; the workspace root's name stands in for the root itself.
fn folder_name_value(folder: &FileRef, root: &Path) -> String {
    if folder.relative().as_os_str().is_empty() {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    } else {
        folder.name()
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
