// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host workspace state exposed to variables

use std::path::{Path, PathBuf};

/// A file or folder inside the workspace, stored relative to the workspace root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef {
    relative: PathBuf,
}

impl FileRef {
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.relative)
    }

    /// Final path component, including any extension.
    pub fn name(&self) -> String {
        self.relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its extension.
    pub fn stem(&self) -> String {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, _)) => stem.to_string(),
            None => name,
        }
    }

    /// Text after the last dot of the name; empty when there is no dot.
    /// Dotfiles count too, so `.bashrc` has extension `bashrc`.
    pub fn extension(&self) -> String {
        self.name()
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_string())
            .unwrap_or_default()
    }

    /// Containing folder. Files at the root yield an empty relative path.
    pub fn parent(&self) -> FileRef {
        FileRef::new(self.relative.parent().unwrap_or(Path::new("")))
    }
}

/// Read access to the host application's current state
pub trait Workspace: Send + Sync {
    /// Absolute path of the workspace root.
    fn root(&self) -> &Path;

    /// The file currently focused by the user, if any.
    fn active_file(&self) -> Option<&FileRef>;
}

/// Workspace with a fixed root and active file
#[derive(Debug, Clone)]
pub struct StaticWorkspace {
    root: PathBuf,
    active_file: Option<FileRef>,
}

impl StaticWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            active_file: None,
        }
    }

    pub fn with_active_file(mut self, relative: impl Into<PathBuf>) -> Self {
        self.active_file = Some(FileRef::new(relative));
        self
    }
}

impl Workspace for StaticWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn active_file(&self) -> Option<&FileRef> {
        self.active_file.as_ref()
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
