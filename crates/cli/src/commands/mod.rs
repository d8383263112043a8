// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations and the host setup they share

pub mod list;
pub mod parse;
pub mod variables;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use shellcmd_core::{
    EventContext, EventKind, FileRef, Settings, StaticWorkspace, SystemClock, UuidIdGen,
};
use shellcmd_parser::{Host, HostDeps, PromptChannel};
use tracing::debug;

use crate::env;

/// Global options that locate the settings file and the workspace
#[derive(Debug, Clone, Default)]
pub struct HostOptions {
    pub config: Option<PathBuf>,
    pub root: Option<PathBuf>,
}

impl HostOptions {
    /// Workspace root: `--root`, else the current directory.
    pub fn root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Load settings from `--config`, SHELLCMD_CONFIG or the default location.
///
/// An explicitly named file must exist; a missing default file means empty
/// settings.
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    if let Some(path) = config.map(Path::to_path_buf).or_else(env::config_override) {
        return Ok(Settings::load(&path)?);
    }
    match env::default_config_path() {
        Some(path) if path.exists() => Ok(Settings::load(&path)?),
        path => {
            debug!(path = ?path, "no settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

/// `path` relative to `root`. Relative paths are taken as already relative.
pub fn workspace_relative(root: &Path, path: &Path) -> Result<PathBuf> {
    if path.is_relative() {
        return Ok(path.to_path_buf());
    }
    match path.strip_prefix(root) {
        Ok(relative) => Ok(relative.to_path_buf()),
        Err(_) => bail!(
            "{} is outside the workspace root {}",
            path.display(),
            root.display()
        ),
    }
}

/// Event context from `--event` and `--subject`.
pub fn event_context(
    root: &Path,
    code: Option<&str>,
    subject: Option<&Path>,
) -> Result<Option<EventContext>> {
    let Some(code) = code else {
        if subject.is_some() {
            bail!("--subject requires --event");
        }
        return Ok(None);
    };
    let kind: EventKind = code.parse()?;
    let mut event = EventContext::new(kind);
    if let Some(subject) = subject {
        event = event.with_subject(FileRef::new(workspace_relative(root, subject)?));
    }
    Ok(Some(event))
}

/// Build the host with the system clock and UUID ids.
pub fn open_host(
    options: &HostOptions,
    active_file: Option<&Path>,
    prompts: Arc<dyn PromptChannel>,
) -> Result<Host> {
    let settings = load_settings(options.config.as_deref())?;
    let root = options.root()?;
    let mut workspace = StaticWorkspace::new(root.clone());
    if let Some(file) = active_file {
        workspace = workspace.with_active_file(workspace_relative(&root, file)?);
    }
    let deps = HostDeps {
        workspace: Arc::new(workspace),
        clock: Arc::new(SystemClock),
        ids: Arc::new(UuidIdGen),
        prompts,
    };
    Ok(Host::new(settings, deps)?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
