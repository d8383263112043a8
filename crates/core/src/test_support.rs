// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::config::{
    CustomVariableConfig, PreactionConfig, PreactionKind, PromptConfig, PromptFieldConfig,
    ShellCommandConfig,
};
use crate::{EventContext, EventKind, FakeClock, FileRef, StaticWorkspace};

/// The instant every test clock is frozen at.
pub const TEST_NOW: &str = "2024-03-05T14:07:09+02:00";

pub fn test_clock() -> FakeClock {
    FakeClock::at(TEST_NOW)
        .unwrap_or_else(|| FakeClock::new(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset()))
}

/// Workspace rooted at `/vault` with `active` focused.
pub fn workspace_with_file(active: &str) -> StaticWorkspace {
    StaticWorkspace::new("/vault").with_active_file(active)
}

pub fn empty_workspace() -> StaticWorkspace {
    StaticWorkspace::new("/vault")
}

pub fn file_event(kind: EventKind, path: &str) -> EventContext {
    EventContext::new(kind).with_subject(FileRef::new(path))
}

pub fn custom_variable(id: &str, name: &str) -> CustomVariableConfig {
    CustomVariableConfig {
        id: id.into(),
        name: name.to_string(),
        description: String::new(),
    }
}

/// Prompt with one required field per target custom variable id.
pub fn prompt(id: &str, targets: &[&str]) -> PromptConfig {
    PromptConfig {
        id: id.into(),
        title: format!("Prompt {id}"),
        description: String::new(),
        fields: targets
            .iter()
            .map(|target| PromptFieldConfig {
                label: format!("Value for {target}"),
                description: String::new(),
                default_value: String::new(),
                target_variable: (*target).into(),
                required: true,
            })
            .collect(),
    }
}

pub fn prompt_preaction(prompt_id: &str, enabled: bool) -> PreactionConfig {
    PreactionConfig {
        enabled,
        kind: PreactionKind::Prompt {
            prompt_id: prompt_id.into(),
        },
    }
}

pub fn shell_command(id: &str, command: &str, alias: &str) -> ShellCommandConfig {
    let mut config = ShellCommandConfig::new(id, command);
    config.alias = alias.to_string();
    config
}
