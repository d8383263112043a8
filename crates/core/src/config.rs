// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file format
//!
//! Everything the host persists about shell commands, prompts and custom
//! variables. The placeholder syntax inside command strings is part of this
//! persisted format.

use crate::event::EventKind;
use crate::id::{CustomVariableId, PromptId, ShellCommandId};
use crate::platform::Platform;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate shell command id: {0}")]
    DuplicateShellCommand(ShellCommandId),
    #[error("duplicate prompt id: {0}")]
    DuplicatePrompt(PromptId),
    #[error("duplicate custom variable id: {0}")]
    DuplicateCustomVariable(CustomVariableId),
    #[error("prompt {prompt} targets unknown custom variable {variable}")]
    UnknownPromptTarget {
        prompt: PromptId,
        variable: CustomVariableId,
    },
    #[error("shell command {command} enables unknown event: {code}")]
    UnknownEvent {
        command: ShellCommandId,
        code: String,
    },
}

/// Root of the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shell used by commands that do not name one
    pub default_shells: PlatformShells,
    pub custom_variables: Vec<CustomVariableConfig>,
    pub prompts: Vec<PromptConfig>,
    pub shell_commands: Vec<ShellCommandConfig>,
}

impl Settings {
    /// Parse and validate a TOML settings document.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading settings");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Check cross references and uniqueness constraints.
    ///
    /// Custom variable *names* are validated by the variable registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut command_ids = HashSet::new();
        for command in &self.shell_commands {
            if !command_ids.insert(&command.id) {
                return Err(ConfigError::DuplicateShellCommand(command.id.clone()));
            }
            for code in command.events.keys() {
                if code.parse::<EventKind>().is_err() {
                    return Err(ConfigError::UnknownEvent {
                        command: command.id.clone(),
                        code: code.clone(),
                    });
                }
            }
        }

        let mut variable_ids = HashSet::new();
        for variable in &self.custom_variables {
            if !variable_ids.insert(&variable.id) {
                return Err(ConfigError::DuplicateCustomVariable(variable.id.clone()));
            }
        }

        let mut prompt_ids = HashSet::new();
        for prompt in &self.prompts {
            if !prompt_ids.insert(&prompt.id) {
                return Err(ConfigError::DuplicatePrompt(prompt.id.clone()));
            }
            for field in &prompt.fields {
                if !variable_ids.contains(&field.target_variable) {
                    return Err(ConfigError::UnknownPromptTarget {
                        prompt: prompt.id.clone(),
                        variable: field.target_variable.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn shell_command(&self, id: &str) -> Option<&ShellCommandConfig> {
        self.shell_commands.iter().find(|c| c.id == id)
    }

    pub fn prompt(&self, id: &PromptId) -> Option<&PromptConfig> {
        self.prompts.iter().find(|p| &p.id == id)
    }

    /// Shell for `platform` from the settings, falling back to the platform default.
    pub fn default_shell(&self, platform: Platform) -> &str {
        self.default_shells
            .get(platform)
            .unwrap_or(platform.fallback_shell())
    }
}

/// Optional per-platform shell names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformShells {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
}

impl PlatformShells {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Linux => self.linux.as_deref(),
            Platform::Macos => self.macos.as_deref(),
            Platform::Windows => self.windows.as_deref(),
        }
    }
}

/// Command strings: one generic version plus optional per-platform overrides.
///
/// Accepts either a plain string (generic only) or a table:
/// - `command = "echo hi"`
/// - `command = { default = "echo hi", windows = "Write-Output hi" }`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlatformCommands {
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
}

impl PlatformCommands {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            ..Self::default()
        }
    }

    /// The platform specific command, or the generic one when none is defined.
    pub fn for_platform(&self, platform: Platform) -> &str {
        let specific = match platform {
            Platform::Linux => self.linux.as_deref(),
            Platform::Macos => self.macos.as_deref(),
            Platform::Windows => self.windows.as_deref(),
        };
        specific.unwrap_or(&self.default)
    }
}

impl<'de> Deserialize<'de> for PlatformCommands {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Table {
            default: String,
            linux: Option<String>,
            macos: Option<String>,
            windows: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Generic(String),
            Table(Table),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Generic(default) => PlatformCommands::new(default),
            Repr::Table(t) => PlatformCommands {
                default: t.default,
                linux: t.linux,
                macos: t.macos,
                windows: t.windows,
            },
        })
    }
}

/// One configured shell command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellCommandConfig {
    pub id: ShellCommandId,
    pub command: PlatformCommands,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub shells: PlatformShells,
    #[serde(default)]
    pub confirm_execution: bool,
    #[serde(default)]
    pub ignore_error_codes: Vec<i32>,
    #[serde(default)]
    pub preactions: Vec<PreactionConfig>,
    /// Event configurations keyed by event code
    #[serde(default)]
    pub events: BTreeMap<String, EventConfig>,
    /// Fallbacks used when a variable fails, keyed by variable identifier:
    /// the name for built-ins and the id for custom variables
    #[serde(default)]
    pub variable_default_values: BTreeMap<String, VariableDefaultValue>,
}

impl ShellCommandConfig {
    pub fn new(id: impl Into<ShellCommandId>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            command: PlatformCommands::new(command),
            alias: String::new(),
            shells: PlatformShells::default(),
            confirm_execution: false,
            ignore_error_codes: Vec::new(),
            preactions: Vec::new(),
            events: BTreeMap::new(),
            variable_default_values: BTreeMap::new(),
        }
    }
}

/// Per-event settings of a shell command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Event specific settings, kept verbatim
    #[serde(flatten)]
    pub settings: toml::Table,
}

impl EventConfig {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            settings: toml::Table::new(),
        }
    }
}

/// What to substitute when a variable cannot produce a value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum VariableDefaultValue {
    /// Report the failure (the default behavior)
    #[default]
    ShowErrors,
    /// Substitute an empty string
    EmptyValue,
    /// Substitute the given text
    Value { value: String },
}

/// A step that runs before the second parsing pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreactionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(flatten)]
    pub kind: PreactionKind,
}

fn default_true() -> bool {
    true
}

/// Type specific preaction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PreactionKind {
    /// Ask the user for custom variable values
    Prompt { prompt_id: PromptId },
}

/// A user-defined variable, addressed as `{{_name}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomVariableConfig {
    pub id: CustomVariableId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A dialog that assigns values to custom variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub id: PromptId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<PromptFieldConfig>,
}

/// One input of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFieldConfig {
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_value: String,
    pub target_variable: CustomVariableId,
    #[serde(default)]
    pub required: bool,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
