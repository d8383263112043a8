// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The top-level context: settings, variables, host state and commands

use crate::command::ShellCommand;
use crate::prompt::PromptChannel;
use indexmap::IndexMap;
use shellcmd_core::{
    Clock, ConfigError, CustomVariableConfig, CustomVariableId, IdGen, Settings, ShellCommandId,
    Workspace,
};
use shellcmd_variables::{CustomVariableError, CustomVariableValues, HostState, VariableRegistry};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors from building or editing the host
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    CustomVariable(#[from] CustomVariableError),
    #[error("shell command not found: {0}")]
    CommandNotFound(String),
}

/// External collaborators of a [`Host`]
#[derive(Clone)]
pub struct HostDeps {
    pub workspace: Arc<dyn Workspace>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGen>,
    pub prompts: Arc<dyn PromptChannel>,
}

/// Process-scoped state shared by every parsing process.
///
/// Built once at startup from validated settings. Custom variable edits go
/// through the host so that settings, registry and cached preactions stay
/// in sync.
pub struct Host {
    settings: Settings,
    registry: VariableRegistry,
    state: HostState,
    prompts: Arc<dyn PromptChannel>,
    commands: IndexMap<ShellCommandId, ShellCommand>,
}

impl Host {
    pub fn new(settings: Settings, deps: HostDeps) -> Result<Self, HostError> {
        settings.validate()?;
        let registry = VariableRegistry::new(deps.ids)
            .with_custom_variables(settings.custom_variables.iter().cloned())?;
        let commands = settings
            .shell_commands
            .iter()
            .map(|config| (config.id.clone(), ShellCommand::new(config.clone())))
            .collect();
        let state = HostState::new(deps.workspace, deps.clock, CustomVariableValues::new());
        info!(
            commands = settings.shell_commands.len(),
            custom_variables = settings.custom_variables.len(),
            "host ready"
        );
        Ok(Self {
            settings,
            registry,
            state,
            prompts: deps.prompts,
            commands,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn state(&self) -> &HostState {
        &self.state
    }

    pub fn prompts(&self) -> &dyn PromptChannel {
        self.prompts.as_ref()
    }

    pub fn commands(&self) -> impl Iterator<Item = &ShellCommand> {
        self.commands.values()
    }

    pub fn command(&self, id: &str) -> Option<&ShellCommand> {
        self.commands.get(id)
    }

    pub fn require_command(&self, id: &str) -> Result<&ShellCommand, HostError> {
        self.command(id)
            .ok_or_else(|| HostError::CommandNotFound(id.to_string()))
    }

    /// Apply `edit` to a command and store the result back into the settings.
    pub fn edit_command<F>(&mut self, id: &str, edit: F) -> Result<(), HostError>
    where
        F: FnOnce(&mut ShellCommand),
    {
        let command = self
            .commands
            .get_mut(id)
            .ok_or_else(|| HostError::CommandNotFound(id.to_string()))?;
        edit(command);
        let updated = command.config().clone();
        if let Some(config) = self.settings.shell_commands.iter_mut().find(|c| c.id == id) {
            *config = updated;
        }
        Ok(())
    }

    // --- custom variables ---

    pub fn create_custom_variable(&mut self) -> CustomVariableConfig {
        let config = self.registry.create_custom_variable().clone();
        self.sync_custom_variables();
        config
    }

    pub fn rename_custom_variable(
        &mut self,
        id: &CustomVariableId,
        name: &str,
    ) -> Result<(), HostError> {
        self.registry.rename_custom_variable(id, name)?;
        self.sync_custom_variables();
        Ok(())
    }

    pub fn describe_custom_variable(
        &mut self,
        id: &CustomVariableId,
        description: &str,
    ) -> Result<(), HostError> {
        self.registry.describe_custom_variable(id, description)?;
        self.sync_custom_variables();
        Ok(())
    }

    /// Delete a custom variable together with its value and every prompt
    /// field that targets it.
    pub fn delete_custom_variable(
        &mut self,
        id: &CustomVariableId,
    ) -> Result<CustomVariableConfig, HostError> {
        let removed = self.registry.delete_custom_variable(id)?;
        self.state.values().remove(id);
        for prompt in &mut self.settings.prompts {
            prompt.fields.retain(|field| &field.target_variable != id);
        }
        self.sync_custom_variables();
        Ok(removed)
    }

    /// Copy custom variables back into the settings and drop cached
    /// preactions, whose variable sets may now be stale.
    fn sync_custom_variables(&mut self) {
        self.settings.custom_variables = self.registry.custom_variables().to_vec();
        for command in self.commands.values_mut() {
            command.reset_preactions();
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
