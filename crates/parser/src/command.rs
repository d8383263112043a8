// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A configured shell command and the parsing processes created for it

use crate::host::Host;
use crate::preaction::{Preaction, PromptPreaction};
use crate::process::ParsingProcess;
use shellcmd_core::{
    EventConfig, EventContext, EventKind, Platform, PreactionConfig, PreactionKind, Settings,
    ShellCommandConfig, ShellCommandId,
};
use shellcmd_variables::VariableSet;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Target key of the command text
pub const SHELL_COMMAND_TARGET: &str = "shell_command";
/// Target key of the alias
pub const ALIAS_TARGET: &str = "alias";

/// Runtime view of one [`ShellCommandConfig`].
///
/// Preactions are built on first use and cached; edits that change them
/// must go through this type (or call [`ShellCommand::reset_preactions`]).
#[derive(Clone)]
pub struct ShellCommand {
    config: ShellCommandConfig,
    preactions: OnceLock<Vec<Arc<dyn Preaction>>>,
}

impl ShellCommand {
    pub fn new(config: ShellCommandConfig) -> Self {
        Self {
            config,
            preactions: OnceLock::new(),
        }
    }

    pub fn id(&self) -> &ShellCommandId {
        &self.config.id
    }

    pub fn config(&self) -> &ShellCommandConfig {
        &self.config
    }

    /// Command text for the current platform.
    pub fn shell_command(&self) -> &str {
        self.shell_command_for(Platform::current())
    }

    pub fn shell_command_for(&self, platform: Platform) -> &str {
        self.config.command.for_platform(platform)
    }

    /// Shell for the current platform.
    pub fn shell<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.shell_for(settings, Platform::current())
    }

    /// The command's own shell, else the settings' default, else the
    /// platform fallback.
    pub fn shell_for<'a>(&'a self, settings: &'a Settings, platform: Platform) -> &'a str {
        self.config
            .shells
            .get(platform)
            .unwrap_or_else(|| settings.default_shell(platform))
    }

    pub fn alias(&self) -> &str {
        &self.config.alias
    }

    pub fn alias_or_shell_command(&self) -> &str {
        if self.config.alias.is_empty() {
            self.shell_command()
        } else {
            &self.config.alias
        }
    }

    pub fn confirm_execution(&self) -> bool {
        self.config.confirm_execution
    }

    pub fn ignore_error_codes(&self) -> &[i32] {
        &self.config.ignore_error_codes
    }

    // --- events ---

    pub fn is_event_enabled(&self, kind: EventKind) -> bool {
        self.config
            .events
            .get(kind.code())
            .is_some_and(|event| event.enabled)
    }

    /// Enabled events in declaration order of [`EventKind::ALL`].
    pub fn enabled_events(&self) -> Vec<EventKind> {
        EventKind::ALL
            .into_iter()
            .filter(|kind| self.is_event_enabled(*kind))
            .collect()
    }

    pub fn enable_event(&mut self, kind: EventKind) {
        self.config
            .events
            .entry(kind.code().to_string())
            .or_insert_with(EventConfig::enabled)
            .enabled = true;
    }

    /// Disable `kind`. Event specific settings are kept; an entry without
    /// any is removed.
    pub fn disable_event(&mut self, kind: EventKind) {
        let code = kind.code();
        let Some(event) = self.config.events.get_mut(code) else {
            return;
        };
        if event.settings.is_empty() {
            self.config.events.remove(code);
        } else {
            event.enabled = false;
        }
    }

    // --- preactions ---

    /// Enabled preactions, built on first use.
    pub fn preactions(&self, host: &Host) -> &[Arc<dyn Preaction>] {
        self.preactions
            .get_or_init(|| build_preactions(&self.config.preactions, host))
    }

    /// Drop the cached preactions so they are rebuilt on next use.
    pub fn reset_preactions(&mut self) {
        self.preactions = OnceLock::new();
    }

    pub fn add_preaction(&mut self, preaction: PreactionConfig) {
        self.config.preactions.push(preaction);
        self.reset_preactions();
    }

    /// Returns false if there is no preaction at `index`.
    pub fn set_preaction_enabled(&mut self, index: usize, enabled: bool) -> bool {
        let Some(preaction) = self.config.preactions.get_mut(index) else {
            return false;
        };
        preaction.enabled = enabled;
        self.reset_preactions();
        true
    }

    // --- variables ---

    /// Members of `all` that some enabled preaction makes resolvable.
    fn preaction_dependent_in(&self, all: &VariableSet, host: &Host) -> VariableSet {
        let dependent = self
            .preactions(host)
            .iter()
            .fold(VariableSet::new(), |set, preaction| {
                set.merge(preaction.dependent_variables())
            });
        all.iter()
            .filter(|variable| dependent.contains(variable.name()))
            .cloned()
            .collect()
    }

    /// Variables that depend on at least one enabled preaction.
    pub fn preaction_dependent_variables(&self, host: &Host) -> VariableSet {
        self.preaction_dependent_in(&host.registry().snapshot(), host)
    }

    /// Variables that depend on no enabled preaction.
    pub fn non_preaction_dependent_variables(&self, host: &Host) -> VariableSet {
        let all = host.registry().snapshot();
        all.subtract(&self.preaction_dependent_in(&all, host))
    }

    /// A process expanding the command and its alias.
    ///
    /// Pass 0 covers variables that need no preaction, pass 1 the rest. Both
    /// sets come from one registry snapshot.
    pub fn create_parsing_process(&self, host: &Host, event: Option<EventContext>) -> ParsingProcess {
        let all = host.registry().snapshot();
        let dependent = self.preaction_dependent_in(&all, host);
        let independent = all.subtract(&dependent);
        debug!(
            command = %self.config.id,
            independent = independent.len(),
            dependent = dependent.len(),
            "creating parsing process"
        );
        ParsingProcess::new(host.state().clone(), event, vec![independent, dependent])
            .with_default_values(self.config.variable_default_values.clone())
            .with_target(SHELL_COMMAND_TARGET, self.shell_command())
            .with_target(ALIAS_TARGET, self.alias())
    }

    /// Title for lists and menus.
    ///
    /// Runs only the first pass, so no preaction is triggered. Prefers the
    /// parsed alias, then the parsed command, then the raw text.
    pub async fn preview_title(&self, host: &Host) -> String {
        let mut process = self.create_parsing_process(host, None);
        if process.process().await.is_err() {
            return self.alias_or_shell_command().to_string();
        }
        let parsed = |key: &str| process.result(key).and_then(|r| r.parsed_content);
        if !self.alias().is_empty() {
            if let Some(alias) = parsed(ALIAS_TARGET) {
                return alias;
            }
        }
        parsed(SHELL_COMMAND_TARGET).unwrap_or_else(|| self.alias_or_shell_command().to_string())
    }
}

fn build_preactions(configs: &[PreactionConfig], host: &Host) -> Vec<Arc<dyn Preaction>> {
    configs
        .iter()
        .filter(|config| config.enabled)
        .map(|config| match &config.kind {
            PreactionKind::Prompt { prompt_id } => {
                let prompt = host.settings().prompt(prompt_id).cloned();
                let dependent = prompt
                    .as_ref()
                    .map(|p| {
                        host.registry()
                            .custom_variable_set(p.fields.iter().map(|f| &f.target_variable))
                    })
                    .unwrap_or_default();
                Arc::new(PromptPreaction::new(prompt_id.clone(), prompt, dependent))
                    as Arc<dyn Preaction>
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
