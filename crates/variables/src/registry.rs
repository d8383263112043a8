// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Every variable known to the host: built-ins plus custom variables

use crate::builtin;
use crate::custom::{placeholder_name, CustomVariable};
use crate::set::VariableSet;
use crate::variable::Variable;
use regex::Regex;
use shellcmd_core::{CustomVariableConfig, CustomVariableId, IdGen};
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::info;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("constant regex pattern is valid"));

/// Errors from creating or editing custom variables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomVariableError {
    #[error("The name {{{{_{0}}}}} does not meet the naming requirements.")]
    InvalidName(String),
    #[error("The name {{{{_{0}}}}} is already reserved.")]
    DuplicateName(String),
    #[error("custom variable not found: {0}")]
    NotFound(CustomVariableId),
}

/// Process-scoped registry of variables.
///
/// Built-ins are fixed at construction. Custom variables are kept as
/// configuration records and turned into [`CustomVariable`]s whenever a
/// snapshot is taken, so renames show up in the next parsing process.
pub struct VariableRegistry {
    builtins: Vec<Arc<dyn Variable>>,
    custom: Vec<CustomVariableConfig>,
    ids: Arc<dyn IdGen>,
}

impl VariableRegistry {
    pub fn new(ids: Arc<dyn IdGen>) -> Self {
        Self {
            builtins: builtin::all(),
            custom: Vec::new(),
            ids,
        }
    }

    /// Load configured custom variables, validating each name in order.
    pub fn with_custom_variables(
        mut self,
        configs: impl IntoIterator<Item = CustomVariableConfig>,
    ) -> Result<Self, CustomVariableError> {
        for config in configs {
            self.validate_name(&config.name, None)?;
            self.custom.push(config);
        }
        Ok(self)
    }

    pub fn builtins(&self) -> &[Arc<dyn Variable>] {
        &self.builtins
    }

    pub fn custom_variables(&self) -> &[CustomVariableConfig] {
        &self.custom
    }

    pub fn custom_variable(&self, id: &CustomVariableId) -> Option<&CustomVariableConfig> {
        self.custom.iter().find(|c| &c.id == id)
    }

    /// All variables as they are right now.
    ///
    /// Built-ins come first, so they win over a custom variable whose
    /// placeholder name happens to collide.
    pub fn snapshot(&self) -> VariableSet {
        let mut set: VariableSet = self.builtins.iter().cloned().collect();
        for config in &self.custom {
            set.insert(Arc::new(CustomVariable::new(config)));
        }
        set
    }

    /// Custom variables with the given ids; unknown ids are ignored.
    pub fn custom_variable_set<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a CustomVariableId>,
    ) -> VariableSet {
        ids.into_iter()
            .filter_map(|id| self.custom_variable(id))
            .map(|config| Arc::new(CustomVariable::new(config)) as Arc<dyn Variable>)
            .collect()
    }

    /// Add a custom variable named after the first free sequential number.
    pub fn create_custom_variable(&mut self) -> &CustomVariableConfig {
        let mut number = 1_u64;
        while self.is_duplicate(&number.to_string(), None) {
            number += 1;
        }
        let config = CustomVariableConfig {
            id: CustomVariableId::new(self.ids.next()),
            name: number.to_string(),
            description: String::new(),
        };
        info!(id = %config.id, name = %config.name, "custom variable created");
        let index = self.custom.len();
        self.custom.push(config);
        &self.custom[index]
    }

    pub fn rename_custom_variable(
        &mut self,
        id: &CustomVariableId,
        name: &str,
    ) -> Result<(), CustomVariableError> {
        self.validate_name(name, Some(id))?;
        let config = self.find_mut(id)?;
        info!(id = %id, from = %config.name, to = name, "custom variable renamed");
        config.name = name.to_string();
        Ok(())
    }

    pub fn describe_custom_variable(
        &mut self,
        id: &CustomVariableId,
        description: &str,
    ) -> Result<(), CustomVariableError> {
        self.find_mut(id)?.description = description.to_string();
        Ok(())
    }

    pub fn delete_custom_variable(
        &mut self,
        id: &CustomVariableId,
    ) -> Result<CustomVariableConfig, CustomVariableError> {
        let index = self
            .custom
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CustomVariableError::NotFound(id.clone()))?;
        let removed = self.custom.remove(index);
        info!(id = %id, name = %removed.name, "custom variable deleted");
        Ok(removed)
    }

    /// Check `name` against the naming rules.
    ///
    /// Uniqueness ignores case, even though placeholders match case-sensitively.
    pub fn validate_name(
        &self,
        name: &str,
        owner: Option<&CustomVariableId>,
    ) -> Result<(), CustomVariableError> {
        if !NAME_PATTERN.is_match(name) {
            return Err(CustomVariableError::InvalidName(name.to_string()));
        }
        if self.is_duplicate(name, owner) {
            return Err(CustomVariableError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Placeholder name of the custom variable with `id`.
    pub fn placeholder_name(&self, id: &CustomVariableId) -> Option<String> {
        self.custom_variable(id).map(|c| placeholder_name(&c.name))
    }

    fn is_duplicate(&self, name: &str, owner: Option<&CustomVariableId>) -> bool {
        let name = name.to_lowercase();
        self.custom
            .iter()
            .filter(|c| Some(&c.id) != owner)
            .any(|c| c.name.to_lowercase() == name)
    }

    fn find_mut(
        &mut self,
        id: &CustomVariableId,
    ) -> Result<&mut CustomVariableConfig, CustomVariableError> {
        self.custom
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| CustomVariableError::NotFound(id.clone()))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
