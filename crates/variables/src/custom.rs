// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User defined variables whose values are assigned by preactions

use crate::grammar::Arguments;
use crate::variable::{ResolveContext, Variable, VariableError};
use async_trait::async_trait;
use shellcmd_core::{CustomVariableConfig, CustomVariableId};

/// Prefix separating custom variable placeholders from built-ins.
pub const CUSTOM_VARIABLE_PREFIX: &str = "_";

/// `{{_name}}`: reads the value stored under the variable's id.
///
/// Resolution fails with [`VariableError::NoValue`] until something, usually
/// a prompt preaction, has written a value.
#[derive(Debug, Clone)]
pub struct CustomVariable {
    id: CustomVariableId,
    name: String,
    description: String,
}

impl CustomVariable {
    pub fn new(config: &CustomVariableConfig) -> Self {
        Self {
            id: config.id.clone(),
            name: placeholder_name(&config.name),
            description: config.description.clone(),
        }
    }

    pub fn id(&self) -> &CustomVariableId {
        &self.id
    }
}

/// Placeholder name for a configured custom variable name, e.g. `_target`.
pub fn placeholder_name(configured: &str) -> String {
    format!("{CUSTOM_VARIABLE_PREFIX}{configured}")
}

#[async_trait]
impl Variable for CustomVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn identifier(&self) -> &str {
        self.id.as_str()
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn generate_value(
        &self,
        _args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        ctx.values()
            .get(&self.id)
            .ok_or_else(|| VariableError::NoValue {
                variable: self.name.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::CustomVariableValues;
    use crate::variable::HostState;
    use shellcmd_core::test_support::{custom_variable, empty_workspace, test_clock};
    use std::sync::Arc;

    #[test]
    fn name_is_prefixed() {
        let variable = CustomVariable::new(&custom_variable("cv-1", "target"));
        assert_eq!(variable.name(), "_target");
        assert_eq!(variable.id(), "cv-1");
    }

    #[test]
    fn identifier_is_the_id() {
        let variable = CustomVariable::new(&custom_variable("cv-1", "target"));
        assert_eq!(variable.identifier(), "cv-1");
    }

    #[tokio::test]
    async fn reads_assigned_value() {
        let values = CustomVariableValues::new();
        let state = HostState::new(Arc::new(empty_workspace()), Arc::new(test_clock()), values.clone());
        let variable = CustomVariable::new(&custom_variable("cv-1", "target"));
        let ctx = ResolveContext::new(&state, None);

        let result = variable.generate_value(&Arguments::default(), &ctx).await;
        assert_eq!(
            result,
            Err(VariableError::NoValue {
                variable: "_target".to_string()
            })
        );

        values.set("cv-1".into(), "");
        let result = variable.generate_value(&Arguments::default(), &ctx).await;
        assert_eq!(result, Ok(String::new()));
    }
}
