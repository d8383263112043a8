// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Steps that run between the first and the remaining parsing passes

use crate::prompt::{PromptChannel, PromptError};
use async_trait::async_trait;
use shellcmd_core::{PromptConfig, PromptId};
use shellcmd_variables::{ResolveContext, VariableSet};
use thiserror::Error;
use tracing::info;

/// Errors from executing a preaction
#[derive(Debug, Error)]
pub enum PreactionError {
    #[error("prompt not found: {0}")]
    PromptNotFound(PromptId),
    #[error("{prompt}: field '{field}' is required")]
    RequiredFieldEmpty { prompt: String, field: String },
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// A step that makes some variables resolvable.
///
/// Effects reach the dependent variables through shared host state (the
/// custom variable value store), not through the return value.
#[async_trait]
pub trait Preaction: Send + Sync {
    /// Short type name, e.g. `prompt`.
    fn kind(&self) -> &'static str;

    /// Variables that can only be resolved after this preaction ran.
    fn dependent_variables(&self) -> &VariableSet;

    /// Run the step. `Ok(false)` means the user cancelled.
    async fn execute(
        &self,
        ctx: &ResolveContext<'_>,
        prompts: &dyn PromptChannel,
    ) -> Result<bool, PreactionError>;
}

/// Shows a prompt and stores the answers in its target custom variables
pub struct PromptPreaction {
    prompt_id: PromptId,
    prompt: Option<PromptConfig>,
    dependent: VariableSet,
}

impl PromptPreaction {
    /// `prompt` is `None` when the configured prompt no longer exists;
    /// executing then fails.
    pub fn new(prompt_id: PromptId, prompt: Option<PromptConfig>, dependent: VariableSet) -> Self {
        Self {
            prompt_id,
            prompt,
            dependent,
        }
    }

    pub fn prompt_id(&self) -> &PromptId {
        &self.prompt_id
    }
}

#[async_trait]
impl Preaction for PromptPreaction {
    fn kind(&self) -> &'static str {
        "prompt"
    }

    fn dependent_variables(&self) -> &VariableSet {
        &self.dependent
    }

    async fn execute(
        &self,
        ctx: &ResolveContext<'_>,
        prompts: &dyn PromptChannel,
    ) -> Result<bool, PreactionError> {
        let prompt = self
            .prompt
            .as_ref()
            .ok_or_else(|| PreactionError::PromptNotFound(self.prompt_id.clone()))?;

        let Some(answers) = prompts.ask(prompt).await? else {
            info!(prompt = %prompt.id, "prompt cancelled");
            return Ok(false);
        };

        let mut values = Vec::with_capacity(prompt.fields.len());
        for (index, field) in prompt.fields.iter().enumerate() {
            let answer = answers.get(index).cloned().unwrap_or_default();
            if field.required && answer.is_empty() {
                return Err(PreactionError::RequiredFieldEmpty {
                    prompt: prompt.title.clone(),
                    field: field.label.clone(),
                });
            }
            values.push((field.target_variable.clone(), answer));
        }
        // Nothing is stored unless every field was valid
        for (target, value) in values {
            ctx.values().set(target, value);
        }
        info!(prompt = %prompt.id, fields = prompt.fields.len(), "prompt answered");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "preaction_tests.rs"]
mod tests;
