// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel for asking the user to fill in prompts

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePromptChannel;

use async_trait::async_trait;
use shellcmd_core::PromptConfig;
use thiserror::Error;

/// Errors from prompt channels
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt input failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt channel closed")]
    Closed,
}

/// Asks the user for prompt field values
#[async_trait]
pub trait PromptChannel: Send + Sync {
    /// Show `prompt` and wait for an answer.
    ///
    /// Returns one value per field, in field order, or `None` when the user
    /// cancelled.
    async fn ask(&self, prompt: &PromptConfig) -> Result<Option<Vec<String>>, PromptError>;
}
