// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake prompt channel for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PromptChannel, PromptError};
use async_trait::async_trait;
use parking_lot::Mutex;
use shellcmd_core::{PromptConfig, PromptId};
use std::collections::VecDeque;
use std::sync::Arc;

struct FakePromptState {
    answers: VecDeque<Option<Vec<String>>>,
    asked: Vec<PromptId>,
}

/// Prompt channel that replays queued answers and records what was asked.
///
/// When the queue is empty every prompt is cancelled.
#[derive(Clone)]
pub struct FakePromptChannel {
    inner: Arc<Mutex<FakePromptState>>,
}

impl Default for FakePromptChannel {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePromptState {
                answers: VecDeque::new(),
                asked: Vec::new(),
            })),
        }
    }
}

impl FakePromptChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next prompt.
    pub fn answer(&self, values: &[&str]) -> &Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        self.inner.lock().answers.push_back(Some(values));
        self
    }

    /// Queue a cancellation for the next prompt.
    pub fn cancel(&self) -> &Self {
        self.inner.lock().answers.push_back(None);
        self
    }

    /// Ids of the prompts shown so far
    pub fn asked(&self) -> Vec<PromptId> {
        self.inner.lock().asked.clone()
    }
}

#[async_trait]
impl PromptChannel for FakePromptChannel {
    async fn ask(&self, prompt: &PromptConfig) -> Result<Option<Vec<String>>, PromptError> {
        let mut inner = self.inner.lock();
        inner.asked.push(prompt.id.clone());
        Ok(inner.answers.pop_front().flatten())
    }
}
