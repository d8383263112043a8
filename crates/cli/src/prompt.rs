// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-based prompt channel: questions on stderr, answers from a reader

use async_trait::async_trait;
use shellcmd_core::PromptConfig;
use shellcmd_parser::{PromptChannel, PromptError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Reads one line per prompt field.
///
/// An empty line takes the field's default value; end of input cancels.
pub struct LinePrompt<R> {
    lines: Mutex<Lines<R>>,
}

impl LinePrompt<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> PromptChannel for LinePrompt<R> {
    async fn ask(&self, prompt: &PromptConfig) -> Result<Option<Vec<String>>, PromptError> {
        let mut lines = self.lines.lock().await;
        eprintln!("{}", prompt.title);
        if !prompt.description.is_empty() {
            eprintln!("{}", prompt.description);
        }

        let mut answers = Vec::with_capacity(prompt.fields.len());
        for field in &prompt.fields {
            if field.default_value.is_empty() {
                eprint!("{}: ", field.label);
            } else {
                eprint!("{} [{}]: ", field.label, field.default_value);
            }
            let Some(line) = lines.next_line().await? else {
                eprintln!();
                tracing::debug!(prompt = %prompt.id, "input closed, cancelling");
                return Ok(None);
            };
            let answer = line.trim_end_matches('\r');
            if answer.is_empty() {
                answers.push(field.default_value.clone());
            } else {
                answers.push(answer.to_string());
            }
        }
        Ok(Some(answers))
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
