// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shellcmd-parser: placeholder tokenizer, multi-pass parsing processes,
//! preactions and command preparation

mod command;
mod execution;
mod host;
mod preaction;
pub mod prompt;
mod process;
mod span;
mod tokenizer;

#[cfg(test)]
mod test_helpers;

pub use command::{ShellCommand, ALIAS_TARGET, SHELL_COMMAND_TARGET};
pub use execution::{prepare, Preparation, PreparedCommand};
pub use host::{Host, HostDeps, HostError};
pub use preaction::{Preaction, PreactionError, PromptPreaction};
pub use process::{ParsingProcess, ParsingResult, ProcessError, ProcessState};
pub use prompt::{PromptChannel, PromptError};
pub use span::Span;
pub use tokenizer::{
    scan, PlaceholderMatch, Placeholders, SyntaxError, SyntaxErrorKind, Token, Tokenizer,
};

#[cfg(any(test, feature = "test-support"))]
pub use prompt::FakePromptChannel;
