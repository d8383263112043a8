// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shellcmd-core: configuration records and host state shared by the
//! variable engine and the command-line front end

pub mod clock;
pub mod config;
pub mod event;
pub mod id;
pub mod platform;
pub mod workspace;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, SystemClock};
pub use config::{
    ConfigError, CustomVariableConfig, EventConfig, PlatformCommands, PlatformShells,
    PreactionConfig, PreactionKind, PromptConfig, PromptFieldConfig, Settings,
    ShellCommandConfig, VariableDefaultValue,
};
pub use event::{EventContext, EventKind, UnknownEvent};
pub use id::{CustomVariableId, IdGen, PromptId, SequentialIdGen, ShellCommandId, UuidIdGen};
pub use platform::Platform;
pub use workspace::{FileRef, StaticWorkspace, Workspace};

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
