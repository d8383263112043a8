// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use shellcmd_core::test_support::test_clock;
use shellcmd_core::{SequentialIdGen, Settings, StaticWorkspace};
use shellcmd_parser::{FakePromptChannel, Host, HostDeps};
use std::sync::Arc;

/// Host over `workspace` with a frozen clock and no prompt answers
pub(crate) fn host(settings: Settings, workspace: StaticWorkspace) -> Host {
    let deps = HostDeps {
        workspace: Arc::new(workspace),
        clock: Arc::new(test_clock()),
        ids: Arc::new(SequentialIdGen::new("cv")),
        prompts: Arc::new(FakePromptChannel::new()),
    };
    Host::new(settings, deps).unwrap()
}
