// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host construction for unit tests

use crate::host::{Host, HostDeps};
use crate::prompt::FakePromptChannel;
use shellcmd_core::test_support::test_clock;
use shellcmd_core::{SequentialIdGen, Settings, StaticWorkspace};
use std::sync::Arc;

pub(crate) fn host(settings: Settings, workspace: StaticWorkspace) -> (Host, FakePromptChannel) {
    let prompts = FakePromptChannel::new();
    let deps = HostDeps {
        workspace: Arc::new(workspace),
        clock: Arc::new(test_clock()),
        ids: Arc::new(SequentialIdGen::new("cv")),
        prompts: Arc::new(prompts.clone()),
    };
    let host = Host::new(settings, deps).unwrap();
    (host, prompts)
}
