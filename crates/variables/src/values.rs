// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Values assigned to custom variables

use parking_lot::Mutex;
use shellcmd_core::CustomVariableId;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared store written by preactions and read by custom variables.
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct CustomVariableValues {
    inner: Arc<Mutex<HashMap<CustomVariableId, String>>>,
}

impl CustomVariableValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, id: CustomVariableId, value: impl Into<String>) {
        self.inner.lock().insert(id, value.into());
    }

    pub fn get(&self, id: &CustomVariableId) -> Option<String> {
        self.inner.lock().get(id).cloned()
    }

    pub fn remove(&self, id: &CustomVariableId) -> Option<String> {
        self.inner.lock().remove(id)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
