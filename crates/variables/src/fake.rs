// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake variable for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::grammar::{Arguments, Parameter};
use crate::variable::{ResolveContext, Variable, VariableError};
use async_trait::async_trait;
use shellcmd_core::EventKind;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Variable returning a canned value and counting how often it was asked.
///
/// When it declares parameters, the bound arguments are appended to the
/// value as `value(arg1,arg2)` so tests can see what was passed.
#[derive(Clone)]
pub struct FakeVariable {
    name: String,
    value: Option<String>,
    parameters: Vec<Parameter>,
    supported_events: Option<Vec<EventKind>>,
    calls: Arc<AtomicUsize>,
}

impl FakeVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            parameters: Vec::new(),
            supported_events: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A variable that always fails with [`VariableError::Unavailable`].
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            value: None,
            ..Self::new(name, "")
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_supported_events(mut self, events: Vec<EventKind>) -> Self {
        self.supported_events = Some(events);
        self
    }

    /// Number of times `generate_value` ran, shared across clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Variable for FakeVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Fake variable"
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn supported_events(&self) -> Option<&[EventKind]> {
        self.supported_events.as_deref()
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        _ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let value = self.value.clone().ok_or_else(|| VariableError::Unavailable {
            variable: self.name.clone(),
            reason: "fake failure".to_string(),
        })?;
        if self.parameters.is_empty() {
            return Ok(value);
        }
        let bound: Vec<&str> = self
            .parameters
            .iter()
            .filter_map(|p| args.get(p.name))
            .collect();
        Ok(format!("{}({})", value, bound.join(",")))
    }
}
