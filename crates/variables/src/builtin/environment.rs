// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `{{environment:NAME}}`

use crate::grammar::{Arguments, Parameter};
use crate::variable::{ResolveContext, Variable, VariableError};
use async_trait::async_trait;

const VARIABLE: Parameter = Parameter::text("variable");

/// Reads a variable from the process environment.
pub struct Environment;

#[async_trait]
impl Variable for Environment {
    fn name(&self) -> &str {
        "environment"
    }

    fn description(&self) -> &str {
        "Value of an environment variable of the host process. Fails if the variable is not set."
    }

    fn parameters(&self) -> &[Parameter] {
        &[VARIABLE]
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        _ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let name = args.get("variable").unwrap_or_default();
        std::env::var(name).map_err(|_| VariableError::NotSet {
            variable: self.name().to_string(),
            name: name.to_string(),
        })
    }
}
