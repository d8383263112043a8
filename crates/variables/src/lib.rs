// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shellcmd-variables: the variable capability, built-in and custom
//! variables, variable sets and the registry that owns them

pub mod builtin;
mod custom;
mod grammar;
mod registry;
mod set;
mod values;
mod variable;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use custom::{placeholder_name, CustomVariable, CUSTOM_VARIABLE_PREFIX};
pub use grammar::{bind_arguments, ArgumentError, Arguments, Parameter, ParameterKind};
pub use registry::{CustomVariableError, VariableRegistry};
pub use set::VariableSet;
pub use values::CustomVariableValues;
pub use variable::{
    is_available_in, resolve, usage, HostState, ResolveContext, Variable, VariableError,
};

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeVariable;
