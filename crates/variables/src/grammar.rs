// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter grammars and argument validation

use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur while binding placeholder arguments to parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("{{{{{variable}}}}} requires argument '{parameter}'")]
    Missing { variable: String, parameter: String },
    #[error("{{{{{variable}}}}} accepts at most {max} argument(s), got {found}")]
    TooMany {
        variable: String,
        max: usize,
        found: usize,
    },
    #[error("{{{{{variable}}}}}: '{value}' is not a valid {parameter}, expected one of: {allowed}")]
    InvalidOption {
        variable: String,
        parameter: String,
        value: String,
        allowed: String,
    },
}

/// What values a parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Any text
    Text,
    /// One of a fixed list of values
    Options(&'static [&'static str]),
}

/// One argument slot of a variable, in placeholder order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub required: bool,
}

impl Parameter {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ParameterKind::Text,
            required: true,
        }
    }

    pub const fn options(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: ParameterKind::Options(options),
            required: true,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// How the slot is written in help output, e.g. `with-dot|no-dot`.
    pub fn usage(&self) -> String {
        let body = match self.kind {
            ParameterKind::Text => self.name.to_string(),
            ParameterKind::Options(options) => options.join("|"),
        };
        if self.required {
            body
        } else {
            format!("[{body}]")
        }
    }
}

/// Arguments bound to their parameter names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: IndexMap<&'static str, String>,
}

impl Arguments {
    pub fn get(&self, parameter: &str) -> Option<&str> {
        self.values.get(parameter).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Bind raw placeholder arguments to `parameters`.
///
/// Arguments are positional. Missing required arguments, surplus arguments
/// and values outside an option list are rejected.
pub fn bind_arguments(
    variable: &str,
    parameters: &[Parameter],
    raw: &[String],
) -> Result<Arguments, ArgumentError> {
    if raw.len() > parameters.len() {
        return Err(ArgumentError::TooMany {
            variable: variable.to_string(),
            max: parameters.len(),
            found: raw.len(),
        });
    }

    let mut values = IndexMap::new();
    for (index, parameter) in parameters.iter().enumerate() {
        let Some(value) = raw.get(index) else {
            if parameter.required {
                return Err(ArgumentError::Missing {
                    variable: variable.to_string(),
                    parameter: parameter.name.to_string(),
                });
            }
            continue;
        };
        if let ParameterKind::Options(options) = parameter.kind {
            if !options.contains(&value.as_str()) {
                return Err(ArgumentError::InvalidOption {
                    variable: variable.to_string(),
                    parameter: parameter.name.to_string(),
                    value: value.clone(),
                    allowed: options.join(", "),
                });
            }
        }
        values.insert(parameter.name, value.clone());
    }
    Ok(Arguments { values })
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
