// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-pass parsing of templates.
//!
//! A [`ParsingProcess`] expands one or more named targets against an ordered
//! list of variable sets. Pass `i` resolves the placeholders whose variables
//! are in set `i`; placeholders of later sets are left untouched until their
//! pass. [`ParsingProcess::process`] runs pass 0 and
//! [`ParsingProcess::process_rest`] runs the remaining passes, leaving room
//! for preactions in between.

use crate::tokenizer::{PlaceholderMatch, Token, Tokenizer};
use indexmap::IndexMap;
use serde::Serialize;
use shellcmd_core::{EventContext, VariableDefaultValue};
use shellcmd_variables::{resolve, Arguments, HostState, ResolveContext, Variable, VariableError, VariableSet};
use std::collections::{BTreeMap, HashMap};
use std::mem;
use thiserror::Error;
use tracing::{debug, info};

/// Calling the pass methods out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("process() was already called")]
    AlreadyStarted,
    #[error("process_rest() called before process()")]
    NotStarted,
    #[error("parsing process has already finished")]
    AlreadyFinished,
}

/// Where a process is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "pass", rename_all = "kebab-case")]
pub enum ProcessState {
    Created,
    /// Waiting for the given pass; preactions may run now.
    PassPending(usize),
    Succeeded,
    Failed,
}

/// Outcome of one target, as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsingResult {
    pub original_content: String,
    /// The expansion so far; `None` once the target has failed.
    pub parsed_content: Option<String>,
    pub succeeded: bool,
    pub error_messages: Vec<String>,
}

#[derive(Debug, Clone)]
enum Segment {
    /// Substituted output, never scanned again.
    Resolved(String),
    /// Template text still to be scanned; `origin` is its byte offset in the
    /// original template.
    Pending { text: String, origin: usize },
}

#[derive(Debug, Clone)]
struct ParsingTarget {
    original: String,
    segments: Vec<Segment>,
    error_messages: Vec<String>,
    succeeded: bool,
}

impl ParsingTarget {
    fn new(content: String) -> Self {
        Self {
            segments: vec![Segment::Pending {
                text: content.clone(),
                origin: 0,
            }],
            original: content,
            error_messages: Vec::new(),
            succeeded: false,
        }
    }

    fn failed(&self) -> bool {
        !self.error_messages.is_empty()
    }

    fn current_content(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Resolved(text) | Segment::Pending { text, .. } => text.as_str(),
            })
            .collect()
    }

    fn report(&mut self, message: String) {
        if !self.error_messages.contains(&message) {
            self.error_messages.push(message);
        }
    }
}

/// Cache key: variable name plus the exact argument list
type CacheKey = (String, Vec<String>);

/// Stateful, single-use expansion of a set of templates.
pub struct ParsingProcess {
    state: HostState,
    event: Option<EventContext>,
    sets: Vec<VariableSet>,
    known: VariableSet,
    default_values: BTreeMap<String, VariableDefaultValue>,
    targets: IndexMap<String, ParsingTarget>,
    cache: HashMap<CacheKey, Result<String, VariableError>>,
    phase: ProcessState,
}

impl ParsingProcess {
    /// A process over the availability sets `sets`, pass 0 first.
    ///
    /// Placeholders naming a variable in none of the sets are syntax errors.
    pub fn new(state: HostState, event: Option<EventContext>, sets: Vec<VariableSet>) -> Self {
        let known = sets
            .iter()
            .fold(VariableSet::new(), |known, set| known.merge(set));
        Self {
            state,
            event,
            sets,
            known,
            default_values: BTreeMap::new(),
            targets: IndexMap::new(),
            cache: HashMap::new(),
            phase: ProcessState::Created,
        }
    }

    /// Add a template to expand under `key`. A repeated key replaces the
    /// earlier template.
    pub fn with_target(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.targets
            .insert(key.into(), ParsingTarget::new(content.into()));
        self
    }

    /// Substitutes for variables that fail, keyed by [`Variable::identifier`].
    pub fn with_default_values(mut self, defaults: BTreeMap<String, VariableDefaultValue>) -> Self {
        self.default_values = defaults;
        self
    }

    pub fn state(&self) -> ProcessState {
        self.phase
    }

    pub fn pass_count(&self) -> usize {
        self.sets.len()
    }

    /// Run pass 0. Returns false if any target has failed.
    pub async fn process(&mut self) -> Result<bool, ProcessError> {
        if self.phase != ProcessState::Created {
            return Err(ProcessError::AlreadyStarted);
        }
        self.run_pass(0).await;
        self.phase = ProcessState::PassPending(1);
        Ok(!self.any_failed())
    }

    /// Run every remaining pass and finish. Returns true if all targets
    /// succeeded.
    pub async fn process_rest(&mut self) -> Result<bool, ProcessError> {
        let first = match self.phase {
            ProcessState::Created => return Err(ProcessError::NotStarted),
            ProcessState::Succeeded | ProcessState::Failed => {
                return Err(ProcessError::AlreadyFinished)
            }
            ProcessState::PassPending(pass) => pass,
        };
        for pass in first..self.sets.len() {
            self.phase = ProcessState::PassPending(pass);
            self.run_pass(pass).await;
        }
        Ok(self.finish())
    }

    /// Results keyed by target, in the order the targets were added.
    pub fn results(&self) -> IndexMap<String, ParsingResult> {
        self.targets
            .iter()
            .map(|(key, target)| {
                let failed = target.failed();
                let result = ParsingResult {
                    original_content: target.original.clone(),
                    parsed_content: (!failed).then(|| target.current_content()),
                    succeeded: target.succeeded,
                    error_messages: target.error_messages.clone(),
                };
                (key.clone(), result)
            })
            .collect()
    }

    pub fn result(&self, key: &str) -> Option<ParsingResult> {
        self.results().shift_remove(key)
    }

    /// Every error message of every target, in target order.
    pub fn error_messages(&self) -> Vec<String> {
        self.targets
            .values()
            .flat_map(|t| t.error_messages.iter().cloned())
            .collect()
    }

    fn any_failed(&self) -> bool {
        self.targets.values().any(ParsingTarget::failed)
    }

    fn finish(&mut self) -> bool {
        for target in self.targets.values_mut() {
            target.succeeded = !target.failed();
        }
        let succeeded = !self.any_failed();
        self.phase = if succeeded {
            ProcessState::Succeeded
        } else {
            ProcessState::Failed
        };
        info!(
            targets = self.targets.len(),
            passes = self.sets.len(),
            succeeded,
            "parsing finished"
        );
        succeeded
    }

    async fn run_pass(&mut self, pass: usize) {
        let Self {
            state,
            event,
            sets,
            known,
            default_values,
            targets,
            cache,
            ..
        } = self;
        let Some(available) = sets.get(pass) else {
            return;
        };
        debug!(pass, available = available.len(), "parsing pass");

        let ctx = ResolveContext::new(state, event.as_ref());
        let mut resolver = Resolver {
            ctx,
            cache,
            default_values,
        };
        for (key, target) in targets.iter_mut() {
            // A failed target stays failed; later passes cannot rescue it.
            if target.failed() {
                continue;
            }
            let segments = mem::take(&mut target.segments);
            let mut expanded = Vec::with_capacity(segments.len());
            for segment in segments {
                match segment {
                    Segment::Pending { text, origin } => {
                        expand(&text, origin, available, known, &mut resolver, target, &mut expanded)
                            .await
                    }
                    resolved => expanded.push(resolved),
                }
            }
            target.segments = expanded;
            debug!(pass, target = %key, errors = target.error_messages.len(), "target pass done");
        }
    }
}

/// Resolution state shared by all targets of a pass
struct Resolver<'a> {
    ctx: ResolveContext<'a>,
    cache: &'a mut HashMap<CacheKey, Result<String, VariableError>>,
    default_values: &'a BTreeMap<String, VariableDefaultValue>,
}

impl Resolver<'_> {
    /// Value of a placeholder, computed at most once per process.
    async fn value(
        &mut self,
        variable: &dyn Variable,
        placeholder: &PlaceholderMatch,
        arguments: &Arguments,
    ) -> Result<String, VariableError> {
        let key = (
            placeholder.variable_name.clone(),
            placeholder.raw_arguments.clone(),
        );
        let result = match self.cache.get(&key) {
            Some(cached) => cached.clone(),
            None => {
                let result = resolve(variable, arguments, &self.ctx).await;
                self.cache.insert(key, result.clone());
                result
            }
        };
        result.or_else(|error| match self.default_values.get(variable.identifier()) {
            Some(VariableDefaultValue::EmptyValue) => Ok(String::new()),
            Some(VariableDefaultValue::Value { value }) => Ok(value.clone()),
            Some(VariableDefaultValue::ShowErrors) | None => Err(error),
        })
    }
}

/// Expand one pending segment, appending the result to `out`.
async fn expand(
    text: &str,
    origin: usize,
    available: &VariableSet,
    known: &VariableSet,
    resolver: &mut Resolver<'_>,
    target: &mut ParsingTarget,
    out: &mut Vec<Segment>,
) {
    let pending = |start: usize, end: usize| Segment::Pending {
        text: text.get(start..end).unwrap_or_default().to_string(),
        origin: origin + start,
    };

    let mut last = 0;
    for token in Tokenizer::new(text, available, known) {
        let span = token.span();
        if span.start > last {
            out.push(pending(last, span.start));
        }
        match token {
            Token::Escaped(placeholder) => out.push(Segment::Resolved(placeholder.unescaped())),
            Token::Variable {
                placeholder,
                variable,
                arguments,
            } => match resolver.value(variable.as_ref(), &placeholder, &arguments).await {
                Ok(value) => out.push(Segment::Resolved(value)),
                Err(error) => {
                    target.report(error.to_string());
                    out.push(pending(span.start, span.end));
                }
            },
            Token::Invalid(error) => {
                target.report(error.shifted(origin).to_string());
                out.push(pending(span.start, span.end));
            }
        }
        last = span.end;
    }
    if last < text.len() {
        out.push(pending(last, text.len()));
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
