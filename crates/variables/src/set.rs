// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, deduplicated collections of variables

use crate::variable::Variable;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Variables keyed by name, in insertion order.
///
/// Set operations are pure: they return new sets and never mutate inputs.
#[derive(Clone, Default)]
pub struct VariableSet {
    members: IndexMap<String, Arc<dyn Variable>>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `variable` unless a member with the same name exists.
    ///
    /// Returns false (and keeps the existing member) on collision.
    pub fn insert(&mut self, variable: Arc<dyn Variable>) -> bool {
        let name = variable.name().to_string();
        if self.members.contains_key(&name) {
            return false;
        }
        self.members.insert(name, variable);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Variable>> {
        self.members.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Variable>> {
        self.members.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// All members of `self` and `other`; `self` wins on name collisions.
    pub fn merge(&self, other: &VariableSet) -> VariableSet {
        let mut merged = self.clone();
        for variable in other.iter() {
            merged.insert(Arc::clone(variable));
        }
        merged
    }

    /// Members of `self` whose name is absent from `other`.
    pub fn subtract(&self, other: &VariableSet) -> VariableSet {
        self.iter()
            .filter(|v| !other.contains(v.name()))
            .cloned()
            .collect()
    }

    pub fn is_disjoint(&self, other: &VariableSet) -> bool {
        self.names().all(|name| !other.contains(name))
    }

    /// Same member names, regardless of order.
    pub fn same_members(&self, other: &VariableSet) -> bool {
        self.len() == other.len() && self.names().all(|name| other.contains(name))
    }
}

impl FromIterator<Arc<dyn Variable>> for VariableSet {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Variable>>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for variable in iter {
            set.insert(variable);
        }
        set
    }
}

impl fmt::Debug for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
