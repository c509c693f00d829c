// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-ordered set of registered listeners

use crate::listener::{same_listener, Listener, ListenerName};
use crate::matcher::TypeInterest;
use std::sync::Arc;

/// A directly registered listener and the interest derived for it
#[derive(Clone)]
pub struct Registered {
    listener: Arc<dyn Listener>,
    interest: TypeInterest,
}

impl Registered {
    pub fn new(listener: Arc<dyn Listener>, interest: TypeInterest) -> Self {
        Self { listener, interest }
    }

    pub fn listener(&self) -> &Arc<dyn Listener> {
        &self.listener
    }

    pub fn interest(&self) -> &TypeInterest {
        &self.interest
    }
}

impl std::fmt::Debug for Registered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registered")
            .field("listener", &self.listener.name())
            .field("interest", &self.interest)
            .finish()
    }
}

/// Direct listeners keyed by identity, and listener names keyed by string
///
/// Both collections keep registration order.
#[derive(Debug, Clone, Default)]
pub struct ListenerSet {
    listeners: Vec<Registered>,
    names: Vec<ListenerName>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless the same listener object is already present
    pub fn insert(&mut self, entry: Registered) -> bool {
        if self.contains(entry.listener.as_ref()) {
            return false;
        }
        self.listeners.push(entry);
        true
    }

    pub fn insert_name(&mut self, name: ListenerName) -> bool {
        if self.names.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn remove(&mut self, listener: &dyn Listener) -> bool {
        let before = self.listeners.len();
        self.listeners
            .retain(|entry| !same_listener(entry.listener.as_ref(), listener));
        self.listeners.len() != before
    }

    pub fn remove_name(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|existing| existing.as_str() != name);
        self.names.len() != before
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
        self.names.clear();
    }

    pub fn contains(&self, listener: &dyn Listener) -> bool {
        self.listeners
            .iter()
            .any(|entry| same_listener(entry.listener.as_ref(), listener))
    }

    pub fn listeners(&self) -> impl Iterator<Item = &Registered> {
        self.listeners.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &ListenerName> {
        self.names.iter()
    }

    /// Direct listeners plus names
    pub fn len(&self) -> usize {
        self.listeners.len() + self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.names.is_empty()
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
