// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named listener container
//!
//! Holds listeners under names so a multicaster can register them by
//! reference and resolve them at delivery time. A name is bound either to a
//! shared instance or to a factory that builds a fresh listener per lookup.

use relay_core::{Listener, ListenerName, ListenerResolver, ResolveError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeResolver;

type Factory = dyn Fn() -> Result<Arc<dyn Listener>, String> + Send + Sync;

#[derive(Clone)]
enum Binding {
    Shared(Arc<dyn Listener>),
    Factory(Arc<Factory>),
}

/// Thread-safe name to listener registry implementing [`ListenerResolver`]
#[derive(Clone, Default)]
pub struct ListenerContainer {
    bindings: Arc<RwLock<HashMap<String, Binding>>>,
}

impl ListenerContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a shared listener, replacing any previous binding
    pub fn register(&self, name: impl Into<String>, listener: Arc<dyn Listener>) {
        self.bind(name.into(), Binding::Shared(listener));
    }

    /// Bind `name` to a factory invoked on every lookup
    ///
    /// A factory error makes the name unavailable for that lookup only.
    pub fn register_factory<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Arc<dyn Listener>, String> + Send + Sync + 'static,
    {
        self.bind(name.into(), Binding::Factory(Arc::new(factory)));
    }

    /// Remove a binding; returns whether one existed
    pub fn deregister(&self, name: &str) -> bool {
        let removed = self
            .bindings
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name)
            .is_some();
        tracing::debug!(name, removed, "listener binding removed");
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(name)
    }

    /// Bound names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .bindings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bind(&self, name: String, binding: Binding) {
        tracing::debug!(name = %name, "listener binding added");
        self.bindings
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name, binding);
    }
}

impl ListenerResolver for ListenerContainer {
    fn resolve(&self, name: &ListenerName) -> Result<Arc<dyn Listener>, ResolveError> {
        // Clone the binding out so factories run without the lock held
        let binding = self
            .bindings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name.as_str())
            .cloned();

        match binding {
            None => Err(ResolveError::NotFound(name.to_string())),
            Some(Binding::Shared(listener)) => Ok(listener),
            Some(Binding::Factory(factory)) => {
                factory().map_err(|reason| ResolveError::Unavailable {
                    name: name.to_string(),
                    reason,
                })
            }
        }
    }
}

impl std::fmt::Debug for ListenerContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerContainer")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
