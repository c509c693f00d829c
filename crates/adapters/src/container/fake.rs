// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake listener resolver for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use relay_core::{Listener, ListenerName, ListenerResolver, ResolveError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeState {
    listeners: HashMap<String, Arc<dyn Listener>>,
    unavailable: HashMap<String, String>,
    calls: Vec<String>,
}

/// Resolver with scripted bindings that records every lookup
#[derive(Clone, Default)]
pub struct FakeResolver {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, listener: Arc<dyn Listener>) -> Self {
        self.bind(name, listener);
        self
    }

    pub fn bind(&self, name: &str, listener: Arc<dyn Listener>) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.unavailable.remove(name);
        state.listeners.insert(name.to_string(), listener);
    }

    /// Make lookups of `name` fail with [`ResolveError::Unavailable`]
    pub fn fail(&self, name: &str, reason: &str) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.unavailable.insert(name.to_string(), reason.to_string());
    }

    /// Names looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }
}

impl ListenerResolver for FakeResolver {
    fn resolve(&self, name: &ListenerName) -> Result<Arc<dyn Listener>, ResolveError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(name.to_string());

        if let Some(reason) = state.unavailable.get(name.as_str()) {
            return Err(ResolveError::Unavailable {
                name: name.to_string(),
                reason: reason.clone(),
            });
        }
        state
            .listeners
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
