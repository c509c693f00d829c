// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical listener registry
//!
//! Owns the registered listener set and the retrieval cache built from it.
//! Every mutation and every cache construction serializes on one lock, and
//! every mutation clears the cache before releasing it.

pub mod set;

use crate::listener::{Listener, ListenerName};
use crate::retrieval::{CacheKey, RetrievalCache, Retriever};
use parking_lot::Mutex;
use std::sync::Arc;

pub use set::{ListenerSet, Registered};

#[derive(Debug, Default)]
pub struct Registry {
    canonical: Mutex<ListenerSet>,
    cache: RetrievalCache,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, entry: Registered) -> bool {
        let name = entry.listener().name().to_string();
        let added = self.mutate(|set| set.insert(entry));
        tracing::debug!(listener = %name, added, "registered listener");
        added
    }

    pub fn add_listener_by_name(&self, name: ListenerName) -> bool {
        let label = name.to_string();
        let added = self.mutate(|set| set.insert_name(name));
        tracing::debug!(listener = %label, added, "registered listener by name");
        added
    }

    pub fn remove_listener(&self, listener: &dyn Listener) -> bool {
        let removed = self.mutate(|set| set.remove(listener));
        tracing::debug!(listener = listener.name(), removed, "removed listener");
        removed
    }

    pub fn remove_listener_by_name(&self, name: &str) -> bool {
        let removed = self.mutate(|set| set.remove_name(name));
        tracing::debug!(listener = name, removed, "removed listener by name");
        removed
    }

    pub fn remove_all(&self) {
        self.mutate(ListenerSet::clear);
        tracing::debug!("removed all listeners");
    }

    /// Copy of the current set
    pub fn snapshot(&self) -> ListenerSet {
        self.canonical.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.canonical.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.lock().is_empty()
    }

    pub fn listener_names(&self) -> Vec<ListenerName> {
        self.canonical.lock().names().cloned().collect()
    }

    /// Cached (or, for uncacheable keys, fresh) retriever for `key`
    pub fn retrieve<F>(&self, key: CacheKey, cacheable: bool, filter: F) -> Arc<Retriever>
    where
        F: FnOnce(&ListenerSet) -> Retriever,
    {
        self.cache.get(key, cacheable, &self.canonical, filter)
    }

    pub fn cache(&self) -> &RetrievalCache {
        &self.cache
    }

    fn mutate<T>(&self, change: impl FnOnce(&mut ListenerSet) -> T) -> T {
        let mut set = self.canonical.lock();
        let result = change(&mut *set);
        self.cache.clear();
        result
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
