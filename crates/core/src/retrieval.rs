// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache of filtered listener sets, keyed by event descriptor
//!
//! Lookups read the store without taking the registry lock. A miss on a
//! cacheable key takes the registry lock, checks again, and only then builds
//! and stores the retriever, so each key is built at most once between two
//! invalidations. Registry mutations clear the store while holding the same
//! lock, which means a stored retriever always reflects the current set.

use crate::event::EventDescriptor;
use crate::listener::{Listener, ListenerName};
use crate::registry::set::ListenerSet;
use crate::types::TypeRef;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cache key: event type plus optional source type, compared by identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub event_type: TypeRef,
    pub source_type: Option<TypeRef>,
}

impl From<EventDescriptor> for CacheKey {
    fn from(descriptor: EventDescriptor) -> Self {
        Self {
            event_type: descriptor.event_type(),
            source_type: descriptor.source_type(),
        }
    }
}

/// Listeners matching one descriptor, in registration order
///
/// Names are kept unresolved. Each is resolved and matched at delivery, so
/// the resolver is never called while the registry lock is held.
pub struct Retriever {
    listeners: Vec<Arc<dyn Listener>>,
    names: Vec<ListenerName>,
}

impl Retriever {
    pub fn new(listeners: Vec<Arc<dyn Listener>>, names: Vec<ListenerName>) -> Self {
        Self { listeners, names }
    }

    pub fn listeners(&self) -> &[Arc<dyn Listener>] {
        &self.listeners
    }

    pub fn names(&self) -> &[ListenerName] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.names.is_empty()
    }
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners: Vec<&str> = self.listeners.iter().map(|l| l.name()).collect();
        f.debug_struct("Retriever")
            .field("listeners", &listeners)
            .field("names", &self.names)
            .finish()
    }
}

/// Point-in-time cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Retrievers built and stored
    pub builds: u64,
    /// Lookups for keys that may not be retained
    pub uncacheable: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
pub struct RetrievalCache {
    store: DashMap<CacheKey, Arc<Retriever>>,
    hits: AtomicU64,
    misses: AtomicU64,
    builds: AtomicU64,
    uncacheable: AtomicU64,
}

impl RetrievalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the retriever for `key`, building it with `filter` on a miss
    ///
    /// Uncacheable keys are filtered from a snapshot taken under `canonical`
    /// and never stored. Cacheable keys are built and stored under it, so
    /// `canonical` must be the lock that guards [`clear`](Self::clear).
    pub(crate) fn get<F>(
        &self,
        key: CacheKey,
        cacheable: bool,
        canonical: &Mutex<ListenerSet>,
        filter: F,
    ) -> Arc<Retriever>
    where
        F: FnOnce(&ListenerSet) -> Retriever,
    {
        if let Some(found) = self.lookup(&key) {
            tracing::trace!(event = %key.event_type, "retriever cache hit");
            return found;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        if !cacheable {
            self.uncacheable.fetch_add(1, Ordering::Relaxed);
            let snapshot = canonical.lock().clone();
            return Arc::new(filter(&snapshot));
        }

        let set = canonical.lock();
        if let Some(found) = self.lookup(&key) {
            return found;
        }
        let retriever = Arc::new(filter(&*set));
        self.store.insert(key, Arc::clone(&retriever));
        self.builds.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            event = %key.event_type,
            source = ?key.source_type.map(|s| s.name()),
            listeners = retriever.listeners().len(),
            names = retriever.names().len(),
            "built retriever"
        );
        retriever
    }

    fn lookup(&self, key: &CacheKey) -> Option<Arc<Retriever>> {
        let found = self.store.get(key).map(|entry| Arc::clone(entry.value()));
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Drop every stored retriever; callers hold the registry lock
    pub(crate) fn clear(&self) {
        self.store.clear();
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            builds: self.builds.load(Ordering::Relaxed),
            uncacheable: self.uncacheable.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for RetrievalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalCache")
            .field("len", &self.store.len())
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
#[path = "retrieval_tests.rs"]
mod tests;
