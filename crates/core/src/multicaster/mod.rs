// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The event multicaster
//!
//! Publishing derives the event's descriptor, fetches the matching listeners
//! from the retrieval cache (building them on a miss), then delivers to each
//! one in registration order: direct listeners first, named listeners after.

mod builder;
mod candidates;

pub use builder::MulticasterBuilder;

use crate::error::{MulticastError, RegistrationError};
use crate::event::{Event, EventDescriptor};
use crate::executor::{DeliveryTask, TaskExecutor};
use crate::listener::{Listener, ListenerName};
use crate::loading::TypeLoading;
use crate::matcher::TypeMatcher;
use crate::registry::{ListenerSet, Registered, Registry};
use crate::resolver::ListenerResolver;
use crate::retrieval::{CacheKey, CacheStats, Retriever};
use candidates::Candidates;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// How deliveries are performed
#[derive(Clone, Default)]
pub enum ExecutionStrategy {
    /// On the publishing thread, in order; the first failure aborts the publish
    #[default]
    Synchronous,
    /// Each delivery becomes a task for the executor
    Delegated(Arc<dyn TaskExecutor>),
}

impl fmt::Debug for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStrategy::Synchronous => write!(f, "Synchronous"),
            ExecutionStrategy::Delegated(_) => write!(f, "Delegated"),
        }
    }
}

/// Publisher-facing side of the multicaster
pub trait EventPublisher: Send + Sync {
    /// Deliver `event` to every matching listener; returns the delivery count
    fn publish_event(&self, event: Arc<dyn Event>) -> Result<usize, MulticastError>;
}

/// Registry of listeners that delivers each published event to those whose
/// declared interest matches it
pub struct Multicaster {
    registry: Registry,
    matcher: TypeMatcher,
    resolver: Option<Arc<dyn ListenerResolver>>,
    loading: Option<Arc<dyn TypeLoading>>,
    caching: bool,
    strategy: RwLock<ExecutionStrategy>,
}

impl Multicaster {
    /// Synchronous multicaster with no resolver and caching enabled
    pub fn new() -> Self {
        Self::builder().into_multicaster(ExecutionStrategy::Synchronous)
    }

    pub fn builder() -> MulticasterBuilder {
        MulticasterBuilder::default()
    }

    /// Register a listener; returns false if this object is already registered
    pub fn add_listener(&self, listener: Arc<dyn Listener>) -> bool {
        let interest = self.matcher.interest_of(listener.as_ref());
        self.registry.add_listener(Registered::new(listener, interest))
    }

    /// Register a listener by name, resolved through the resolver at delivery
    pub fn add_listener_by_name(&self, name: &str) -> Result<bool, RegistrationError> {
        let name = ListenerName::new(name)?;
        Ok(self.registry.add_listener_by_name(name))
    }

    pub fn remove_listener(&self, listener: &dyn Listener) -> bool {
        self.registry.remove_listener(listener)
    }

    pub fn remove_listener_by_name(&self, name: &str) -> Result<bool, RegistrationError> {
        let name = ListenerName::new(name)?;
        Ok(self.registry.remove_listener_by_name(name.as_str()))
    }

    pub fn remove_all_listeners(&self) {
        self.registry.remove_all();
    }

    /// Publish `event` to every matching listener
    ///
    /// Returns the number of deliveries performed (synchronous) or submitted
    /// (delegated).
    pub fn publish<E: Event>(&self, event: E) -> Result<usize, MulticastError> {
        self.publish_shared(Arc::new(event))
    }

    pub fn publish_shared(&self, event: Arc<dyn Event>) -> Result<usize, MulticastError> {
        let descriptor = event.descriptor();
        let retriever = self.retriever_for(descriptor);
        let strategy = self.strategy.read().clone();

        let mut count = 0;
        for candidate in Candidates::new(self, &retriever, descriptor) {
            match &strategy {
                ExecutionStrategy::Synchronous => {
                    let listener = candidate?;
                    invoke(listener.as_ref(), event.as_ref())?;
                }
                ExecutionStrategy::Delegated(executor) => {
                    let task = match candidate {
                        Ok(listener) => {
                            let name = listener.name().to_string();
                            let event = Arc::clone(&event);
                            DeliveryTask::new(name, descriptor.event_type(), move || {
                                invoke(listener.as_ref(), event.as_ref())
                            })
                        }
                        Err(e) => DeliveryTask::failed(descriptor.event_type(), e),
                    };
                    executor.execute(task);
                }
            }
            count += 1;
        }

        tracing::trace!(event = %descriptor, deliveries = count, "published");
        Ok(count)
    }

    /// The listeners `event` would be delivered to, in delivery order
    pub fn listeners_for(&self, event: &dyn Event) -> Result<Vec<Arc<dyn Listener>>, MulticastError> {
        let descriptor = event.descriptor();
        let retriever = self.retriever_for(descriptor);
        Candidates::new(self, &retriever, descriptor).collect()
    }

    pub fn set_execution_strategy(&self, strategy: ExecutionStrategy) {
        tracing::debug!(?strategy, "execution strategy changed");
        *self.strategy.write() = strategy;
    }

    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.strategy.read().clone()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.registry.cache().stats()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn retriever_for(&self, descriptor: EventDescriptor) -> Arc<Retriever> {
        let cacheable = self.is_cacheable(descriptor);
        self.registry
            .retrieve(CacheKey::from(descriptor), cacheable, |set| {
                self.filter(set, descriptor)
            })
    }

    fn is_cacheable(&self, descriptor: EventDescriptor) -> bool {
        if !self.caching {
            return false;
        }
        match &self.loading {
            None => true,
            Some(loading) => {
                let source_safe = match descriptor.source_type() {
                    Some(source) => loading.is_cache_safe(source),
                    None => true,
                };
                source_safe && loading.is_cache_safe(descriptor.event_type())
            }
        }
    }

    fn filter(&self, set: &ListenerSet, descriptor: EventDescriptor) -> Retriever {
        let event_type = descriptor.event_type();
        let source_type = descriptor.source_type();

        let listeners = set
            .listeners()
            .filter(|entry| {
                self.matcher.matches(
                    entry.listener().as_ref(),
                    entry.interest(),
                    event_type,
                    source_type,
                )
            })
            .map(|entry| Arc::clone(entry.listener()))
            .collect();

        Retriever::new(listeners, set.names().cloned().collect())
    }

    fn resolve(&self, name: &ListenerName) -> Result<Arc<dyn Listener>, MulticastError> {
        let resolver = self
            .resolver
            .as_ref()
            .ok_or_else(|| MulticastError::NoResolver(name.to_string()))?;
        resolver
            .resolve(name)
            .map_err(|source| MulticastError::Resolution {
                name: name.to_string(),
                source,
            })
    }
}

impl Default for Multicaster {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for Multicaster {
    fn publish_event(&self, event: Arc<dyn Event>) -> Result<usize, MulticastError> {
        self.publish_shared(event)
    }
}

impl fmt::Debug for Multicaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multicaster")
            .field("registry", &self.registry)
            .field("caching", &self.caching)
            .field("strategy", &*self.strategy.read())
            .finish_non_exhaustive()
    }
}

fn invoke(listener: &dyn Listener, event: &dyn Event) -> Result<(), MulticastError> {
    listener
        .on_event(event)
        .map_err(|source| MulticastError::Delivery {
            listener: listener.name().to_string(),
            event: event.event_type().name(),
            source,
        })
}

#[cfg(test)]
#[path = "multicaster_tests.rs"]
mod tests;
