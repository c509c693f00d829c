// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relay-core: in-process typed event multicaster
//!
//! This crate provides:
//! - Static type descriptors and the event/listener contracts
//! - Type matching that sees through proxy listeners
//! - A listener registry with a concurrent retrieval cache
//! - The multicaster with synchronous and delegated delivery
//! - Collaborator traits for name resolution, proxy introspection,
//!   loading-context checks and task execution

pub mod config;
pub mod error;
pub mod event;
pub mod executor;
pub mod listener;
pub mod loading;
pub mod matcher;
pub mod multicaster;
pub mod registry;
pub mod resolver;
pub mod retrieval;
pub mod signature;
pub mod types;

#[cfg(test)]
mod testing;

// Re-exports
pub use config::{CacheConfig, DeliveryConfig, DeliveryMode, ExecutorKind, ExecutorSettings, MulticasterConfig};
pub use error::{ConfigError, ListenerError, MulticastError, RegistrationError, ResolveError};
pub use event::{ApplicationEvent, Event, EventDescriptor, EventSource};
pub use executor::{DeliveryTask, TaskExecutor};
pub use listener::{same_listener, FnListener, Listener, ListenerName, ProxyListener, SmartListener};
pub use loading::{LoaderHierarchy, TypeLoading};
pub use matcher::{Interest, ProxyIntrospector, TargetAware, TypeInterest, TypeMatcher};
pub use multicaster::{EventPublisher, ExecutionStrategy, Multicaster, MulticasterBuilder};
pub use registry::{ListenerSet, Registered, Registry};
pub use resolver::ListenerResolver;
pub use retrieval::{CacheKey, CacheStats, RetrievalCache, Retriever};
pub use signature::{DeclaredType, ListenerType, Supertype, TypeArg};
pub use types::{LoaderId, TypeInfo, TypeRef};
