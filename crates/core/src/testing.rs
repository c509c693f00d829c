// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests

use crate::error::{ListenerError, ResolveError};
use crate::event::{Event, EventSource};
use crate::listener::{Listener, ListenerName};
use crate::resolver::ListenerResolver;
use crate::signature::DeclaredType;
use crate::types::{LoaderId, TypeInfo, TypeRef};
use parking_lot::Mutex;
use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub static BASE: TypeInfo = TypeInfo::new("Base");
pub static DERIVED: TypeInfo = TypeInfo::new("Derived").extends(&[&BASE]);
pub static OTHER: TypeInfo = TypeInfo::new("Other");
pub static BASE_ARRAY: TypeInfo = TypeInfo::array_of("Base[]", &BASE);
pub static DERIVED_ARRAY: TypeInfo = TypeInfo::array_of("Derived[]", &DERIVED);
pub static OTHER_ARRAY: TypeInfo = TypeInfo::array_of("Other[]", &OTHER);
pub static ORIGIN: TypeInfo = TypeInfo::new("Origin");
pub static PLUGIN_EVENT: TypeInfo =
    TypeInfo::new("PluginEvent").loaded_by(LoaderId("plugin"));

/// Event of any fixture type, with an optional source
pub struct TestEvent {
    ty: &'static TypeInfo,
    source: Option<Arc<dyn EventSource>>,
}

impl TestEvent {
    pub fn of(ty: &'static TypeInfo) -> Self {
        Self { ty, source: None }
    }

    pub fn from_source(ty: &'static TypeInfo, source: &'static TypeInfo) -> Self {
        Self {
            ty,
            source: Some(Arc::new(TestSource(source))),
        }
    }
}

impl Event for TestEvent {
    fn event_type(&self) -> TypeRef {
        TypeRef::of(self.ty)
    }

    fn source(&self) -> Option<&dyn EventSource> {
        self.source.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct TestSource(pub &'static TypeInfo);

impl EventSource for TestSource {
    fn source_type(&self) -> TypeRef {
        TypeRef::of(self.0)
    }
}

/// Delivery log shared between probes
pub type Log = Arc<Mutex<Vec<String>>>;

pub fn log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

/// Listener that records `name` (or `name:EventType`) into a shared log
pub struct Probe {
    name: String,
    declared: DeclaredType,
    log: Log,
    fail: bool,
}

impl Probe {
    pub fn raw(name: &str, log: &Log) -> Arc<Self> {
        Self::declared(name, DeclaredType::Raw, log)
    }

    pub fn typed(name: &str, ty: &'static TypeInfo, log: &Log) -> Arc<Self> {
        Self::declared(name, DeclaredType::of(ty), log)
    }

    pub fn declared(name: &str, declared: DeclaredType, log: &Log) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            declared,
            log: Arc::clone(log),
            fail: false,
        })
    }

    pub fn failing(name: &str, log: &Log) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            declared: DeclaredType::Raw,
            log: Arc::clone(log),
            fail: true,
        })
    }
}

impl Listener for Probe {
    fn on_event(&self, _event: &dyn Event) -> Result<(), ListenerError> {
        self.log.lock().push(self.name.clone());
        if self.fail {
            return Err(format!("{} refused", self.name).into());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> DeclaredType {
        self.declared
    }
}

/// Resolver over a fixed map, counting lookups
#[derive(Default)]
pub struct MapResolver {
    listeners: HashMap<String, Arc<dyn Listener>>,
    calls: AtomicUsize,
}

impl MapResolver {
    pub fn with(mut self, name: &str, listener: Arc<dyn Listener>) -> Self {
        self.listeners.insert(name.to_string(), listener);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ListenerResolver for MapResolver {
    fn resolve(&self, name: &ListenerName) -> Result<Arc<dyn Listener>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.listeners
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}
