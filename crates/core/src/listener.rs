// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener contracts and the standard listener wrappers

use crate::error::{ListenerError, RegistrationError};
use crate::event::Event;
use crate::signature::DeclaredType;
use crate::types::{TypeInfo, TypeRef};
use std::fmt;
use std::sync::Arc;

/// Handler of published events
pub trait Listener: Send + Sync + 'static {
    /// Handle one event
    fn on_event(&self, event: &dyn Event) -> Result<(), ListenerError>;

    /// Name used in logs and errors
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The declared event interest, inspected once at registration
    fn declared_type(&self) -> DeclaredType {
        DeclaredType::Raw
    }

    /// Smart listeners return `Some(self)` to take over type matching
    fn as_smart(&self) -> Option<&dyn SmartListener> {
        None
    }

    /// Declared type of the object this listener stands in for, if it is a proxy
    fn target_type(&self) -> Option<DeclaredType> {
        None
    }
}

/// A listener that decides for itself which events it supports
///
/// Implementors must also override [`Listener::as_smart`] to return `Some(self)`.
pub trait SmartListener: Listener {
    fn supports_event_type(&self, event_type: TypeRef) -> bool;

    fn supports_source_type(&self, _source_type: Option<TypeRef>) -> bool {
        true
    }
}

/// Whether two listener handles refer to the same listener object
pub fn same_listener(a: &dyn Listener, b: &dyn Listener) -> bool {
    std::ptr::addr_eq(a as *const dyn Listener, b as *const dyn Listener)
}

/// Name of a listener registered by reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerName(String);

impl ListenerName {
    pub fn new(name: impl Into<String>) -> Result<Self, RegistrationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistrationError::BlankName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListenerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ListenerName {
    type Error = RegistrationError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for ListenerName {
    type Error = RegistrationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

/// Transparent wrapper that forwards delivery to a target listener
///
/// The proxy declares nothing itself; matching sees through it via
/// [`Listener::target_type`].
pub struct ProxyListener {
    target: Arc<dyn Listener>,
    target_type: Option<DeclaredType>,
}

impl ProxyListener {
    /// Wrap `target`, exposing its declared type
    pub fn new(target: Arc<dyn Listener>) -> Self {
        let target_type = Some(target.declared_type());
        Self {
            target,
            target_type,
        }
    }

    /// Wrap `target` without exposing what it declares
    pub fn opaque(target: Arc<dyn Listener>) -> Self {
        Self {
            target,
            target_type: None,
        }
    }

    /// Override the exposed target type
    pub fn with_target_type(mut self, target_type: DeclaredType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    pub fn target(&self) -> &Arc<dyn Listener> {
        &self.target
    }
}

impl Listener for ProxyListener {
    fn on_event(&self, event: &dyn Event) -> Result<(), ListenerError> {
        self.target.on_event(event)
    }

    fn name(&self) -> &str {
        self.target.name()
    }

    fn as_smart(&self) -> Option<&dyn SmartListener> {
        self.target.as_smart()
    }

    fn target_type(&self) -> Option<DeclaredType> {
        self.target_type
    }
}

/// Listener backed by a closure
pub struct FnListener<F> {
    name: String,
    declared: DeclaredType,
    handler: F,
}

impl<F> FnListener<F>
where
    F: Fn(&dyn Event) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    /// A raw listener that accepts every event
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            declared: DeclaredType::Raw,
            handler,
        }
    }

    /// A listener for `event_type` and its subtypes
    pub fn for_type(name: impl Into<String>, event_type: &'static TypeInfo, handler: F) -> Self {
        Self {
            name: name.into(),
            declared: DeclaredType::of(event_type),
            handler,
        }
    }

    pub fn with_declared_type(mut self, declared: DeclaredType) -> Self {
        self.declared = declared;
        self
    }
}

impl<F> Listener for FnListener<F>
where
    F: Fn(&dyn Event) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    fn on_event(&self, event: &dyn Event) -> Result<(), ListenerError> {
        (self.handler)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> DeclaredType {
        self.declared
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
