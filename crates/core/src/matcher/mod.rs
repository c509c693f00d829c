// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Type matching between listeners and published events
//!
//! A listener's interest is derived once, at registration, from what it
//! declares. Smart listeners answer for themselves. Everyone else is matched
//! by the type argument found on their declared type, or on the type of the
//! object they proxy when their own declaration says nothing.

pub mod resolve;

use crate::listener::Listener;
use crate::signature::{DeclaredType, TypeArg};
use crate::types::TypeRef;
use std::sync::Arc;

pub use resolve::find_type_argument;

/// Resolved event-type interest of a declarative listener
#[derive(Debug, Clone, Copy)]
pub struct Interest(TypeArg);

impl Interest {
    /// Interest in `arg`, or `None` when the argument carries no information
    pub fn from_argument(arg: TypeArg) -> Option<Self> {
        match arg {
            TypeArg::Variable(_) => None,
            other => Some(Self(other)),
        }
    }

    pub fn argument(&self) -> TypeArg {
        self.0
    }

    pub fn accepts(&self, event_type: TypeRef) -> bool {
        argument_accepts(self.0, event_type)
    }
}

fn argument_accepts(arg: TypeArg, event_type: TypeRef) -> bool {
    match arg {
        TypeArg::Class(declared) => TypeRef::of(declared).is_assignable_from(event_type),
        TypeArg::Array(component) => match event_type.component() {
            Some(actual) => argument_accepts(*component, actual),
            None => false,
        },
        // Only reachable inside an array: any component type
        TypeArg::Variable(_) => true,
    }
}

/// How a registered listener is matched, computed once per registration
#[derive(Debug, Clone, Copy)]
pub enum TypeInterest {
    /// The listener answers through [`SmartListener`](crate::SmartListener)
    Smart,
    /// Declarative interest; `None` accepts every event type
    Declared(Option<Interest>),
}

/// Finds the declared type of the object behind a proxy
pub trait ProxyIntrospector: Send + Sync {
    fn target_type(&self, listener: &dyn Listener) -> Option<DeclaredType>;
}

/// Introspector that trusts the listener's own [`Listener::target_type`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetAware;

impl ProxyIntrospector for TargetAware {
    fn target_type(&self, listener: &dyn Listener) -> Option<DeclaredType> {
        listener.target_type()
    }
}

/// Decides which listeners accept a given (event type, source type) pair
#[derive(Clone)]
pub struct TypeMatcher {
    proxies: Arc<dyn ProxyIntrospector>,
}

impl TypeMatcher {
    pub fn new(proxies: Arc<dyn ProxyIntrospector>) -> Self {
        Self { proxies }
    }

    /// Derive how `listener` should be matched
    pub fn interest_of(&self, listener: &dyn Listener) -> TypeInterest {
        if listener.as_smart().is_some() {
            return TypeInterest::Smart;
        }

        let found = find_type_argument(listener.declared_type()).or_else(|| {
            self.proxies
                .target_type(listener)
                .and_then(find_type_argument)
        });
        TypeInterest::Declared(found.and_then(Interest::from_argument))
    }

    /// Match using an interest computed earlier by [`interest_of`](Self::interest_of)
    pub fn matches(
        &self,
        listener: &dyn Listener,
        interest: &TypeInterest,
        event_type: TypeRef,
        source_type: Option<TypeRef>,
    ) -> bool {
        match interest {
            TypeInterest::Smart => match listener.as_smart() {
                Some(smart) => {
                    smart.supports_event_type(event_type)
                        && smart.supports_source_type(source_type)
                }
                None => false,
            },
            TypeInterest::Declared(None) => true,
            TypeInterest::Declared(Some(interest)) => interest.accepts(event_type),
        }
    }

    /// Derive the interest and match in one step, for listeners resolved late
    pub fn supports(
        &self,
        listener: &dyn Listener,
        event_type: TypeRef,
        source_type: Option<TypeRef>,
    ) -> bool {
        let interest = self.interest_of(listener);
        self.matches(listener, &interest, event_type, source_type)
    }
}

impl Default for TypeMatcher {
    fn default() -> Self {
        Self::new(Arc::new(TargetAware))
    }
}

impl std::fmt::Debug for TypeMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeMatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
