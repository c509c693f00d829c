// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declared listener signatures
//!
//! A listener states which events it wants through its declared type. The
//! declaration is either a direct type argument, a raw (unparameterized)
//! listener, or a [`ListenerType`] hierarchy whose interfaces and
//! superclasses are searched for the listener contract.

use crate::types::TypeInfo;

/// Type argument given to the listener contract
#[derive(Debug, Clone, Copy)]
pub enum TypeArg {
    /// A concrete event type
    Class(&'static TypeInfo),
    /// An array of the inner argument
    Array(&'static TypeArg),
    /// An unresolved type variable, such as `E` in a generic listener
    Variable(&'static str),
}

/// One entry in a [`ListenerType`]'s declared interfaces or superclass
#[derive(Debug, Clone, Copy)]
pub enum Supertype {
    /// The listener contract instantiated with a type argument
    Listener(TypeArg),
    /// The listener contract used without a type argument
    RawListener,
    /// Another declared type, searched recursively
    Type(&'static ListenerType),
}

/// Declared shape of a listener implementation
///
/// ```
/// use relay_core::{ListenerType, Supertype, TypeArg, TypeInfo};
///
/// static ORDER_PLACED: TypeInfo = TypeInfo::new("OrderPlaced");
/// static ORDER_HANDLER: ListenerType = ListenerType::new("OrderHandler")
///     .implements(&[Supertype::Listener(TypeArg::Class(&ORDER_PLACED))]);
/// static AUDITED_ORDER_HANDLER: ListenerType =
///     ListenerType::new("AuditedOrderHandler").inherits(&ORDER_HANDLER);
/// ```
#[derive(Debug)]
pub struct ListenerType {
    name: &'static str,
    interfaces: &'static [Supertype],
    superclass: Option<&'static ListenerType>,
}

impl ListenerType {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            interfaces: &[],
            superclass: None,
        }
    }

    /// Declared interfaces, searched in order before the superclass
    pub const fn implements(self, interfaces: &'static [Supertype]) -> Self {
        Self { interfaces, ..self }
    }

    pub const fn inherits(self, superclass: &'static ListenerType) -> Self {
        Self {
            superclass: Some(superclass),
            ..self
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn interfaces(&self) -> &'static [Supertype] {
        self.interfaces
    }

    pub fn superclass(&self) -> Option<&'static ListenerType> {
        self.superclass
    }
}

/// What a listener declares about the events it handles
#[derive(Debug, Clone, Copy, Default)]
pub enum DeclaredType {
    /// No declaration: the listener accepts every event
    #[default]
    Raw,
    /// The listener contract with a direct type argument
    Parameterized(TypeArg),
    /// A declared type hierarchy to search for the listener contract
    Hierarchy(&'static ListenerType),
}

impl DeclaredType {
    /// Shorthand for a listener of exactly one event type (and its subtypes)
    pub const fn of(event_type: &'static TypeInfo) -> Self {
        DeclaredType::Parameterized(TypeArg::Class(event_type))
    }
}
