// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static type descriptors with identity semantics
//!
//! Every event and source type is described by a `'static` [`TypeInfo`].
//! Two [`TypeRef`]s are equal only when they point at the same descriptor,
//! so two types that happen to share a name are still distinct.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies the loading context a type was defined in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoaderId(pub &'static str);

impl fmt::Display for LoaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runtime description of a type: name, declared supertypes and origin
///
/// Declared as a `static` with the const builders:
///
/// ```
/// use relay_core::TypeInfo;
///
/// static DOMAIN_EVENT: TypeInfo = TypeInfo::new("DomainEvent");
/// static ORDER_PLACED: TypeInfo = TypeInfo::new("OrderPlaced").extends(&[&DOMAIN_EVENT]);
/// ```
#[derive(Debug)]
pub struct TypeInfo {
    name: &'static str,
    supertypes: &'static [&'static TypeInfo],
    component: Option<&'static TypeInfo>,
    loader: Option<LoaderId>,
}

impl TypeInfo {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            supertypes: &[],
            component: None,
            loader: None,
        }
    }

    /// An array type whose elements are `component`
    pub const fn array_of(name: &'static str, component: &'static TypeInfo) -> Self {
        Self {
            name,
            supertypes: &[],
            component: Some(component),
            loader: None,
        }
    }

    /// Declare direct supertypes, most significant first
    pub const fn extends(self, supertypes: &'static [&'static TypeInfo]) -> Self {
        Self { supertypes, ..self }
    }

    /// Record the loading context that defined this type
    pub const fn loaded_by(self, loader: LoaderId) -> Self {
        Self {
            loader: Some(loader),
            ..self
        }
    }
}

/// Copyable handle to a `'static` [`TypeInfo`], compared by identity
#[derive(Clone, Copy)]
pub struct TypeRef(&'static TypeInfo);

impl TypeRef {
    pub const fn of(info: &'static TypeInfo) -> Self {
        Self(info)
    }

    pub fn name(self) -> &'static str {
        self.0.name
    }

    /// Direct supertypes in declaration order
    pub fn supertypes(self) -> impl Iterator<Item = TypeRef> {
        self.0.supertypes.iter().map(|info| TypeRef(*info))
    }

    /// Element type when this is an array type
    pub fn component(self) -> Option<TypeRef> {
        self.0.component.map(TypeRef)
    }

    pub fn is_array(self) -> bool {
        self.0.component.is_some()
    }

    pub fn loader(self) -> Option<LoaderId> {
        self.0.loader
    }

    /// Whether a value of type `other` can be used where `self` is expected
    ///
    /// True for the same type, for any transitive subtype, and for array
    /// types whose components are assignable.
    pub fn is_assignable_from(self, other: TypeRef) -> bool {
        if self == other {
            return true;
        }
        if let (Some(mine), Some(theirs)) = (self.component(), other.component()) {
            return mine.is_assignable_from(theirs);
        }
        other.supertypes().any(|parent| self.is_assignable_from(parent))
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.0.name).finish()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

impl From<&'static TypeInfo> for TypeRef {
    fn from(info: &'static TypeInfo) -> Self {
        Self(info)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
