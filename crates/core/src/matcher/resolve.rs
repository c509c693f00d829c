// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Search for the listener contract's type argument in a declared type

use crate::signature::{DeclaredType, ListenerType, Supertype, TypeArg};

/// The type argument given to the listener contract, if any declaration supplies one
///
/// Each level of a hierarchy searches its interfaces in declaration order
/// (recursing into nested declarations) before moving up to its superclass.
/// Raw uses of the contract contribute nothing and the search continues.
pub fn find_type_argument(declared: DeclaredType) -> Option<TypeArg> {
    match declared {
        DeclaredType::Raw => None,
        DeclaredType::Parameterized(arg) => Some(arg),
        DeclaredType::Hierarchy(ty) => search_hierarchy(ty),
    }
}

fn search_hierarchy(ty: &'static ListenerType) -> Option<TypeArg> {
    let mut level = Some(ty);
    while let Some(current) = level {
        if let Some(arg) = search_interfaces(current.interfaces()) {
            return Some(arg);
        }
        level = current.superclass();
    }
    None
}

fn search_interfaces(interfaces: &'static [Supertype]) -> Option<TypeArg> {
    interfaces.iter().find_map(|supertype| match supertype {
        Supertype::Listener(arg) => Some(*arg),
        Supertype::RawListener => None,
        Supertype::Type(nested) => search_hierarchy(nested),
    })
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
