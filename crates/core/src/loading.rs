// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loading-context membership checks used to decide cache eligibility

use crate::types::{LoaderId, TypeRef};

/// Decides whether a type may be retained as a cache key
pub trait TypeLoading: Send + Sync {
    fn is_cache_safe(&self, ty: TypeRef) -> bool;
}

/// A loading context and its ancestors, nearest first
///
/// A type is cache-safe when it has no loader, or when its loader is the
/// context itself or one of the context's ancestors. Types from child or
/// sibling contexts are not retained.
#[derive(Debug, Clone)]
pub struct LoaderHierarchy {
    chain: Vec<LoaderId>,
}

impl LoaderHierarchy {
    pub fn new(context: LoaderId) -> Self {
        Self {
            chain: vec![context],
        }
    }

    /// Append the next ancestor
    pub fn with_parent(mut self, parent: LoaderId) -> Self {
        self.chain.push(parent);
        self
    }

    pub fn context(&self) -> LoaderId {
        self.chain[0]
    }

    pub fn contains(&self, loader: LoaderId) -> bool {
        self.chain.contains(&loader)
    }
}

impl TypeLoading for LoaderHierarchy {
    fn is_cache_safe(&self, ty: TypeRef) -> bool {
        match ty.loader() {
            None => true,
            Some(loader) => self.contains(loader),
        }
    }
}

#[cfg(test)]
#[path = "loading_tests.rs"]
mod tests;
