// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Late binding of listeners registered by name

use crate::error::ResolveError;
use crate::listener::{Listener, ListenerName};
use std::sync::Arc;

/// Looks up listeners registered by name
///
/// Called once per publish for each by-name listener, immediately before
/// its delivery and outside the registry lock. Implementations may publish
/// to or register with the same multicaster.
pub trait ListenerResolver: Send + Sync {
    fn resolve(&self, name: &ListenerName) -> Result<Arc<dyn Listener>, ResolveError>;
}

impl<R: ListenerResolver + ?Sized> ListenerResolver for Arc<R> {
    fn resolve(&self, name: &ListenerName) -> Result<Arc<dyn Listener>, ResolveError> {
        (**self).resolve(name)
    }
}
