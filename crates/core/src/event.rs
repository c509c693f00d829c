// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events, event sources and their runtime descriptors

use crate::types::TypeRef;
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The object an event originated from
pub trait EventSource: Send + Sync + 'static {
    fn source_type(&self) -> TypeRef;
}

/// A value that can be published through the multicaster
///
/// Implement by hand or with [`impl_event!`](crate::impl_event).
pub trait Event: Any + Send + Sync {
    /// Runtime type used for listener matching
    fn event_type(&self) -> TypeRef;

    /// Where the event came from, if anywhere
    fn source(&self) -> Option<&dyn EventSource> {
        None
    }

    /// Downcast support for listeners that know the concrete type
    fn as_any(&self) -> &dyn Any;

    fn descriptor(&self) -> EventDescriptor {
        EventDescriptor::new(self.event_type(), self.source().map(|s| s.source_type()))
    }
}

/// Runtime identity of a published event and of its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventDescriptor {
    event_type: TypeRef,
    source_type: Option<TypeRef>,
}

impl EventDescriptor {
    pub fn new(event_type: TypeRef, source_type: Option<TypeRef>) -> Self {
        Self {
            event_type,
            source_type,
        }
    }

    pub fn event_type(&self) -> TypeRef {
        self.event_type
    }

    pub fn source_type(&self) -> Option<TypeRef> {
        self.source_type
    }
}

impl fmt::Display for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_type {
            Some(source) => write!(f, "{} from {}", self.event_type, source),
            None => write!(f, "{}", self.event_type),
        }
    }
}

/// Common state embedded by application events: source and creation time
#[derive(Clone)]
pub struct ApplicationEvent {
    source: Option<Arc<dyn EventSource>>,
    timestamp: DateTime<Utc>,
}

impl ApplicationEvent {
    pub fn new() -> Self {
        Self {
            source: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_source(source: Arc<dyn EventSource>) -> Self {
        Self {
            source: Some(source),
            timestamp: Utc::now(),
        }
    }

    pub fn source(&self) -> Option<&dyn EventSource> {
        self.source.as_deref()
    }

    /// When the event was created
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Default for ApplicationEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ApplicationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationEvent")
            .field("source", &self.source.as_ref().map(|s| s.source_type()))
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// Implements [`Event`] for a type backed by a `static` [`TypeInfo`](crate::TypeInfo)
///
/// ```
/// use relay_core::{impl_event, ApplicationEvent, TypeInfo};
///
/// static ORDER_PLACED: TypeInfo = TypeInfo::new("OrderPlaced");
///
/// struct OrderPlaced {
///     base: ApplicationEvent,
/// }
///
/// impl_event!(OrderPlaced => ORDER_PLACED, source = base);
/// ```
#[macro_export]
macro_rules! impl_event {
    ($ty:ty => $info:path) => {
        impl $crate::Event for $ty {
            fn event_type(&self) -> $crate::TypeRef {
                $crate::TypeRef::of(&$info)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
    ($ty:ty => $info:path, source = $base:ident) => {
        impl $crate::Event for $ty {
            fn event_type(&self) -> $crate::TypeRef {
                $crate::TypeRef::of(&$info)
            }

            fn source(&self) -> ::std::option::Option<&dyn $crate::EventSource> {
                self.$base.source()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
