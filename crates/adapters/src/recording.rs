// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording listener for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use relay_core::{DeclaredType, Event, Listener, ListenerError, TypeInfo};
use std::sync::{Arc, Mutex};

/// Listener that records the type name of every event it receives
pub struct RecordingListener {
    name: String,
    declared: DeclaredType,
    failure: Option<String>,
    received: Mutex<Vec<&'static str>>,
}

impl RecordingListener {
    /// Accepts every event
    pub fn new(name: &str) -> Arc<Self> {
        Self::build(name, DeclaredType::Raw, None)
    }

    /// Accepts `event_type` and its subtypes
    pub fn for_type(name: &str, event_type: &'static TypeInfo) -> Arc<Self> {
        Self::build(name, DeclaredType::of(event_type), None)
    }

    /// Records, then fails every delivery with `message`
    pub fn failing(name: &str, message: &str) -> Arc<Self> {
        Self::build(name, DeclaredType::Raw, Some(message.to_string()))
    }

    fn build(name: &str, declared: DeclaredType, failure: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            declared,
            failure,
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn received(&self) -> Vec<&'static str> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Listener for RecordingListener {
    fn on_event(&self, event: &dyn Event) -> Result<(), ListenerError> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.event_type().name());
        match &self.failure {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> DeclaredType {
        self.declared
    }
}
