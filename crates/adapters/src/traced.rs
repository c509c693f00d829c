// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced collaborator wrappers for consistent observability

use relay_core::{DeliveryTask, Listener, ListenerName, ListenerResolver, ResolveError, TaskExecutor};
use std::sync::Arc;
use std::time::Instant;

/// Wrapper that adds tracing to any ListenerResolver
#[derive(Clone)]
pub struct TracedResolver<R> {
    inner: R,
}

impl<R> TracedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: ListenerResolver> ListenerResolver for TracedResolver<R> {
    fn resolve(&self, name: &ListenerName) -> Result<Arc<dyn Listener>, ResolveError> {
        let span = tracing::debug_span!("resolver.resolve", name = %name);
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.resolve(name);
        let elapsed_us = start.elapsed().as_micros() as u64;

        match &result {
            Ok(listener) => tracing::debug!(listener = listener.name(), elapsed_us, "resolved"),
            Err(e) => tracing::warn!(elapsed_us, error = %e, "resolution failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any TaskExecutor
///
/// Logs submission, then wraps each task so that queueing delay and run
/// time are recorded on whichever thread eventually runs it.
#[derive(Clone)]
pub struct TracedExecutor<E> {
    inner: E,
}

impl<E> TracedExecutor<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: TaskExecutor> TaskExecutor for TracedExecutor<E> {
    fn execute(&self, task: DeliveryTask) {
        let listener = task.listener().to_string();
        let event = task.event_type();
        let span = tracing::debug_span!("executor.execute", listener = %listener, event = %event);
        let _guard = span.enter();

        tracing::debug!("submitting");
        let submitted = Instant::now();
        let traced = DeliveryTask::new(listener.clone(), event, move || {
            let span = tracing::debug_span!("delivery", listener = %listener, event = %event);
            let _guard = span.enter();

            let queued_ms = submitted.elapsed().as_millis() as u64;
            let start = Instant::now();
            let result = task.run();
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::debug!(queued_ms, elapsed_ms, "delivered"),
                Err(e) => tracing::warn!(queued_ms, elapsed_ms, error = %e, "delivery failed"),
            }
            result
        });
        self.inner.execute(traced);
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
