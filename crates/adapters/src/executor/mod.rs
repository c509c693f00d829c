// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task executors for delegated delivery

mod inline;
mod runtime;
mod thread;

pub use inline::InlineExecutor;
pub use runtime::TokioExecutor;
pub use thread::ThreadExecutor;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::QueuedExecutor;

use relay_core::{DeliveryTask, ExecutorKind, ExecutorSettings, TaskExecutor};
use std::sync::Arc;
use thiserror::Error;

/// Thread name prefix when none is configured
pub const DEFAULT_THREAD_PREFIX: &str = "relay-delivery-";

/// Errors building an executor
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("no tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Build the executor described by `settings`
///
/// The tokio executor binds to the runtime of the calling context.
pub fn executor_from_settings(
    settings: &ExecutorSettings,
) -> Result<Arc<dyn TaskExecutor>, ExecutorError> {
    let executor: Arc<dyn TaskExecutor> = match settings.kind {
        ExecutorKind::Tokio => Arc::new(TokioExecutor::current()?),
        ExecutorKind::Thread => Arc::new(ThreadExecutor::new(
            settings
                .thread_name_prefix
                .as_deref()
                .unwrap_or(DEFAULT_THREAD_PREFIX),
        )),
        ExecutorKind::Inline => Arc::new(InlineExecutor),
    };
    tracing::debug!(kind = ?settings.kind, "executor ready");
    Ok(executor)
}

/// Run a task, logging its failure; delegated failures end here
pub(crate) fn run_and_report(task: DeliveryTask) {
    let listener = task.listener().to_string();
    let event = task.event_type();
    match task.run() {
        Ok(()) => tracing::trace!(listener, event = %event, "delivered"),
        Err(e) => tracing::error!(
            listener,
            event = %event,
            error = %e,
            "delegated delivery failed"
        ),
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
