// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delegated delivery: tasks and the executor seam

use crate::error::MulticastError;
use crate::types::TypeRef;
use std::fmt;
use std::sync::Arc;

type DeliveryJob = Box<dyn FnOnce() -> Result<(), MulticastError> + Send>;

/// One delivery of one event to one listener, ready to run
pub struct DeliveryTask {
    listener: String,
    event_type: TypeRef,
    job: DeliveryJob,
}

impl DeliveryTask {
    pub fn new<F>(listener: impl Into<String>, event_type: TypeRef, job: F) -> Self
    where
        F: FnOnce() -> Result<(), MulticastError> + Send + 'static,
    {
        Self {
            listener: listener.into(),
            event_type,
            job: Box::new(job),
        }
    }

    /// A task that reports `error` when run, for deliveries that could not be prepared
    pub fn failed(event_type: TypeRef, error: MulticastError) -> Self {
        let listener = error.listener().to_string();
        Self::new(listener, event_type, move || Err(error))
    }

    pub fn listener(&self) -> &str {
        &self.listener
    }

    pub fn event_type(&self) -> TypeRef {
        self.event_type
    }

    pub fn run(self) -> Result<(), MulticastError> {
        (self.job)()
    }
}

impl fmt::Debug for DeliveryTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryTask")
            .field("listener", &self.listener)
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}

/// Runs delivery tasks on behalf of the multicaster
///
/// Failures reported by [`DeliveryTask::run`] belong to the executor; they
/// are never returned to the publisher.
pub trait TaskExecutor: Send + Sync {
    fn execute(&self, task: DeliveryTask);
}

impl<E: TaskExecutor + ?Sized> TaskExecutor for Arc<E> {
    fn execute(&self, task: DeliveryTask) {
        (**self).execute(task)
    }
}
