// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake executor for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use relay_core::{DeliveryTask, MulticastError, TaskExecutor};
use std::sync::{Arc, Mutex};

/// Executor that queues tasks until the test runs them
#[derive(Clone, Default)]
pub struct QueuedExecutor {
    tasks: Arc<Mutex<Vec<DeliveryTask>>>,
}

impl QueuedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener names of the queued tasks, in submission order
    pub fn pending(&self) -> Vec<String> {
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|task| task.listener().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run queued tasks in submission order
    pub fn run_all(&self) -> Vec<Result<(), MulticastError>> {
        self.take().into_iter().map(DeliveryTask::run).collect()
    }

    /// Run queued tasks newest first, as an out-of-order pool might
    pub fn run_reversed(&self) -> Vec<Result<(), MulticastError>> {
        self.take().into_iter().rev().map(DeliveryTask::run).collect()
    }

    fn take(&self) -> Vec<DeliveryTask> {
        std::mem::take(&mut *self.tasks.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl TaskExecutor for QueuedExecutor {
    fn execute(&self, task: DeliveryTask) {
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(task);
    }
}
