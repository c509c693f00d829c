// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{run_and_report, ExecutorError};
use relay_core::{DeliveryTask, TaskExecutor};
use tokio::runtime::Handle;

/// Runs tasks on a tokio runtime's blocking pool
///
/// Listeners are synchronous, so deliveries go to `spawn_blocking` rather
/// than onto the async workers.
#[derive(Clone, Debug)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Bind to the runtime of the calling context
    pub fn current() -> Result<Self, ExecutorError> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl TaskExecutor for TokioExecutor {
    fn execute(&self, task: DeliveryTask) {
        // Detached: the outcome is reported by run_and_report
        drop(self.handle.spawn_blocking(move || run_and_report(task)));
    }
}
