// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::run_and_report;
use relay_core::{DeliveryTask, TaskExecutor};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Spawns one named OS thread per task
///
/// Threads are named `<prefix><n>` with `n` counting from 1.
#[derive(Debug)]
pub struct ThreadExecutor {
    prefix: String,
    count: AtomicUsize,
}

impl ThreadExecutor {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: AtomicUsize::new(0),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn next_name(&self) -> String {
        let n = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

impl TaskExecutor for ThreadExecutor {
    fn execute(&self, task: DeliveryTask) {
        let name = self.next_name();
        let listener = task.listener().to_string();
        let spawned = std::thread::Builder::new()
            .name(name.clone())
            .spawn(move || run_and_report(task));
        if let Err(e) = spawned {
            tracing::error!(thread = %name, listener, error = %e, "failed to spawn delivery thread");
        }
    }
}
