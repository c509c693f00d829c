// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::run_and_report;
use relay_core::{DeliveryTask, TaskExecutor};

/// Runs each task on the submitting thread before `execute` returns
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineExecutor;

impl TaskExecutor for InlineExecutor {
    fn execute(&self, task: DeliveryTask) {
        run_and_report(task);
    }
}
