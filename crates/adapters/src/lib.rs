// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Collaborator implementations for relay-core

pub mod container;
pub mod executor;
pub mod logging;
pub mod traced;

pub use container::ListenerContainer;
pub use executor::{
    executor_from_settings, ExecutorError, InlineExecutor, ThreadExecutor, TokioExecutor,
};
pub use logging::LoggingError;
pub use traced::{TracedExecutor, TracedResolver};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod recording;

#[cfg(any(test, feature = "test-support"))]
pub use container::FakeResolver;
#[cfg(any(test, feature = "test-support"))]
pub use executor::QueuedExecutor;
#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingListener;
