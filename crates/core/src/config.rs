// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multicaster configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [delivery]
//! mode = "delegated"
//!
//! [delivery.executor]
//! kind = "thread"
//! thread_name_prefix = "events-"
//!
//! [cache]
//! enabled = true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level multicaster settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulticasterConfig {
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl MulticasterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub mode: DeliveryMode,
    /// Executor to build for delegated delivery
    #[serde(default)]
    pub executor: ExecutorSettings,
}

/// How events reach listeners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Listeners run on the publishing thread, in order
    #[default]
    Synchronous,
    /// Each delivery is handed to a task executor
    Delegated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorSettings {
    #[serde(default)]
    pub kind: ExecutorKind,
    /// Prefix for worker thread names (thread executor only)
    #[serde(default)]
    pub thread_name_prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorKind {
    /// Blocking tasks on the ambient tokio runtime
    #[default]
    Tokio,
    /// One named OS thread per delivery
    Thread,
    /// Run on the submitting thread
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
