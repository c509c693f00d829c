// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for registration, resolution, delivery and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Error raised by a listener while handling an event
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Rejected registrations; nothing is mutated when these are returned
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("listener name must not be blank")]
    BlankName,
}

/// Errors from a [`ListenerResolver`](crate::ListenerResolver)
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no listener named '{0}'")]
    NotFound(String),
    #[error("listener '{name}' is unavailable: {reason}")]
    Unavailable { name: String, reason: String },
}

/// Errors surfaced to the publisher
#[derive(Debug, Error)]
pub enum MulticastError {
    #[error("no listener resolver configured, cannot resolve listener '{0}'")]
    NoResolver(String),
    #[error("failed to resolve listener '{name}': {source}")]
    Resolution {
        name: String,
        #[source]
        source: ResolveError,
    },
    #[error("listener '{listener}' failed to handle {event}: {source}")]
    Delivery {
        listener: String,
        event: &'static str,
        #[source]
        source: ListenerError,
    },
}

impl MulticastError {
    /// Name of the listener the failure concerns
    pub fn listener(&self) -> &str {
        match self {
            MulticastError::NoResolver(name) => name,
            MulticastError::Resolution { name, .. } => name,
            MulticastError::Delivery { listener, .. } => listener,
        }
    }
}

/// Errors loading or applying configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("delegated delivery requires an executor")]
    MissingExecutor,
}
