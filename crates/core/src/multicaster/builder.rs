// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{ExecutionStrategy, Multicaster};
use crate::config::{DeliveryMode, MulticasterConfig};
use crate::error::ConfigError;
use crate::executor::TaskExecutor;
use crate::loading::TypeLoading;
use crate::matcher::{ProxyIntrospector, TargetAware, TypeMatcher};
use crate::registry::Registry;
use crate::resolver::ListenerResolver;
use parking_lot::RwLock;
use std::sync::Arc;

/// Assembles a [`Multicaster`] from its collaborators and configuration
pub struct MulticasterBuilder {
    resolver: Option<Arc<dyn ListenerResolver>>,
    proxies: Arc<dyn ProxyIntrospector>,
    loading: Option<Arc<dyn TypeLoading>>,
    strategy: Option<ExecutionStrategy>,
    executor: Option<Arc<dyn TaskExecutor>>,
    config: MulticasterConfig,
}

impl Default for MulticasterBuilder {
    fn default() -> Self {
        Self {
            resolver: None,
            proxies: Arc::new(TargetAware),
            loading: None,
            strategy: None,
            executor: None,
            config: MulticasterConfig::default(),
        }
    }
}

impl MulticasterBuilder {
    /// Resolver for listeners registered by name
    pub fn resolver(mut self, resolver: Arc<dyn ListenerResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn proxy_introspector(mut self, proxies: Arc<dyn ProxyIntrospector>) -> Self {
        self.proxies = proxies;
        self
    }

    /// Loading-context check deciding which event types may be cached
    pub fn type_loading(mut self, loading: Arc<dyn TypeLoading>) -> Self {
        self.loading = Some(loading);
        self
    }

    /// Explicit strategy; takes precedence over the configured delivery mode
    pub fn execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Executor used when the configured delivery mode is delegated
    pub fn executor(mut self, executor: Arc<dyn TaskExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn config(mut self, config: MulticasterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(mut self) -> Result<Multicaster, ConfigError> {
        let strategy = match self.strategy.take() {
            Some(strategy) => strategy,
            None => match self.config.delivery.mode {
                DeliveryMode::Synchronous => ExecutionStrategy::Synchronous,
                DeliveryMode::Delegated => {
                    let executor = self.executor.take().ok_or(ConfigError::MissingExecutor)?;
                    ExecutionStrategy::Delegated(executor)
                }
            },
        };
        Ok(self.into_multicaster(strategy))
    }

    pub(super) fn into_multicaster(self, strategy: ExecutionStrategy) -> Multicaster {
        tracing::debug!(
            ?strategy,
            caching = self.config.cache.enabled,
            resolver = self.resolver.is_some(),
            "multicaster ready"
        );
        Multicaster {
            registry: Registry::new(),
            matcher: TypeMatcher::new(self.proxies),
            resolver: self.resolver,
            loading: self.loading,
            caching: self.config.cache.enabled,
            strategy: RwLock::new(strategy),
        }
    }
}
