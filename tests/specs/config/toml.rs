//! Configuration specs
//!
//! A multicaster built from TOML picks its delivery mode and executor from
//! the file.

use crate::prelude::*;
use relay_adapters::executor_from_settings;
use relay_core::{ConfigError, DeliveryMode, ExecutorKind};

const DELEGATED_INLINE: &str = r#"
[delivery]
mode = "delegated"

[delivery.executor]
kind = "inline"

[cache]
enabled = false
"#;

#[test]
fn delegated_config_with_inline_executor() {
    let config = MulticasterConfig::from_toml_str(DELEGATED_INLINE).unwrap();
    assert_eq!(config.delivery.mode, DeliveryMode::Delegated);
    assert_eq!(config.delivery.executor.kind, ExecutorKind::Inline);

    let executor = executor_from_settings(&config.delivery.executor).unwrap();
    let multicaster = Multicaster::builder()
        .config(config)
        .executor(executor)
        .build()
        .unwrap();
    let audit = RecordingListener::new("audit");
    multicaster.add_listener(audit.clone());

    multicaster.publish(PaymentReceived).unwrap();
    multicaster.publish(PaymentReceived).unwrap();

    assert!(matches!(
        multicaster.execution_strategy(),
        ExecutionStrategy::Delegated(_)
    ));
    assert_eq!(audit.count(), 2);
    assert_eq!(multicaster.cache_stats().builds, 0);
}

#[test]
fn delegated_config_without_executor_is_rejected() {
    let config = MulticasterConfig::from_toml_str(DELEGATED_INLINE).unwrap();
    let result = Multicaster::builder().config(config).build();
    assert!(matches!(result, Err(ConfigError::MissingExecutor)));
}

#[test]
fn empty_config_is_synchronous_and_cached() {
    let config = MulticasterConfig::from_toml_str("").unwrap();
    let multicaster = Multicaster::builder().config(config).build().unwrap();
    let audit = RecordingListener::new("audit");
    multicaster.add_listener(audit.clone());

    multicaster.publish(PaymentReceived).unwrap();

    assert!(matches!(
        multicaster.execution_strategy(),
        ExecutionStrategy::Synchronous
    ));
    assert_eq!(audit.count(), 1);
    assert_eq!(multicaster.cache_stats().builds, 1);
}
