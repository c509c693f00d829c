//! Shared event types and helpers for the behavioral tests

#![allow(dead_code)]

pub use relay_adapters::{
    ListenerContainer, QueuedExecutor, RecordingListener, ThreadExecutor, TracedExecutor,
    TracedResolver,
};
pub use relay_core::{
    impl_event, same_listener, ApplicationEvent, ExecutionStrategy, Listener, MulticastError,
    Multicaster, MulticasterConfig, TaskExecutor, TypeInfo,
};
pub use std::sync::Arc;

use std::time::{Duration, Instant};

pub static ORDER_EVENT: TypeInfo = TypeInfo::new("OrderEvent");
pub static ORDER_PLACED: TypeInfo = TypeInfo::new("OrderPlaced").extends(&[&ORDER_EVENT]);
pub static PAYMENT_RECEIVED: TypeInfo = TypeInfo::new("PaymentReceived");

pub struct OrderPlaced {
    pub base: ApplicationEvent,
    pub id: u32,
}

impl OrderPlaced {
    pub fn new(id: u32) -> Self {
        Self {
            base: ApplicationEvent::new(),
            id,
        }
    }
}

impl_event!(OrderPlaced => ORDER_PLACED, source = base);

pub struct PaymentReceived;

impl_event!(PaymentReceived => PAYMENT_RECEIVED);

/// Multicaster resolving names through `container`
pub fn with_container(container: &ListenerContainer) -> Multicaster {
    Multicaster::builder()
        .resolver(Arc::new(TracedResolver::new(container.clone())))
        .build()
        .unwrap()
}

/// Wait until `done` holds, failing after a few seconds
pub fn eventually(mut done: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done() {
        assert!(Instant::now() < deadline, "condition not reached in time");
        std::thread::sleep(Duration::from_millis(5));
    }
}
