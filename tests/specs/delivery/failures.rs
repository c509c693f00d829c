//! Delivery failure specs
//!
//! Synchronous delivery stops at the first failure and reports it to the
//! publisher. Delegated delivery isolates failures inside the task.

use crate::prelude::*;

#[test]
fn synchronous_failure_stops_later_listeners() {
    let multicaster = Multicaster::new();
    let broken = RecordingListener::failing("broken", "disk full");
    let after = RecordingListener::new("after");
    multicaster.add_listener(broken.clone());
    multicaster.add_listener(after.clone());

    let err = multicaster.publish(PaymentReceived).unwrap_err();

    assert!(matches!(
        err,
        MulticastError::Delivery { ref listener, event: "PaymentReceived", .. } if listener == "broken"
    ));
    assert_eq!(broken.count(), 1);
    assert_eq!(after.count(), 0);
}

#[test]
fn delegated_failure_does_not_reach_other_listeners_or_the_publisher() {
    let multicaster = Multicaster::builder()
        .execution_strategy(ExecutionStrategy::Delegated(Arc::new(TracedExecutor::new(
            ThreadExecutor::new("specs-delivery-"),
        ))))
        .build()
        .unwrap();
    let broken = RecordingListener::failing("broken", "disk full");
    let after = RecordingListener::new("after");
    multicaster.add_listener(broken.clone());
    multicaster.add_listener(after.clone());

    let submitted = multicaster.publish(PaymentReceived).unwrap();

    assert_eq!(submitted, 2);
    eventually(|| broken.count() == 1 && after.count() == 1);
}

#[test]
fn delegated_tasks_may_complete_out_of_order() {
    let queue = QueuedExecutor::new();
    let multicaster = Multicaster::builder()
        .execution_strategy(ExecutionStrategy::Delegated(Arc::new(queue.clone())))
        .build()
        .unwrap();
    let first = RecordingListener::new("first");
    let second = RecordingListener::new("second");
    multicaster.add_listener(first.clone());
    multicaster.add_listener(second.clone());

    multicaster.publish(OrderPlaced::new(7)).unwrap();
    assert_eq!(queue.pending(), vec!["first", "second"]);
    assert_eq!(first.count(), 0);

    let outcomes = queue.run_reversed();
    assert!(outcomes.iter().all(Result::is_ok));
    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 1);
}
