//! Delivery order specs
//!
//! Listeners run in registration order, each at most once per publish.

use crate::prelude::*;
use relay_core::{Event, FnListener};
use std::sync::Mutex;

#[test]
fn listeners_run_in_registration_order() {
    let multicaster = Multicaster::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    for name in ["first", "second"] {
        let seen = Arc::clone(&seen);
        multicaster.add_listener(Arc::new(FnListener::new(name, move |_event: &dyn Event| {
            seen.lock().unwrap().push(name);
            Ok(())
        })));
    }

    let delivered = multicaster.publish(OrderPlaced::new(1)).unwrap();

    assert_eq!(delivered, 2);
    assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn typed_listeners_only_see_matching_events() {
    let multicaster = Multicaster::new();
    let orders = RecordingListener::for_type("orders", &ORDER_EVENT);
    let payments = RecordingListener::for_type("payments", &PAYMENT_RECEIVED);
    multicaster.add_listener(orders.clone());
    multicaster.add_listener(payments.clone());

    multicaster.publish(OrderPlaced::new(1)).unwrap();
    multicaster.publish(PaymentReceived).unwrap();

    assert_eq!(orders.received(), vec!["OrderPlaced"]);
    assert_eq!(payments.received(), vec!["PaymentReceived"]);
}

#[test]
fn registering_twice_delivers_once() {
    let multicaster = Multicaster::new();
    let audit = RecordingListener::new("audit");
    assert!(multicaster.add_listener(audit.clone()));
    assert!(!multicaster.add_listener(audit.clone()));

    multicaster.publish(PaymentReceived).unwrap();

    assert_eq!(audit.count(), 1);
}

#[test]
fn removed_listeners_stop_receiving_until_added_again() {
    let multicaster = Multicaster::new();
    let audit = RecordingListener::new("audit");
    multicaster.add_listener(audit.clone());
    multicaster.publish(PaymentReceived).unwrap();

    assert!(multicaster.remove_listener(&*audit));
    multicaster.publish(PaymentReceived).unwrap();
    assert_eq!(audit.count(), 1);

    multicaster.add_listener(audit.clone());
    multicaster.publish(PaymentReceived).unwrap();
    assert_eq!(audit.count(), 2);
}
