//! Listener-by-name specs
//!
//! Names are resolved through the container at publish time, after the
//! directly registered listeners.

use crate::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::Duration;

#[test]
fn named_listeners_follow_direct_ones() {
    let container = ListenerContainer::new();
    let named = RecordingListener::new("named");
    container.register("named", named.clone());
    let multicaster = with_container(&container);
    let direct = RecordingListener::new("direct");

    multicaster.add_listener_by_name("named").unwrap();
    multicaster.add_listener(direct.clone());

    let event = OrderPlaced::new(3);
    let listeners = multicaster.listeners_for(&event).unwrap();

    assert_eq!(listeners.len(), 2);
    assert!(same_listener(listeners[0].as_ref(), &*direct));
    assert!(same_listener(listeners[1].as_ref(), &*named));
}

#[test]
fn a_name_bound_to_a_direct_listener_is_delivered_once() {
    let container = ListenerContainer::new();
    let audit = RecordingListener::new("audit");
    container.register("audit", audit.clone());
    let multicaster = with_container(&container);

    multicaster.add_listener(audit.clone());
    multicaster.add_listener_by_name("audit").unwrap();

    assert_eq!(multicaster.publish(PaymentReceived).unwrap(), 1);
    assert_eq!(audit.count(), 1);
}

#[test]
fn unresolvable_name_fails_the_publish() {
    let container = ListenerContainer::new();
    let a = RecordingListener::new("a");
    let b = RecordingListener::new("b");
    container.register("a", a.clone());
    container.register("b", b.clone());
    let multicaster = with_container(&container);

    for name in ["a", "b", "c"] {
        multicaster.add_listener_by_name(name).unwrap();
    }

    let err = multicaster.publish(PaymentReceived).unwrap_err();

    assert!(matches!(err, MulticastError::Resolution { ref name, .. } if name == "c"));
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 1);
}

#[test]
fn names_resolve_to_the_current_binding() {
    let container = ListenerContainer::new();
    let old = RecordingListener::new("old");
    let new = RecordingListener::new("new");
    container.register("handler", old.clone());
    let multicaster = with_container(&container);
    multicaster.add_listener_by_name("handler").unwrap();

    multicaster.publish(PaymentReceived).unwrap();
    container.register("handler", new.clone());
    multicaster.publish(PaymentReceived).unwrap();

    assert_eq!(old.count(), 1);
    assert_eq!(new.count(), 1);
}

#[test]
fn removing_a_name_stops_resolution() {
    let container = ListenerContainer::new();
    let audit = RecordingListener::new("audit");
    container.register("audit", audit.clone());
    let multicaster = with_container(&container);
    multicaster.add_listener_by_name("audit").unwrap();

    assert!(multicaster.remove_listener_by_name("audit").unwrap());
    container.deregister("audit");

    assert_eq!(multicaster.publish(PaymentReceived).unwrap(), 0);
    assert_eq!(audit.count(), 0);
}

#[test]
fn blank_names_are_rejected() {
    let multicaster = Multicaster::new();
    assert!(multicaster.add_listener_by_name("  ").is_err());
    assert!(multicaster.registry().is_empty());
}

#[test]
fn factories_may_publish_while_being_resolved() {
    let container = ListenerContainer::new();
    let multicaster = Arc::new(with_container(&container));
    let lazy = RecordingListener::new("lazy");
    let announced = Arc::new(AtomicBool::new(false));

    let publisher = Arc::clone(&multicaster);
    let instance = lazy.clone();
    container.register_factory("lazy", move || {
        if !announced.swap(true, Ordering::SeqCst) {
            publisher
                .publish(PaymentReceived)
                .map_err(|e| e.to_string())?;
        }
        Ok(instance.clone() as Arc<dyn Listener>)
    });
    multicaster.add_listener_by_name("lazy").unwrap();

    let (tx, rx) = mpsc::channel();
    let worker = Arc::clone(&multicaster);
    std::thread::spawn(move || {
        tx.send(worker.publish(OrderPlaced::new(9)).is_ok()).ok();
    });

    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
    assert_eq!(lazy.received(), vec!["PaymentReceived", "OrderPlaced"]);
}
