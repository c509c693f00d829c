//! Retrieval cache specs under concurrent publishing

use crate::prelude::*;

const THREADS: usize = 8;
const PUBLISHES: usize = 1000;

#[test]
fn concurrent_publishes_share_one_retrieval() {
    let multicaster = Multicaster::new();
    let orders = RecordingListener::for_type("orders", &ORDER_EVENT);
    let payments = RecordingListener::for_type("payments", &PAYMENT_RECEIVED);
    multicaster.add_listener(orders.clone());
    multicaster.add_listener(payments.clone());

    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for i in 0..PUBLISHES {
                    multicaster.publish(OrderPlaced::new(i as u32)).unwrap();
                }
            });
        }
    });

    let stats = multicaster.cache_stats();
    assert_eq!(stats.builds, 1);
    assert_eq!(orders.count(), THREADS * PUBLISHES);
    assert_eq!(payments.count(), 0);
}

#[test]
fn registration_invalidates_cached_retrievals() {
    let multicaster = Multicaster::new();
    let early = RecordingListener::new("early");
    multicaster.add_listener(early.clone());
    multicaster.publish(PaymentReceived).unwrap();
    multicaster.publish(PaymentReceived).unwrap();
    assert_eq!(multicaster.cache_stats().builds, 1);

    let late = RecordingListener::new("late");
    multicaster.add_listener(late.clone());
    multicaster.publish(PaymentReceived).unwrap();

    assert_eq!(multicaster.cache_stats().builds, 2);
    assert_eq!(early.count(), 3);
    assert_eq!(late.count(), 1);
}
