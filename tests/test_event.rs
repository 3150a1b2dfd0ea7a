//! Tests for the public event surface: construction, identity, field
//! access and the ordering contract.

use std::cmp::Ordering;

use des_core_rs::{compare, EventList, OrderViolation, SimEvent};

#[test]
fn test_builder_construction() {
    let event: SimEvent<&'static str> = SimEvent::new(15.8)
        .with_name("arrival")
        .with_payload("job-1");
    assert_eq!(event.time(), 15.8);
    assert_eq!(event.name().as_deref(), Some("arrival"));
    assert_eq!(*event.payload(), Some("job-1"));
    assert!(event.event_action().is_none());
}

#[test]
fn test_default_event() {
    let event: SimEvent = SimEvent::default();
    assert_eq!(event.time(), f64::NEG_INFINITY);
    assert!(event.name().is_none());
    assert!(event.payload().is_none());
    assert!(event.event_action().is_none());
}

#[test]
fn test_clone_is_same_event() {
    let mut list: EventList = EventList::default();
    let event = SimEvent::new(1.0);
    let handle = event.clone();
    assert_eq!(event, handle);
    assert!(SimEvent::ptr_eq(&event, &handle));

    // Enrolling through one handle is visible through the other.
    list.add(&event).unwrap();
    assert!(list.contains(&handle));
    assert!(!list.add(&handle).unwrap());
    assert!(list.remove(&handle));
    assert!(!list.contains(&event));
}

#[test]
fn test_equal_fields_are_not_equal_events() {
    let a: SimEvent = SimEvent::new(3.0).with_name("same");
    let b: SimEvent = SimEvent::new(3.0).with_name("same");
    assert_ne!(a, b);
}

#[test]
fn test_set_time_while_idle() {
    let event: SimEvent = SimEvent::new(1.0);
    event.set_time(9.0);
    assert_eq!(event.time(), 9.0);
    event.set_time(f64::INFINITY);
    assert_eq!(event.time(), f64::INFINITY);
}

#[test]
#[should_panic(expected = "enrolled")]
fn test_set_time_while_enrolled_panics() {
    let mut list: EventList = EventList::default();
    let event = SimEvent::new(1.0);
    list.add(&event).unwrap();
    event.set_time(2.0);
}

#[test]
fn test_set_time_allowed_again_after_removal() {
    let mut list: EventList = EventList::default();
    let event = SimEvent::new(1.0);
    list.add(&event).unwrap();
    list.remove(&event);
    event.set_time(2.0);
    assert_eq!(event.time(), 2.0);
}

#[test]
#[should_panic(expected = "NaN")]
fn test_nan_construction_panics() {
    let _: SimEvent = SimEvent::new(f64::NAN);
}

#[test]
fn test_name_and_payload_mutable_while_enrolled() {
    // Only time and tiebreaker are ordering inputs; the rest may change
    // freely while the event is pending.
    let mut list: EventList<u32> = EventList::default();
    let event: SimEvent<u32> = SimEvent::new(1.0);
    list.add(&event).unwrap();

    event.set_name(Some("renamed".to_string()));
    event.set_payload(Some(5));
    event.set_event_action(Some(des_core_rs::action(|_, _| Ok(()))));
    assert_eq!(event.name().as_deref(), Some("renamed"));
    assert_eq!(*event.payload(), Some(5));
    assert!(event.event_action().is_some());
    assert!(list.contains(&event));
}

#[test]
fn test_payload_take() {
    let event: SimEvent<Vec<u8>> = SimEvent::new(0.0).with_payload(vec![1, 2, 3]);
    assert_eq!(event.take_payload(), Some(vec![1, 2, 3]));
    assert_eq!(event.take_payload(), None);
}

#[test]
fn test_display_uses_name() {
    let named: SimEvent = SimEvent::new(0.0).with_name("departure");
    assert_eq!(format!("{}", named), "departure");

    let anonymous: SimEvent = SimEvent::new(0.0);
    assert!(format!("{}", anonymous).starts_with("event@"));
}

#[test]
fn test_compare_follows_enrolled_order() {
    let mut list: EventList = EventList::insertion_order();
    let first = SimEvent::new(5.0);
    let second = SimEvent::new(5.0);
    let later = SimEvent::new(6.0);
    list.add(&first).unwrap();
    list.add(&second).unwrap();
    list.add(&later).unwrap();

    assert_eq!(compare(&first, &second), Ok(Ordering::Less));
    assert_eq!(compare(&second, &later), Ok(Ordering::Less));
    assert_eq!(compare(&later, &first), Ok(Ordering::Greater));
    assert_eq!(compare(&first, &first.clone()), Ok(Ordering::Equal));
}

#[test]
fn test_compare_reports_distinct_events_with_equal_keys() {
    // Freshly constructed events share the sentinel tiebreaker until a
    // list assigns real ones; at equal times the order is undefined and
    // the comparison says so.
    let a: SimEvent = SimEvent::new(2.0);
    let b: SimEvent = SimEvent::new(2.0);
    assert_eq!(
        compare(&a, &b),
        Err(OrderViolation::DistinctEventsEqual {
            time: 2.0,
            deconflict: i64::MIN,
        })
    );
}

#[test]
fn test_deconflict_assigned_on_insertion() {
    let mut list: EventList = EventList::insertion_order();
    let a = SimEvent::new(7.0);
    let b = SimEvent::new(7.0);
    assert_eq!(a.deconflict(), i64::MIN);

    list.add(&a).unwrap();
    list.add(&b).unwrap();
    assert!(a.deconflict() < b.deconflict());
}

#[test]
fn test_events_move_between_lists() {
    let mut first: EventList = EventList::default();
    let mut second: EventList = EventList::default();
    let event = SimEvent::new(1.0);

    first.add(&event).unwrap();
    first.run().unwrap();
    assert!(!first.contains(&event));

    // Processed events are free agents again.
    event.set_time(10.0);
    second.reset_to(0.0).unwrap();
    second.schedule(&event).unwrap();
    second.run().unwrap();
    assert_eq!(second.time(), 10.0);
}
