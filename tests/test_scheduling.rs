//! Tests for the scheduling surface: schedule, schedule_at, reschedule,
//! schedule_now, action scheduling and the event factory.

use std::cell::Cell;
use std::rc::Rc;

use des_core_rs::{action, EventList, EventListError, SimEvent};

/// One-shot probe: records that it ran and at what time.
#[derive(Default)]
struct Probe {
    executed: Cell<bool>,
    time: Cell<f64>,
}

impl Probe {
    fn arm(probe: &Rc<Self>) -> des_core_rs::EventAction<()> {
        let probe = probe.clone();
        action(move |_, event| {
            assert!(!probe.executed.get(), "probe fired twice");
            probe.executed.set(true);
            probe.time.set(event.time());
            Ok(())
        })
    }

    fn reset(&self) {
        self.executed.set(false);
        self.time.set(f64::NAN);
    }
}

#[test]
fn test_schedule_keeps_event_time() {
    let mut list: EventList = EventList::default();
    let e = SimEvent::new(12.5);
    list.schedule(&e).unwrap();
    assert_eq!(e.time(), 12.5);
    assert!(list.contains(&e));
}

#[test]
fn test_schedule_at_overwrites_event_time() {
    let mut list: EventList = EventList::default();
    let e = SimEvent::new(99.0);
    list.schedule_at(7.0, &e).unwrap();
    assert_eq!(e.time(), 7.0);
    assert!(list.contains(&e));
}

#[test]
fn test_schedule_rejects_past_and_duplicates() {
    let mut list: EventList = EventList::default();
    list.reset_to(10.0).unwrap();

    let past = SimEvent::new(9.0);
    assert_eq!(
        list.schedule(&past).unwrap_err(),
        EventListError::TimeInPast { time: 9.0, now: 10.0 }
    );

    // Scheduling exactly at the clock is allowed.
    let now = SimEvent::new(10.0);
    list.schedule(&now).unwrap();

    assert_eq!(
        list.schedule(&now).unwrap_err(),
        EventListError::AlreadyScheduled
    );
    assert_eq!(
        list.schedule_at(39.4, &now).unwrap_err(),
        EventListError::AlreadyScheduled
    );
    // The failed schedule_at left the event's time alone.
    assert_eq!(now.time(), 10.0);
}

#[test]
fn test_schedule_at_rejects_nan() {
    let mut list: EventList = EventList::default();
    let e = SimEvent::new(1.0);
    assert_eq!(
        list.schedule_at(f64::NAN, &e).unwrap_err(),
        EventListError::NanTime
    );
}

#[test]
fn test_scheduling_in_past_after_run() {
    let mut list: EventList = EventList::default();
    list.add(&SimEvent::new(15.8)).unwrap();
    list.add(&SimEvent::new(10.0)).unwrap();
    list.run().unwrap();
    assert_eq!(list.time(), 15.8);

    // Every schedule form rejects a past time now.
    assert_eq!(
        list.schedule(&SimEvent::new(10.0)).unwrap_err(),
        EventListError::TimeInPast { time: 10.0, now: 15.8 }
    );
    assert_eq!(
        list.schedule_at(10.0, &SimEvent::new(0.0)).unwrap_err(),
        EventListError::TimeInPast { time: 10.0, now: 15.8 }
    );
    assert_eq!(
        list.reschedule(10.0, &SimEvent::new(0.0)).unwrap_err(),
        EventListError::TimeInPast { time: 10.0, now: 15.8 }
    );
    assert_eq!(
        list.schedule_action(10.0, None, None).unwrap_err(),
        EventListError::TimeInPast { time: 10.0, now: 15.8 }
    );
}

#[test]
fn test_schedule_actions_and_reschedule_sequence() {
    let mut list: EventList = EventList::default();
    let a1 = Rc::new(Probe::default());
    let a2 = Rc::new(Probe::default());

    list.schedule_action(15.0, Some(Probe::arm(&a1)), None).unwrap();
    list.schedule_action(-40.0, Some(Probe::arm(&a2)), None).unwrap();
    list.run().unwrap();
    assert!(a1.executed.get());
    assert_eq!(a1.time.get(), 15.0);
    assert!(a2.executed.get());
    assert_eq!(a2.time.get(), -40.0);

    list.reset().unwrap();
    a1.reset();
    let e1 = list.schedule_action(15.0, Some(Probe::arm(&a1)), None).unwrap();

    // Rescheduling a pending event moves it; the last time wins.
    list.reschedule(-123455.0, &e1).unwrap();
    list.reschedule(-77.0, &e1).unwrap();
    list.run().unwrap();
    assert!(a1.executed.get());
    assert_eq!(a1.time.get(), -77.0);

    // Rescheduling an absent event degenerates to schedule_at.
    list.reset().unwrap();
    a1.reset();
    list.reschedule(-459.0, &e1).unwrap();
    list.run().unwrap();
    assert!(a1.executed.get());
    assert_eq!(a1.time.get(), -459.0);
}

#[test]
fn test_self_rescheduling_event() {
    let mut list: EventList = EventList::default();
    let count = Rc::new(Cell::new(0u32));
    let last_time = Rc::new(Cell::new(f64::NAN));

    let c = count.clone();
    let lt = last_time.clone();
    let e = SimEvent::new(1.0).with_action(move |list, event| {
        let t = event.time();
        c.set(c.get() + 1);
        lt.set(t);
        if t < 16.0 {
            list.reschedule(t + 1.0, event)?;
        }
        Ok(())
    });
    list.schedule(&e).unwrap();
    list.run().unwrap();

    // Fires at 1.0, 2.0, ..., 16.0.
    assert_eq!(count.get(), 16);
    assert_eq!(last_time.get(), 16.0);
    assert_eq!(list.time(), 16.0);
    assert!(list.is_empty());
}

#[test]
fn test_rescheduling_at_same_time_reruns_action() {
    // Re-scheduling the event under execution at the current time is
    // legal; the action fires again at the same clock.
    let mut list: EventList = EventList::default();
    let count = Rc::new(Cell::new(0u32));

    let c = count.clone();
    let e = SimEvent::new(0.0).with_action(move |list, event| {
        c.set(c.get() + 1);
        if c.get() < 100 {
            list.reschedule(event.time(), event)?;
        }
        Ok(())
    });
    list.schedule(&e).unwrap();
    list.run().unwrap();
    assert_eq!(count.get(), 100);
    assert_eq!(list.time(), 0.0);
}

#[test]
fn test_schedule_now() {
    let mut list: EventList = EventList::default();
    list.reset_to(5.0).unwrap();

    let e = SimEvent::new(99.0);
    list.schedule_now(&e).unwrap();
    assert_eq!(e.time(), 5.0);
    assert!(list.contains(&e));

    assert_eq!(
        list.schedule_now(&e).unwrap_err(),
        EventListError::AlreadyScheduled
    );
}

#[test]
fn test_schedule_action_now() {
    let mut list: EventList = EventList::default();
    list.reset_to(2.0).unwrap();
    let probe = Rc::new(Probe::default());
    let e = list
        .schedule_action_now(Some(Probe::arm(&probe)), Some("now"))
        .unwrap();
    assert_eq!(e.time(), 2.0);
    assert_eq!(e.name().as_deref(), Some("now"));
    list.run().unwrap();
    assert!(probe.executed.get());
    assert_eq!(probe.time.get(), 2.0);
}

#[test]
fn test_schedule_action_without_action_is_time_marker() {
    let mut list: EventList = EventList::default();
    let e = list.schedule_action(4.0, None, Some("marker")).unwrap();
    assert!(e.event_action().is_none());
    list.run().unwrap();
    assert_eq!(list.time(), 4.0);
}

#[test]
fn test_schedule_action_default_construction() {
    let mut list: EventList<u32> = EventList::default();
    let e = list.schedule_action(3.0, None, Some("made")).unwrap();
    assert_eq!(e.time(), 3.0);
    assert_eq!(e.name().as_deref(), Some("made"));
    assert!(e.payload().is_none());
    assert!(list.contains(&e));
}

#[test]
fn test_schedule_action_uses_factory() {
    let mut list: EventList<u32> = EventList::default();
    list.set_event_factory(Some(Rc::new(|name, time, _action| {
        SimEvent::new(time)
            .with_name(format!("factory:{}", name.unwrap_or("anon")))
            .with_payload(9)
    })));

    // No explicit name: the factory's choice survives; the payload the
    // factory put on the event is cleared before scheduling.
    let e = list.schedule_action(6.0, None, None).unwrap();
    assert_eq!(e.name().as_deref(), Some("factory:anon"));
    assert!(e.payload().is_none());

    // An explicit name overrides whatever the factory set.
    let e = list.schedule_action(7.0, None, Some("named")).unwrap();
    assert_eq!(e.name().as_deref(), Some("named"));

    list.set_event_factory(None);
    assert!(list.event_factory().is_none());
}
