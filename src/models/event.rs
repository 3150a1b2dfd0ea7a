//! Simulation events
//!
//! A [`SimEvent`] is a shared-identity record carrying a scheduled time, an
//! optional display name, an optional opaque payload, an optional action
//! and an engine-assigned tiebreaker. Clones of a `SimEvent` are handles to
//! the same event: equality and hashing follow identity, not field values,
//! because the event list tracks *which* events are enrolled, and callers
//! co-own events across reset/rerun cycles.
//!
//! # Critical Invariants
//!
//! 1. While an event is enrolled on a list, its time and tiebreaker are
//!    owned by that list; [`SimEvent::set_time`] panics on an enrolled
//!    event rather than silently corrupting the ordering.
//! 2. An event belongs to at most one list at a time; the enrollment
//!    marker makes a second enrollment detectable.
//! 3. Name, payload and action never influence ordering and may be
//!    changed at any point.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::list::{EventList, EventListError};
use crate::models::order::EventKey;
use crate::SimTime;

/// Callback invoked when an event is processed.
///
/// The action receives the running event list, so it can schedule further
/// events, and the event being processed. Scheduling failures propagate
/// with `?` and abort the run.
pub type EventAction<P> =
    Rc<dyn Fn(&mut EventList<P>, &SimEvent<P>) -> Result<(), EventListError>>;

/// Constructor used by [`EventList::schedule_action`] and relatives to
/// mint events on behalf of callers.
///
/// Receives the requested name, schedule time and action. When no factory
/// is registered the list default-constructs a plain [`SimEvent`] instead.
pub type EventFactory<P> =
    Rc<dyn Fn(Option<&str>, f64, Option<EventAction<P>>) -> SimEvent<P>>;

/// Wraps a closure into an [`EventAction`].
///
/// # Example
/// ```
/// use des_core_rs::{action, EventList, SimEvent};
///
/// let mut list: EventList = EventList::insertion_order();
/// let event: SimEvent = SimEvent::new(10.0);
/// event.set_event_action(Some(action(|_list, event| {
///     println!("fired at {}", event.time());
///     Ok(())
/// })));
/// list.schedule(&event).unwrap();
/// list.run().unwrap();
/// ```
pub fn action<P, F>(f: F) -> EventAction<P>
where
    F: Fn(&mut EventList<P>, &SimEvent<P>) -> Result<(), EventListError> + 'static,
{
    Rc::new(f)
}

struct EventInner<P> {
    name: Option<String>,
    time: SimTime,
    /// Tiebreaker assigned by the list on insertion; resolves ordering
    /// collisions among simultaneous events.
    deconflict: i64,
    payload: Option<P>,
    action: Option<EventAction<P>>,
    /// Key this event is filed under while enrolled on a list.
    enrolled: Option<EventKey>,
}

/// A schedulable simulation event.
///
/// # Example
/// ```
/// use des_core_rs::SimEvent;
///
/// let event: SimEvent<u32> = SimEvent::new(15.8).with_name("arrival").with_payload(7);
/// assert_eq!(event.time(), 15.8);
/// assert_eq!(event.name().as_deref(), Some("arrival"));
/// ```
pub struct SimEvent<P = ()> {
    inner: Rc<RefCell<EventInner<P>>>,
}

impl<P> SimEvent<P> {
    /// Creates an event scheduled at `time`, with no name, payload or
    /// action.
    ///
    /// # Panics
    ///
    /// Panics if `time` is NaN. Either infinity is allowed.
    pub fn new(time: f64) -> Self {
        let time = SimTime::new(time).expect("event time must not be NaN");
        SimEvent {
            inner: Rc::new(RefCell::new(EventInner {
                name: None,
                time,
                deconflict: i64::MIN,
                payload: None,
                action: None,
                enrolled: None,
            })),
        }
    }

    /// Sets the display name (builder form).
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.inner.borrow_mut().name = Some(name.into());
        self
    }

    /// Sets the user payload (builder form).
    pub fn with_payload(self, payload: P) -> Self {
        self.inner.borrow_mut().payload = Some(payload);
        self
    }

    /// Sets the action (builder form).
    pub fn with_action<F>(self, f: F) -> Self
    where
        F: Fn(&mut EventList<P>, &SimEvent<P>) -> Result<(), EventListError> + 'static,
    {
        self.inner.borrow_mut().action = Some(Rc::new(f));
        self
    }

    /// The scheduled time.
    pub fn time(&self) -> f64 {
        self.inner.borrow().time.value()
    }

    pub(crate) fn sim_time(&self) -> SimTime {
        self.inner.borrow().time
    }

    /// Sets the scheduled time.
    ///
    /// # Panics
    ///
    /// Panics if `time` is NaN, or if the event is currently enrolled on a
    /// list (reschedule through the list instead).
    pub fn set_time(&self, time: f64) {
        let time = SimTime::new(time).expect("event time must not be NaN");
        let mut inner = self.inner.borrow_mut();
        assert!(
            inner.enrolled.is_none(),
            "cannot set the time of an event enrolled on an event list"
        );
        inner.time = time;
    }

    /// The display name, if any. Advisory only; the engine never inspects it.
    pub fn name(&self) -> Option<String> {
        self.inner.borrow().name.clone()
    }

    /// Sets or clears the display name.
    pub fn set_name(&self, name: Option<String>) {
        self.inner.borrow_mut().name = name;
    }

    /// Borrows the payload.
    pub fn payload(&self) -> Ref<'_, Option<P>> {
        Ref::map(self.inner.borrow(), |inner| &inner.payload)
    }

    /// Sets or clears the payload.
    pub fn set_payload(&self, payload: Option<P>) {
        self.inner.borrow_mut().payload = payload;
    }

    /// Removes and returns the payload.
    pub fn take_payload(&self) -> Option<P> {
        self.inner.borrow_mut().payload.take()
    }

    /// The action, if any.
    pub fn event_action(&self) -> Option<EventAction<P>> {
        self.inner.borrow().action.clone()
    }

    /// Sets or clears the action.
    pub fn set_event_action(&self, action: Option<EventAction<P>>) {
        self.inner.borrow_mut().action = action;
    }

    /// The engine-assigned tiebreaker value.
    ///
    /// Meaningful only while the event is (or was last) enrolled; written
    /// by the list on insertion.
    pub fn deconflict(&self) -> i64 {
        self.inner.borrow().deconflict
    }

    pub(crate) fn set_deconflict(&self, deconflict: i64) {
        self.inner.borrow_mut().deconflict = deconflict;
    }

    pub(crate) fn enrolled_key(&self) -> Option<EventKey> {
        self.inner.borrow().enrolled
    }

    pub(crate) fn set_enrolled(&self, key: Option<EventKey>) {
        self.inner.borrow_mut().enrolled = key;
    }

    /// Whether `a` and `b` are handles to the same event.
    pub fn ptr_eq(a: &SimEvent<P>, b: &SimEvent<P>) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<P> Default for SimEvent<P> {
    /// An unnamed event at negative infinity with no payload or action.
    fn default() -> Self {
        SimEvent::new(f64::NEG_INFINITY)
    }
}

impl<P> Clone for SimEvent<P> {
    fn clone(&self) -> Self {
        SimEvent {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P> PartialEq for SimEvent<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P> Eq for SimEvent<P> {}

impl<P> Hash for SimEvent<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.inner) as *const () as usize).hash(state);
    }
}

impl<P> fmt::Debug for SimEvent<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SimEvent")
            .field("name", &inner.name)
            .field("time", &inner.time.value())
            .field("deconflict", &inner.deconflict)
            .field("enrolled", &inner.enrolled.is_some())
            .finish()
    }
}

impl<P> fmt::Display for SimEvent<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.borrow().name.as_deref() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "event@{:p}", Rc::as_ptr(&self.inner)),
        }
    }
}
