//! Event list - the scheduling core
//!
//! The event list is the heart of the simulation engine: a totally
//! ordered set of [`SimEvent`]s keyed by `(time, tiebreaker)` together
//! with the simulation clock and the run loop that drains the set.
//!
//! # The run loop
//!
//! ```text
//! while the list is non-empty
//!       and the first event lies within the horizon
//!       and no interruption was requested:
//!     notify fine listeners (next-event)
//!     take the first event off the list
//!     advance the clock to its time (update notification on a strict jump)
//!     invoke its action, which may schedule further events
//! optionally advance the clock to the horizon
//! notify listeners if the list ended up empty
//! ```
//!
//! # Critical Invariants
//!
//! 1. The clock never decreases once the first update has been observed.
//! 2. Enrolled events carry unique `(time, tiebreaker)` keys; a collision
//!    is surfaced as an error, never repaired silently.
//! 3. No enrolled event lies before the clock (enforced at `schedule`
//!    time; `add` intentionally does not check, matching the original
//!    split between raw set insertion and validated scheduling).
//! 4. `running` is true only inside a run or single-step call and is
//!    cleared on every exit path, including action errors.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, trace};

use crate::list::config::{EventListConfig, TiebreakPolicy};
use crate::list::deconflict::Deconflicter;
use crate::models::event::{EventAction, EventFactory, SimEvent};
use crate::models::listener::{FineListener, ListListener, ResetListener};
use crate::models::order::{key_of, EventKey, OrderViolation};
use crate::SimTime;

/// Errors surfaced by event-list operations.
///
/// Bad inputs (`NanTime`, `TimeInPast`, `EndTimeInPast`, `AlreadyScheduled`)
/// and lifecycle violations (`Running`) are caller mistakes; `Order` and
/// `ClockRegression` are broken engine invariants and indicate a bug.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EventListError {
    /// A time argument was NaN.
    #[error("time must not be NaN")]
    NanTime,

    /// Attempt to schedule strictly before the current clock.
    #[error("schedule time {time} is in the past (current time {now})")]
    TimeInPast { time: f64, now: f64 },

    /// `run_until` horizon lies before the current clock.
    #[error("end time {end} is in the past (current time {now})")]
    EndTimeInPast { end: f64, now: f64 },

    /// The event is already enrolled (on this or another list).
    #[error("event is already scheduled on an event list")]
    AlreadyScheduled,

    /// Reentrant `run`, `run_single_step` or `reset`.
    #[error("event list is already running")]
    Running,

    /// The clock was asked to move backwards during a run.
    #[error("clock would move backwards ({from} -> {to})")]
    ClockRegression { from: f64, to: f64 },

    /// The total order over events broke down.
    #[error(transparent)]
    Order(#[from] OrderViolation),
}

/// Cooperative interruption flag for the run loop.
///
/// Cloned handles share the flag. The loop checks (and clears) it once per
/// iteration; on detection it exits cleanly, leaving the list intact and
/// the clock at the last processed event, so a later run resumes.
///
/// # Example
/// ```
/// use des_core_rs::{EventList, SimEvent};
///
/// let mut list: EventList = EventList::insertion_order();
/// let stop = list.interrupt_handle();
/// list.add(&SimEvent::new(1.0).with_action(move |_, _| {
///     stop.set();
///     Ok(())
/// })).unwrap();
/// list.add(&SimEvent::new(2.0)).unwrap();
/// list.run().unwrap();
/// assert_eq!(list.len(), 1); // the 2.0 event survived the interruption
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Rc<Cell<bool>>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests interruption of the owning list's current (or next) run.
    pub fn set(&self) {
        self.0.set(true);
    }

    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(false);
    }

    /// Reads and clears, in one step (the loop's check).
    fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Identity tag distinguishing list instances (used by timers to verify
/// their host).
#[derive(Debug)]
pub(crate) struct ListTag;

/// Formatter override for the list's `Display` rendering.
pub type ListFormatter<P> = Rc<dyn Fn(&EventList<P>) -> String>;

/// A priority-ordered, time-stamped event list driving a simulation clock.
///
/// # Example
/// ```
/// use des_core_rs::{EventList, SimEvent};
///
/// let mut list: EventList = EventList::default();
/// list.add(&SimEvent::new(15.8)).unwrap();
/// list.add(&SimEvent::new(10.0)).unwrap();
/// list.run().unwrap();
/// assert_eq!(list.time(), 15.8);
/// assert!(list.is_empty());
/// ```
pub struct EventList<P = ()> {
    /// Enrolled events in comparator order.
    events: BTreeMap<EventKey, SimEvent<P>>,

    /// Last update time.
    clock: SimTime,

    /// True until the first strictly increasing clock observation after
    /// construction or reset; makes the very first event fire an update
    /// even when its time equals the clock.
    first_update: bool,

    /// Clock value installed by a parameterless reset.
    default_reset_time: SimTime,

    /// Reentrancy guard for run/single-step/reset.
    running: bool,

    /// As configured; kept for introspection.
    tiebreak: TiebreakPolicy,

    /// Tiebreaker source (random stream or insertion counter).
    deconflicter: Deconflicter,

    reset_listeners: Vec<Rc<dyn ResetListener<P>>>,
    listeners: Vec<Rc<dyn ListListener<P>>>,
    fine_listeners: Vec<Rc<dyn FineListener<P>>>,

    /// Optional constructor for events minted by `schedule_action`.
    factory: Option<EventFactory<P>>,

    /// Optional `Display` override.
    to_string_fn: Option<ListFormatter<P>>,

    interrupt: InterruptFlag,

    /// Identity tag handed to timers.
    tag: Rc<ListTag>,
}

impl<P> EventList<P> {
    /// Creates an event list from a configuration.
    ///
    /// # Errors
    ///
    /// `NanTime` if the configured default reset time is NaN.
    pub fn new(config: EventListConfig) -> Result<Self, EventListError> {
        let default_reset_time =
            SimTime::new(config.default_reset_time).ok_or(EventListError::NanTime)?;
        Ok(Self::from_parts(default_reset_time, config.tiebreak))
    }

    /// Creates a random-order (ROEL) list with the given tiebreak seed and
    /// the default reset time of negative infinity.
    pub fn random_order(rng_seed: u64) -> Self {
        Self::from_parts(
            SimTime::NEG_INFINITY,
            TiebreakPolicy::RandomOrder { rng_seed },
        )
    }

    /// Creates an insertion-order (IOEL) list with the default reset time
    /// of negative infinity.
    pub fn insertion_order() -> Self {
        Self::from_parts(SimTime::NEG_INFINITY, TiebreakPolicy::InsertionOrder)
    }

    fn from_parts(default_reset_time: SimTime, tiebreak: TiebreakPolicy) -> Self {
        // Construction doubles as a silent reset: clock at the default
        // reset time, first-update armed, nobody to notify yet.
        EventList {
            events: BTreeMap::new(),
            clock: default_reset_time,
            first_update: true,
            default_reset_time,
            running: false,
            tiebreak,
            deconflicter: Deconflicter::from_policy(tiebreak),
            reset_listeners: Vec::new(),
            listeners: Vec::new(),
            fine_listeners: Vec::new(),
            factory: None,
            to_string_fn: None,
            interrupt: InterruptFlag::new(),
            tag: Rc::new(ListTag),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current simulation time (the last update time).
    pub fn time(&self) -> f64 {
        self.clock.value()
    }

    /// The clock value a parameterless [`reset`](Self::reset) installs.
    pub fn default_reset_time(&self) -> f64 {
        self.default_reset_time.value()
    }

    /// Changes the default reset time. Takes effect on the next
    /// parameterless reset; the current clock is untouched.
    pub fn set_default_reset_time(&mut self, time: f64) -> Result<(), EventListError> {
        self.default_reset_time = SimTime::new(time).ok_or(EventListError::NanTime)?;
        Ok(())
    }

    /// The configured tiebreak discipline.
    pub fn tiebreak_policy(&self) -> TiebreakPolicy {
        self.tiebreak
    }

    /// Whether a run or single-step call is in progress.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of enrolled events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The earliest enrolled event, without removing it.
    pub fn peek_first(&self) -> Option<SimEvent<P>> {
        self.events.first_key_value().map(|(_, e)| e.clone())
    }

    /// Visits enrolled events in processing order. Never mutates or
    /// reorders.
    pub fn iter(&self) -> impl Iterator<Item = &SimEvent<P>> {
        self.events.values()
    }

    /// Membership test by event identity.
    pub fn contains(&self, event: &SimEvent<P>) -> bool {
        match event.enrolled_key() {
            Some(key) => self
                .events
                .get(&key)
                .map_or(false, |e| SimEvent::ptr_eq(e, event)),
            None => false,
        }
    }

    /// A shareable handle onto this list's interruption flag.
    pub fn interrupt_handle(&self) -> InterruptFlag {
        self.interrupt.clone()
    }

    /// Requests cooperative interruption of the current (or next) run.
    pub fn request_interrupt(&self) {
        self.interrupt.set();
    }

    /// The factory used by [`schedule_action`](Self::schedule_action), if
    /// any.
    pub fn event_factory(&self) -> Option<EventFactory<P>> {
        self.factory.clone()
    }

    /// Installs or removes the event factory.
    pub fn set_event_factory(&mut self, factory: Option<EventFactory<P>>) {
        self.factory = factory;
    }

    /// Installs or removes the `Display` override.
    pub fn set_to_string_fn(&mut self, formatter: Option<ListFormatter<P>>) {
        self.to_string_fn = formatter;
    }

    pub(crate) fn tag(&self) -> &Rc<ListTag> {
        &self.tag
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// Clears the list and moves the clock to the default reset time.
    ///
    /// # Errors
    ///
    /// `Running` when invoked from inside a run (e.g. from an action).
    pub fn reset(&mut self) -> Result<(), EventListError> {
        let time = self.default_reset_time;
        self.reset_to_time(time)
    }

    /// Clears the list and moves the clock to `time`, ignoring (but not
    /// changing) the default reset time.
    pub fn reset_to(&mut self, time: f64) -> Result<(), EventListError> {
        let time = SimTime::new(time).ok_or(EventListError::NanTime)?;
        self.reset_to_time(time)
    }

    fn reset_to_time(&mut self, time: SimTime) -> Result<(), EventListError> {
        if self.running {
            return Err(EventListError::Running);
        }
        self.clear_events();
        self.clock = time;
        self.first_update = true;
        debug!(time = time.value(), "event list reset");
        self.fire_reset();
        Ok(())
    }

    fn clear_events(&mut self) {
        // Un-enroll so the events can be reused on this or another list.
        for event in self.events.values() {
            event.set_enrolled(None);
        }
        self.events.clear();
    }

    // ========================================================================
    // Add / remove (raw set surface; no past-time validation)
    // ========================================================================

    /// Inserts an event, assigning its tiebreaker.
    ///
    /// Returns `Ok(false)` if the event is already enrolled on *this*
    /// list (insertion is refused, nothing changes). Unlike
    /// [`schedule`](Self::schedule), `add` accepts events before the
    /// current clock; such events make the run loop fail with
    /// `ClockRegression` when reached.
    ///
    /// # Errors
    ///
    /// - `AlreadyScheduled` if the event is enrolled on another list.
    /// - `Order(..)` if the drawn tiebreaker collides with an enrolled
    ///   event at the same time (random-order discipline only; surfaced,
    ///   never resampled).
    pub fn add(&mut self, event: &SimEvent<P>) -> Result<bool, EventListError> {
        if self.contains(event) {
            return Ok(false);
        }
        if event.enrolled_key().is_some() {
            return Err(EventListError::AlreadyScheduled);
        }
        let deconflict = self.deconflicter.next(self.events.is_empty());
        event.set_deconflict(deconflict);
        let key = key_of(event);
        if self.events.contains_key(&key) {
            return Err(OrderViolation::DistinctEventsEqual {
                time: key.time.value(),
                deconflict: key.deconflict,
            }
            .into());
        }
        self.events.insert(key, event.clone());
        event.set_enrolled(Some(key));
        trace!(
            time = event.time(),
            deconflict,
            len = self.events.len(),
            "event added"
        );
        Ok(true)
    }

    /// Inserts every event of a collection; returns whether any was
    /// actually inserted.
    pub fn add_all<I>(&mut self, events: I) -> Result<bool, EventListError>
    where
        I: IntoIterator<Item = SimEvent<P>>,
    {
        let mut changed = false;
        for event in events {
            changed = self.add(&event)? || changed;
        }
        Ok(changed)
    }

    /// Removes an event; returns whether it was present.
    pub fn remove(&mut self, event: &SimEvent<P>) -> bool {
        if !self.contains(event) {
            return false;
        }
        let key = event.enrolled_key().expect("contained event has a key");
        self.events.remove(&key);
        event.set_enrolled(None);
        true
    }

    fn poll_first(&mut self) -> Option<SimEvent<P>> {
        let (_, event) = self.events.pop_first()?;
        event.set_enrolled(None);
        Some(event)
    }

    // ========================================================================
    // Scheduling (validated insertion)
    // ========================================================================

    /// Schedules an event at the time it already carries.
    ///
    /// # Errors
    ///
    /// - `TimeInPast` if the event's time lies strictly before the clock
    ///   (scheduling *at* the current time is always allowed).
    /// - `AlreadyScheduled` if the event is enrolled anywhere.
    pub fn schedule(&mut self, event: &SimEvent<P>) -> Result<(), EventListError> {
        if event.enrolled_key().is_some() {
            return Err(EventListError::AlreadyScheduled);
        }
        let time = event.sim_time();
        if time < self.clock {
            return Err(EventListError::TimeInPast {
                time: time.value(),
                now: self.clock.value(),
            });
        }
        let inserted = self.add(event)?;
        debug_assert!(inserted, "unenrolled event must insert");
        Ok(())
    }

    /// Schedules an event at `time`, overwriting the time it carries.
    ///
    /// The event's presence is checked before its time is touched, so a
    /// failed call leaves the event unchanged.
    pub fn schedule_at(&mut self, time: f64, event: &SimEvent<P>) -> Result<(), EventListError> {
        SimTime::new(time).ok_or(EventListError::NanTime)?;
        if event.enrolled_key().is_some() {
            return Err(EventListError::AlreadyScheduled);
        }
        event.set_time(time);
        self.schedule(event)
    }

    /// Removes the event if present, then schedules it at `time`.
    ///
    /// Equivalent to [`schedule_at`](Self::schedule_at) when the event was
    /// not enrolled.
    pub fn reschedule(&mut self, time: f64, event: &SimEvent<P>) -> Result<(), EventListError> {
        self.remove(event);
        self.schedule_at(time, event)
    }

    /// Schedules an event at the current clock.
    ///
    /// The new event is *not* guaranteed to be the next one processed:
    /// other events at the same time may precede it, depending on the
    /// tiebreak discipline.
    pub fn schedule_now(&mut self, event: &SimEvent<P>) -> Result<(), EventListError> {
        if event.enrolled_key().is_some() {
            return Err(EventListError::AlreadyScheduled);
        }
        event.set_time(self.clock.value());
        self.schedule(event)
    }

    /// Constructs and schedules an event at `time` running `action`.
    ///
    /// Uses the registered factory when present, a plain default-constructed
    /// event otherwise. The minted event's payload is cleared and its name
    /// set only when one is given. Returns the scheduled event.
    ///
    /// # Errors
    ///
    /// `TimeInPast` / `NanTime` as for [`schedule`](Self::schedule); the
    /// time is validated before any event is constructed.
    pub fn schedule_action(
        &mut self,
        time: f64,
        action: Option<EventAction<P>>,
        name: Option<&str>,
    ) -> Result<SimEvent<P>, EventListError> {
        let t = SimTime::new(time).ok_or(EventListError::NanTime)?;
        if t < self.clock {
            return Err(EventListError::TimeInPast {
                time: t.value(),
                now: self.clock.value(),
            });
        }
        let event = match &self.factory {
            Some(factory) => (**factory)(name, time, action.clone()),
            None => SimEvent::new(time),
        };
        event.set_time(time);
        event.set_event_action(action);
        event.set_payload(None);
        if let Some(name) = name {
            event.set_name(Some(name.to_string()));
        }
        self.schedule(&event)?;
        Ok(event)
    }

    /// Constructs and schedules an event running `action` at the current
    /// clock.
    pub fn schedule_action_now(
        &mut self,
        action: Option<EventAction<P>>,
        name: Option<&str>,
    ) -> Result<SimEvent<P>, EventListError> {
        self.schedule_action(self.clock.value(), action, name)
    }

    // ========================================================================
    // Clock
    // ========================================================================

    /// Advances the clock to `new_time`, firing an update notification on
    /// the first observation after construction/reset and on every strict
    /// increase. Same-time advances after the first are silent.
    pub(crate) fn advance_clock(&mut self, new_time: SimTime) -> Result<(), EventListError> {
        if !self.first_update && new_time < self.clock {
            return Err(EventListError::ClockRegression {
                from: self.clock.value(),
                to: new_time.value(),
            });
        }
        if self.first_update || new_time > self.clock {
            self.clock = new_time;
            self.first_update = false;
            self.fire_update();
        }
        Ok(())
    }

    // ========================================================================
    // Run
    // ========================================================================

    /// Runs until the list is empty or interrupted, leaving the clock at
    /// the last processed event.
    pub fn run(&mut self) -> Result<(), EventListError> {
        self.run_until(f64::INFINITY, true, false)
    }

    /// Runs events up to the horizon `end`.
    ///
    /// Events strictly before `end` are processed; events at exactly `end`
    /// only when `inclusive`. With `inclusive` and `set_time_to_end`, the
    /// clock is advanced to `end` after the applicable events, even when
    /// none ran. May be invoked repeatedly with non-decreasing horizons.
    ///
    /// # Errors
    ///
    /// - `Running` on reentrant invocation.
    /// - `EndTimeInPast` when `end` lies before the clock.
    /// - Whatever an event action propagates; the list stays usable and
    ///   the `running` flag is cleared on the way out.
    pub fn run_until(
        &mut self,
        end: f64,
        inclusive: bool,
        set_time_to_end: bool,
    ) -> Result<(), EventListError> {
        let end = SimTime::new(end).ok_or(EventListError::NanTime)?;
        if self.running {
            return Err(EventListError::Running);
        }
        self.running = true;
        let result = self.run_until_inner(end, inclusive, set_time_to_end);
        self.running = false;
        result
    }

    fn run_until_inner(
        &mut self,
        end: SimTime,
        inclusive: bool,
        set_time_to_end: bool,
    ) -> Result<(), EventListError> {
        if end < self.clock {
            return Err(EventListError::EndTimeInPast {
                end: end.value(),
                now: self.clock.value(),
            });
        }
        debug!(
            end = end.value(),
            inclusive,
            pending = self.events.len(),
            "run starting"
        );
        loop {
            let first_time = match self.events.first_key_value() {
                Some((key, _)) => key.time,
                None => break,
            };
            if !(first_time < end || (inclusive && first_time == end)) {
                break;
            }
            if self.interrupt.take() {
                debug!(time = self.clock.value(), "run interrupted");
                break;
            }
            self.fire_next_event();
            let event = match self.poll_first() {
                Some(event) => event,
                None => break,
            };
            self.advance_clock(event.sim_time())?;
            if let Some(action) = event.event_action() {
                (*action)(self, &event)?;
            }
        }
        if inclusive && set_time_to_end && self.clock < end {
            self.advance_clock(end)?;
        }
        if self.events.is_empty() {
            self.fire_empty();
        }
        Ok(())
    }

    /// Processes at most one event ("single-stepping").
    ///
    /// Silent no-op on an empty list.
    pub fn run_single_step(&mut self) -> Result<(), EventListError> {
        if self.events.is_empty() {
            return Ok(());
        }
        if self.running {
            return Err(EventListError::Running);
        }
        self.running = true;
        let result = self.single_step_inner();
        self.running = false;
        result
    }

    fn single_step_inner(&mut self) -> Result<(), EventListError> {
        self.fire_next_event();
        let event = match self.poll_first() {
            Some(event) => event,
            None => return Ok(()),
        };
        self.advance_clock(event.sim_time())?;
        if let Some(action) = event.event_action() {
            (*action)(self, &event)?;
        }
        if self.events.is_empty() {
            self.fire_empty();
        }
        Ok(())
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Registers a reset-only listener; duplicates (by identity) are
    /// ignored.
    pub fn add_reset_listener(&mut self, listener: Rc<dyn ResetListener<P>>) {
        if !self
            .reset_listeners
            .iter()
            .any(|l| Rc::ptr_eq(l, &listener))
        {
            self.reset_listeners.push(listener);
        }
    }

    /// Removes a reset-only listener by identity; absent listeners are
    /// ignored.
    pub fn remove_reset_listener(&mut self, listener: Rc<dyn ResetListener<P>>) {
        self.reset_listeners.retain(|l| !Rc::ptr_eq(l, &listener));
    }

    /// Registers a full listener (reset + update + empty).
    pub fn add_list_listener(&mut self, listener: Rc<dyn ListListener<P>>) {
        if !self.listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            self.listeners.push(listener);
        }
    }

    pub fn remove_list_listener(&mut self, listener: Rc<dyn ListListener<P>>) {
        self.listeners.retain(|l| !Rc::ptr_eq(l, &listener));
    }

    /// Registers a fine listener (everything + per-event notifications).
    pub fn add_fine_listener(&mut self, listener: Rc<dyn FineListener<P>>) {
        if !self
            .fine_listeners
            .iter()
            .any(|l| Rc::ptr_eq(l, &listener))
        {
            self.fine_listeners.push(listener);
        }
    }

    pub fn remove_fine_listener(&mut self, listener: Rc<dyn FineListener<P>>) {
        self.fine_listeners.retain(|l| !Rc::ptr_eq(l, &listener));
    }

    // Dispatch clones the registry first so listeners may add or remove
    // listeners from inside a notification.

    fn fire_reset(&self) {
        let fine = self.fine_listeners.clone();
        let full = self.listeners.clone();
        let reset = self.reset_listeners.clone();
        for l in &fine {
            l.on_reset(self);
        }
        for l in &full {
            l.on_reset(self);
        }
        for l in &reset {
            l.on_reset(self);
        }
    }

    fn fire_update(&self) {
        let time = self.clock.value();
        let fine = self.fine_listeners.clone();
        let full = self.listeners.clone();
        for l in &fine {
            l.on_update(self, time);
        }
        for l in &full {
            l.on_update(self, time);
        }
    }

    fn fire_empty(&self) {
        let time = self.clock.value();
        let fine = self.fine_listeners.clone();
        let full = self.listeners.clone();
        for l in &fine {
            l.on_empty(self, time);
        }
        for l in &full {
            l.on_empty(self, time);
        }
    }

    fn fire_next_event(&self) {
        let time = self.clock.value();
        let fine = self.fine_listeners.clone();
        for l in &fine {
            l.on_next_event(self, time);
        }
    }

    // ========================================================================
    // Debug rendering
    // ========================================================================

    /// Writes the clock and every pending event, in processing order.
    pub fn dump<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{} ({} pending):", self, self.events.len())?;
        if self.events.is_empty() {
            writeln!(w, "  EMPTY")?;
        } else {
            for event in self.iter() {
                writeln!(
                    w,
                    "  t={}, name={}, action={}",
                    event.time(),
                    event.name().as_deref().unwrap_or("-"),
                    if event.event_action().is_some() {
                        "yes"
                    } else {
                        "no"
                    }
                )?;
            }
        }
        Ok(())
    }
}

impl<P> Drop for EventList<P> {
    fn drop(&mut self) {
        // Events are co-owned by callers and must stay usable after the
        // list is gone.
        self.clear_events();
    }
}

impl<P> Default for EventList<P> {
    /// A random-order list with the default seed, clock at negative
    /// infinity.
    fn default() -> Self {
        Self::from_parts(SimTime::NEG_INFINITY, TiebreakPolicy::default())
    }
}

impl<P> fmt::Display for EventList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.to_string_fn {
            Some(render) => write!(f, "{}", (**render)(self)),
            None => write!(f, "EventList[t={}]", self.clock.value()),
        }
    }
}

impl<P> fmt::Debug for EventList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventList")
            .field("clock", &self.clock.value())
            .field("first_update", &self.first_update)
            .field("len", &self.events.len())
            .field("running", &self.running)
            .field("tiebreak", &self.tiebreak)
            .finish()
    }
}
