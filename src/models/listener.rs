//! Event-list listener contracts
//!
//! Listeners come in three capability levels, registered with the list in
//! disjoint registries keyed by capability:
//!
//! - [`ResetListener`]: reset notifications only.
//! - [`ListListener`]: reset + update (clock jumps) + list-became-empty.
//! - [`FineListener`]: all of the above + a notification immediately
//!   before each event is processed.
//!
//! Dispatch order across registries is fixed: reset notifications reach
//! fine listeners, then full listeners, then reset-only listeners; update
//! and empty notifications reach fine then full listeners; next-event
//! notifications reach fine listeners only.
//!
//! Notification methods take `&self`; listeners that accumulate state use
//! interior mutability.
//!
//! # Example
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use des_core_rs::{EventList, ListListener, ResetListener, SimEvent};
//!
//! #[derive(Default)]
//! struct UpdateCounter {
//!     updates: Cell<usize>,
//! }
//!
//! impl ResetListener for UpdateCounter {
//!     fn on_reset(&self, _list: &EventList) {
//!         self.updates.set(0);
//!     }
//! }
//!
//! impl ListListener for UpdateCounter {
//!     fn on_update(&self, _list: &EventList, _time: f64) {
//!         self.updates.set(self.updates.get() + 1);
//!     }
//!     fn on_empty(&self, _list: &EventList, _time: f64) {}
//! }
//!
//! let mut list: EventList = EventList::insertion_order();
//! let counter = Rc::new(UpdateCounter::default());
//! list.add_list_listener(counter.clone());
//! list.add(&SimEvent::new(10.0)).unwrap();
//! list.add(&SimEvent::new(15.8)).unwrap();
//! list.run().unwrap();
//! assert_eq!(counter.updates.get(), 2);
//! ```

use crate::list::EventList;

/// Reset-only capability: notified when the list is reset.
pub trait ResetListener<P = ()> {
    /// The list was reset: cleared, clock moved to the reset time.
    fn on_reset(&self, list: &EventList<P>);
}

/// Standard capability: reset, clock updates and emptiness.
pub trait ListListener<P = ()>: ResetListener<P> {
    /// The clock advanced to `time` (or was observed for the first time
    /// since construction or reset). Not fired for same-time events after
    /// the first.
    fn on_update(&self, list: &EventList<P>, time: f64);

    /// A run left the list empty; `time` is the current clock.
    fn on_empty(&self, list: &EventList<P>, time: f64);
}

/// Per-event capability: everything above plus a pre-processing hook.
pub trait FineListener<P = ()>: ListListener<P> {
    /// The run loop is about to take the next event off the list. `time`
    /// is the clock *before* that event is processed (the time of the
    /// previous event, or the reset time at the start of a run).
    fn on_next_event(&self, list: &EventList<P>, time: f64);
}
