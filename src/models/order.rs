//! Total order on simulation events
//!
//! Events are ordered by scheduled time ascending, then by the
//! engine-assigned tiebreaker ascending. The tiebreaker lifts the partial
//! time order into a total order, so the comparison of two *distinct*
//! enrolled events must never come out equal. That property is load-bearing:
//! a violation means the list failed to assign unique tiebreakers (for the
//! random-order discipline, a genuine collision of random draws) and is
//! surfaced as an error, never repaired silently.

use std::cmp::Ordering;

use thiserror::Error;

use crate::models::event::SimEvent;
use crate::SimTime;

/// Key an enrolled event is filed under in the ordered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct EventKey {
    pub time: SimTime,
    pub deconflict: i64,
}

/// A broken total order among events. Treated as a fatal bug, not a
/// recoverable condition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrderViolation {
    /// Two distinct events carry the same `(time, tiebreaker)` key.
    #[error("distinct events compare equal at (t={time}, deconflict={deconflict})")]
    DistinctEventsEqual { time: f64, deconflict: i64 },

    /// One event handle compared unequal to itself.
    #[error("event compares unequal to itself")]
    SelfUnequal,
}

pub(crate) fn key_of<P>(event: &SimEvent<P>) -> EventKey {
    EventKey {
        time: event.sim_time(),
        deconflict: event.deconflict(),
    }
}

/// Compares two events by `(time, tiebreaker)`.
///
/// Pure: assigning tiebreakers is the insertion operation's job, never the
/// comparator's. Signals [`OrderViolation`] when the result contradicts
/// identity in either direction.
pub fn compare<P>(a: &SimEvent<P>, b: &SimEvent<P>) -> Result<Ordering, OrderViolation> {
    let ord = a
        .sim_time()
        .cmp(&b.sim_time())
        .then_with(|| a.deconflict().cmp(&b.deconflict()));
    let same = SimEvent::ptr_eq(a, b);
    if same && ord != Ordering::Equal {
        return Err(OrderViolation::SelfUnequal);
    }
    if !same && ord == Ordering::Equal {
        return Err(OrderViolation::DistinctEventsEqual {
            time: a.time(),
            deconflict: a.deconflict(),
        });
    }
    Ok(ord)
}
