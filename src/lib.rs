//! Discrete-Event Simulation Core
//!
//! A priority-ordered, time-stamped event list that advances a simulated
//! clock by repeatedly extracting the earliest scheduled event and
//! invoking its action. Actions may schedule further events, producing an
//! open-ended, self-driving sequence that terminates on emptiness, an
//! externally supplied horizon, or cooperative interruption.
//!
//! # Architecture
//!
//! - **core**: simulated-time primitives
//! - **models**: events, the total order over them, listener contracts
//! - **list**: the event-list engine, its configuration and tiebreak
//!   disciplines
//! - **rng**: deterministic random number generation
//! - **timer**: one-shot cancellable timers layered on the list
//!
//! # Critical Invariants
//!
//! 1. The clock never decreases within a run
//! 2. All randomness is deterministic (per-list seeded stream; no
//!    process-wide state)
//! 3. Enrolled events carry unique `(time, tiebreaker)` keys
//!
//! # Example
//!
//! ```
//! use des_core_rs::{EventList, SimEvent};
//!
//! let mut list: EventList = EventList::insertion_order();
//! list.add(&SimEvent::new(10.0)).unwrap();
//! list.add(&SimEvent::new(15.8).with_action(|list, event| {
//!     println!("last event at {}", event.time());
//!     list.schedule_action(20.0, None, Some("marker")).map(|_| ())
//! })).unwrap();
//! list.run().unwrap();
//! assert_eq!(list.time(), 20.0);
//! ```

// Module declarations
pub mod core;
pub mod list;
pub mod models;
pub mod rng;
pub mod timer;

// Re-exports for convenience
pub use crate::core::time::SimTime;
pub use list::{
    EventList, EventListConfig, EventListError, InterruptFlag, ListFormatter, TiebreakPolicy,
    DEFAULT_RNG_SEED,
};
pub use models::{
    action, compare, EventAction, EventFactory, FineListener, ListListener, OrderViolation,
    ResetListener, SimEvent,
};
pub use rng::TiebreakRng;
pub use timer::{Timer, TimerError};
