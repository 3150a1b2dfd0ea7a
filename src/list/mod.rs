//! The event-list core: configuration, tiebreak strategies and the engine.

pub mod config;
mod deconflict;
pub mod engine;

// Re-export main types for convenience
pub use config::{EventListConfig, TiebreakPolicy, DEFAULT_RNG_SEED};
pub use engine::{EventList, EventListError, InterruptFlag, ListFormatter};
