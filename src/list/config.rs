//! Event-list construction configuration
//!
//! Mirrors the runtime options of the engine that are plain data: the
//! default reset time and the tiebreak discipline (with its seed, for the
//! random-order variant). Closure-valued options — the event factory and
//! the debug formatter — are injected at runtime instead and do not appear
//! here.

use serde::{Deserialize, Serialize};

/// Seed used by [`TiebreakPolicy::default`] and [`EventListConfig::default`].
pub const DEFAULT_RNG_SEED: u64 = 1;

/// How a list assigns tiebreakers to simultaneous events.
///
/// # Example
/// ```
/// use des_core_rs::TiebreakPolicy;
///
/// let policy: TiebreakPolicy =
///     serde_json::from_str(r#"{ "type": "random_order", "rng_seed": 42 }"#).unwrap();
/// assert_eq!(policy, TiebreakPolicy::RandomOrder { rng_seed: 42 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TiebreakPolicy {
    /// ROEL: simultaneous events run in a seed-determined pseudo-random
    /// order.
    RandomOrder { rng_seed: u64 },

    /// IOEL: simultaneous events run in insertion order.
    InsertionOrder,
}

impl Default for TiebreakPolicy {
    fn default() -> Self {
        TiebreakPolicy::RandomOrder {
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

/// Complete event-list configuration.
///
/// # Fields
///
/// * `default_reset_time` - Clock value installed by a parameterless
///   reset (and at construction); defaults to negative infinity.
/// * `tiebreak` - Tiebreak discipline for simultaneous events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListConfig {
    /// Clock value installed by `reset()`; may be infinite.
    #[serde(default = "negative_infinity")]
    pub default_reset_time: f64,

    /// Tiebreak discipline.
    #[serde(default)]
    pub tiebreak: TiebreakPolicy,
}

fn negative_infinity() -> f64 {
    f64::NEG_INFINITY
}

impl Default for EventListConfig {
    fn default() -> Self {
        Self {
            default_reset_time: f64::NEG_INFINITY,
            tiebreak: TiebreakPolicy::default(),
        }
    }
}
