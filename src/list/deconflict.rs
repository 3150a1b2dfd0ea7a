//! Tiebreaker assignment strategies
//!
//! The only behaviour that distinguishes the random-order (ROEL) and
//! insertion-order (IOEL) event lists is how a fresh tiebreaker is drawn
//! when an event is inserted. Both strategies live here, selected at list
//! construction from [`TiebreakPolicy`].

use crate::list::config::TiebreakPolicy;
use crate::rng::TiebreakRng;

/// Per-list tiebreaker source.
#[derive(Debug, Clone)]
pub(crate) enum Deconflicter {
    /// ROEL: draw from a seeded pseudo-random stream. Collisions across
    /// separate draws are astronomically unlikely but possible; they are
    /// detected downstream by the ordering check, never resampled here.
    RandomOrder(TiebreakRng),

    /// IOEL: post-increment a counter seeded at `i64::MIN`. The counter is
    /// re-seeded whenever the list is empty at the start of an insertion,
    /// which amortises rollover. The counter is assumed never to wrap
    /// within a single non-empty interval.
    InsertionOrder { counter: i64 },
}

impl Deconflicter {
    pub fn from_policy(policy: TiebreakPolicy) -> Self {
        match policy {
            TiebreakPolicy::RandomOrder { rng_seed } => {
                Deconflicter::RandomOrder(TiebreakRng::new(rng_seed))
            }
            TiebreakPolicy::InsertionOrder => Deconflicter::InsertionOrder {
                counter: i64::MIN,
            },
        }
    }

    /// Draws the tiebreaker for the event about to be inserted.
    ///
    /// `list_is_empty` must reflect the list state *before* the insertion.
    pub fn next(&mut self, list_is_empty: bool) -> i64 {
        match self {
            Deconflicter::RandomOrder(rng) => rng.next_i64(),
            Deconflicter::InsertionOrder { counter } => {
                if list_is_empty {
                    *counter = i64::MIN;
                }
                *counter += 1;
                *counter
            }
        }
    }
}
