//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random draws.
//! All tiebreak randomness in the engine goes through this module; each
//! event list carries its own seeded stream.

mod xorshift;

pub use xorshift::TiebreakRng;
