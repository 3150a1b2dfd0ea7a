//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG used to draw tiebreaker values for the
//! random-order event-list discipline.
//!
//! # Determinism
//!
//! Same seed → same sequence of tiebreakers → same processing order among
//! simultaneous events. Each event list owns its own stream; there is no
//! process-wide generator state.

/// Deterministic random stream using xorshift64*
///
/// # Example
/// ```
/// use des_core_rs::TiebreakRng;
///
/// let mut rng = TiebreakRng::new(12345);
/// let a = rng.next_i64();
/// let b = rng.next_i64();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct TiebreakRng {
    /// Internal state (64-bit); never zero.
    state: u64,
}

impl TiebreakRng {
    /// Create a new stream with the given seed.
    ///
    /// A zero seed is mapped to 1 (xorshift state must be nonzero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value, advancing the state.
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate the next random i64 value.
    ///
    /// This is the draw used for event tiebreakers; the full signed range
    /// is covered.
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Current generator state, for reproducibility checks.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Re-seed the stream in place.
    pub fn reseed(&mut self, seed: u64) {
        self.state = if seed == 0 { 1 } else { seed };
    }
}
