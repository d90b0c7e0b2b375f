//! xorshift64* random number generator
//!
//! A fast PRNG with 64-bit state that passes TestU01's BigCrush. Same seed
//! gives the same sequence, which makes threshold estimates reproducible.

use super::UniformSource;
use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use percolation_core_rs::{RngManager, UniformSource};
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let col = rng.uniform(100); // [0, 100)
/// assert!(col < 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1, since xorshift is stuck at zero.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state
    ///
    /// `RngManager::new(rng.get_state())` continues the same sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl UniformSource for RngManager {
    /// Draw from `[0, k)` without modulo bias
    ///
    /// Values from the incomplete top bucket of the u64 range are
    /// rejected and redrawn.
    ///
    /// # Panics
    /// Panics if `k == 0`.
    fn uniform(&mut self, k: usize) -> usize {
        assert!(k > 0, "uniform bound must be positive");

        let bound = k as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }
}
