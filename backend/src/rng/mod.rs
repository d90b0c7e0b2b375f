//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, reproducible draws. The estimator never
//! reaches for global randomness: it takes a [`UniformSource`] so tests
//! can inject scripted draws and runs can be replayed from a seed.

mod xorshift;

pub use xorshift::RngManager;

/// Source of uniformly distributed integers
///
/// # Example
/// ```
/// use percolation_core_rs::{RngManager, UniformSource};
///
/// let mut rng = RngManager::new(7);
/// let row = rng.uniform(10);
/// assert!(row < 10);
/// ```
pub trait UniformSource {
    /// Return a value in `[0, k)`
    ///
    /// Callers must pass `k > 0`.
    fn uniform(&mut self, k: usize) -> usize;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn uniform(&mut self, k: usize) -> usize {
        (**self).uniform(k)
    }
}
