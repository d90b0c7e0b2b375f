//! Percolation Core - Rust Engine
//!
//! Monte Carlo estimation of the site-percolation threshold on an n×n grid.
//!
//! # Architecture
//!
//! - **collections**: Weighted quick-union with path compression
//! - **grid**: Percolation engine (open/full/percolates, backwash-free)
//! - **estimator**: Trial loop, statistics and run summaries
//! - **models**: Event log of trial progress
//! - **rng**: Deterministic random number generation
//! - **stats**: Mean, sample standard deviation, confidence interval
//!
//! # Critical Invariants
//!
//! 1. Sites are only ever opened, never closed
//! 2. The fullness structure never contains the bottom sentinel
//! 3. All randomness is deterministic (seeded RNG or injected source)

// Module declarations
pub mod collections;
pub mod estimator;
pub mod grid;
pub mod models;
pub mod rng;
pub mod stats;

// Re-exports for convenience
pub use collections::UnionFind;
pub use estimator::{
    compute_config_hash, EstimatorConfig, EstimatorError, ThresholdEstimator, ThresholdSummary,
    TrialOutcome, DEFAULT_RNG_SEED,
};
pub use grid::{GridError, Percolation};
pub use models::event::{Event, EventLog};
pub use rng::{RngManager, UniformSource};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn percolation_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<ffi::estimator::PyThresholdEstimator>()?;
    Ok(())
}
