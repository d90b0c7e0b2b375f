//! Threshold estimator - Monte Carlo runs over independent grids
//!
//! See `engine.rs` for the trial loop and `summary.rs` for reporting.

pub mod engine;
pub mod summary;

pub use engine::{
    run_trial, EstimatorConfig, EstimatorError, ThresholdEstimator, TrialOutcome,
    DEFAULT_RNG_SEED,
};
pub use summary::{compute_config_hash, ThresholdSummary};
