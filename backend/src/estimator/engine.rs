//! Threshold Estimator - Monte Carlo trial loop
//!
//! Runs `trials` independent percolation experiments on fresh n×n grids
//! and reduces the per-trial threshold fractions to summary statistics.
//!
//! # Trial Procedure
//!
//! ```text
//! For each trial k:
//! 1. Allocate a fully blocked grid
//! 2. Draw (row, col) uniformly from [1, n] × [1, n]
//! 3. If the site is blocked, open it and count it
//! 4. Repeat 2-3 until the grid percolates
//! 5. Record opened / n²
//! ```
//!
//! Redraws of an already open site are counted as draws but never as
//! openings, otherwise the threshold would be biased upwards.
//!
//! # Example
//!
//! ```rust
//! use percolation_core_rs::{EstimatorConfig, ThresholdEstimator};
//!
//! let config = EstimatorConfig {
//!     grid_size: 20,
//!     trials: 30,
//!     rng_seed: 12345,
//! };
//!
//! let estimator = ThresholdEstimator::from_config(config).unwrap();
//! let (lo, hi) = (
//!     estimator.confidence_lo().unwrap(),
//!     estimator.confidence_hi().unwrap(),
//! );
//! assert!(lo <= estimator.mean() && estimator.mean() <= hi);
//! ```

use crate::grid::{GridError, Percolation};
use crate::models::event::{Event, EventLog};
use crate::rng::{RngManager, UniformSource};
use crate::stats;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seed used by `EstimatorConfig::new` when none is given
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_CAFE;

// ============================================================================
// Configuration & Errors
// ============================================================================

/// Estimator configuration
///
/// # Fields
///
/// * `grid_size` - Grid dimension n (n × n sites)
/// * `trials` - Number of independent experiments T
/// * `rng_seed` - Seed for the deterministic random source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub grid_size: usize,
    pub trials: usize,
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
}

fn default_rng_seed() -> u64 {
    DEFAULT_RNG_SEED
}

impl EstimatorConfig {
    /// Config with the default seed
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }

    /// Reject zero grid size or zero trial count
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.grid_size == 0 || self.trials == 0 {
            return Err(EstimatorError::InvalidParameters {
                grid_size: self.grid_size as i64,
                trials: self.trials as i64,
            });
        }
        Ok(())
    }
}

/// Errors raised by the threshold estimator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimatorError {
    /// Parameters are signed so that callers parsing user input can report
    /// negative values through the same variant
    #[error("Invalid parameters: grid size {grid_size} and trials {trials} must both be positive")]
    InvalidParameters { grid_size: i64, trials: i64 },

    #[error("Standard deviation needs at least 2 trials, got {trials}")]
    InsufficientSamples { trials: usize },

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result of one completed trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Distinct sites opened when the grid first percolated
    pub opened_sites: usize,
    /// Random draws taken, including redraws of open sites
    pub draws: usize,
    /// `opened_sites / n²`, always in `(0, 1]`
    pub threshold: f64,
}

// ============================================================================
// Estimator
// ============================================================================

/// Percolation threshold estimator
///
/// Construction runs every trial; afterwards the estimator is read-only.
#[derive(Debug, Clone)]
pub struct ThresholdEstimator {
    config: EstimatorConfig,
    outcomes: Vec<TrialOutcome>,
    thresholds: Vec<f64>,
    event_log: EventLog,
}

impl ThresholdEstimator {
    /// Run `trials` experiments on `n`×`n` grids with the default seed
    ///
    /// # Errors
    /// `EstimatorError::InvalidParameters` if `n == 0` or `trials == 0`.
    pub fn new(n: usize, trials: usize) -> Result<Self, EstimatorError> {
        Self::from_config(EstimatorConfig::new(n, trials))
    }

    /// Run the experiments described by `config`
    pub fn from_config(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        let mut rng = RngManager::new(config.rng_seed);
        Self::run(config, &mut rng)
    }

    /// Run `trials` experiments drawing sites from `source`
    ///
    /// The recorded config carries `DEFAULT_RNG_SEED`, which does not
    /// describe an injected source.
    pub fn with_source<S: UniformSource>(
        n: usize,
        trials: usize,
        source: &mut S,
    ) -> Result<Self, EstimatorError> {
        let config = EstimatorConfig::new(n, trials);
        config.validate()?;
        Self::run(config, source)
    }

    fn run<S: UniformSource>(
        config: EstimatorConfig,
        source: &mut S,
    ) -> Result<Self, EstimatorError> {
        let mut event_log = EventLog::new();
        let mut outcomes = Vec::with_capacity(config.trials);

        for trial in 0..config.trials {
            event_log.log(Event::TrialStarted {
                trial,
                grid_size: config.grid_size,
            });

            let outcome = run_trial(config.grid_size, source)?;

            event_log.log(Event::TrialCompleted {
                trial,
                opened_sites: outcome.opened_sites,
                draws: outcome.draws,
                threshold: outcome.threshold,
            });
            outcomes.push(outcome);
        }

        let thresholds = outcomes.iter().map(|o| o.threshold).collect();

        Ok(Self {
            config,
            outcomes,
            thresholds,
            event_log,
        })
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        // Construction guarantees at least one trial
        stats::mean(&self.thresholds).unwrap_or(f64::NAN)
    }

    /// Sample standard deviation of the percolation threshold
    ///
    /// # Errors
    /// `EstimatorError::InsufficientSamples` when only one trial ran.
    pub fn stddev(&self) -> Result<f64, EstimatorError> {
        stats::sample_std_dev(&self.thresholds).ok_or(EstimatorError::InsufficientSamples {
            trials: self.thresholds.len(),
        })
    }

    /// Lower bound of the 95% confidence interval
    pub fn confidence_lo(&self) -> Result<f64, EstimatorError> {
        Ok(self.confidence_interval()?.0)
    }

    /// Upper bound of the 95% confidence interval
    pub fn confidence_hi(&self) -> Result<f64, EstimatorError> {
        Ok(self.confidence_interval()?.1)
    }

    /// `(lo, hi)` of the 95% confidence interval
    pub fn confidence_interval(&self) -> Result<(f64, f64), EstimatorError> {
        let stddev = self.stddev()?;
        Ok(stats::confidence_interval_95(
            self.mean(),
            stddev,
            self.thresholds.len(),
        ))
    }

    /// Per-trial threshold fractions, in trial order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Per-trial outcomes, in trial order
    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.outcomes
    }

    pub fn trials(&self) -> usize {
        self.config.trials
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }
}

/// Open random sites on a fresh n×n grid until it percolates
///
/// Terminates for every `n >= 1`: at most n² sites can be opened and a
/// fully open grid percolates.
pub fn run_trial<S: UniformSource>(n: usize, source: &mut S) -> Result<TrialOutcome, GridError> {
    let mut grid = Percolation::new(n)?;
    let mut draws = 0;

    while !grid.percolates() {
        let row = source.uniform(n) + 1;
        let col = source.uniform(n) + 1;
        draws += 1;

        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
        }
    }

    let opened_sites = grid.number_of_open_sites();
    Ok(TrialOutcome {
        opened_sites,
        draws,
        threshold: opened_sites as f64 / (n as f64 * n as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, then repeats the last one
    struct ScriptedSource {
        draws: Vec<usize>,
        position: usize,
    }

    impl UniformSource for ScriptedSource {
        fn uniform(&mut self, k: usize) -> usize {
            let index = self.position.min(self.draws.len() - 1);
            self.position += 1;
            self.draws[index] % k
        }
    }

    #[test]
    fn test_single_site_grid_needs_one_open() {
        let mut rng = RngManager::new(1);
        let outcome = run_trial(1, &mut rng).unwrap();
        assert_eq!(outcome.opened_sites, 1);
        assert_eq!(outcome.draws, 1);
        assert_eq!(outcome.threshold, 1.0);
    }

    #[test]
    fn test_redraws_are_not_counted_as_openings() {
        // (1,1), (1,1) again, then (2,1): left column percolates
        let mut source = ScriptedSource {
            draws: vec![0, 0, 0, 0, 1, 0],
            position: 0,
        };
        let outcome = run_trial(2, &mut source).unwrap();
        assert_eq!(outcome.draws, 3);
        assert_eq!(outcome.opened_sites, 2);
        assert_eq!(outcome.threshold, 0.5);
    }

    #[test]
    fn test_config_validate() {
        assert!(EstimatorConfig::new(5, 5).validate().is_ok());
        assert_eq!(
            EstimatorConfig::new(0, 5).validate(),
            Err(EstimatorError::InvalidParameters {
                grid_size: 0,
                trials: 5
            })
        );
    }

    #[test]
    fn test_config_seed_defaults_when_missing_from_json() {
        let config: EstimatorConfig =
            serde_json::from_str(r#"{"grid_size": 8, "trials": 3}"#).unwrap();
        assert_eq!(config, EstimatorConfig::new(8, 3));
    }
}
