//! Summary - serializable estimator report
//!
//! Captures the statistics of a finished run together with the config it
//! ran with and a SHA-256 hash of that config, so a stored report can be
//! matched to the parameters that produced it.

use super::engine::{EstimatorConfig, EstimatorError, ThresholdEstimator};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Snapshot of a completed estimator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSummary {
    pub grid_size: usize,
    pub trials: usize,
    pub rng_seed: u64,

    pub mean: f64,

    /// `None` when only one trial ran
    pub stddev: Option<f64>,
    pub confidence_lo: Option<f64>,
    pub confidence_hi: Option<f64>,

    pub min_threshold: f64,
    pub max_threshold: f64,

    /// Total random draws across all trials
    pub total_draws: usize,

    /// SHA256 hash of the config (hex)
    pub config_hash: String,
}

impl ThresholdEstimator {
    /// Build a serializable report of this run
    ///
    /// # Example
    /// ```
    /// use percolation_core_rs::ThresholdEstimator;
    ///
    /// let estimator = ThresholdEstimator::new(10, 1).unwrap();
    /// let summary = estimator.summary().unwrap();
    /// assert_eq!(summary.trials, 1);
    /// assert!(summary.stddev.is_none());
    /// ```
    pub fn summary(&self) -> Result<ThresholdSummary, EstimatorError> {
        let interval = match self.confidence_interval() {
            Ok(bounds) => Some(bounds),
            Err(EstimatorError::InsufficientSamples { .. }) => None,
            Err(e) => return Err(e),
        };

        let thresholds = self.thresholds();
        let min_threshold = thresholds.iter().copied().fold(f64::INFINITY, f64::min);
        let max_threshold = thresholds
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(ThresholdSummary {
            grid_size: self.grid_size(),
            trials: self.trials(),
            rng_seed: self.config().rng_seed,
            mean: self.mean(),
            stddev: self.stddev().ok(),
            confidence_lo: interval.map(|(lo, _)| lo),
            confidence_hi: interval.map(|(_, hi)| hi),
            min_threshold,
            max_threshold,
            total_draws: self.outcomes().iter().map(|o| o.draws).sum(),
            config_hash: compute_config_hash(self.config())?,
        })
    }
}

/// Compute a SHA-256 hex digest of the config's canonical JSON
///
/// serde_json's default map keeps object keys sorted, so equal configs
/// always serialize to the same bytes.
pub fn compute_config_hash(config: &EstimatorConfig) -> Result<String, EstimatorError> {
    let value = serde_json::to_value(config).map_err(|e| {
        EstimatorError::Serialization(format!("Config serialization failed: {}", e))
    })?;
    let json = serde_json::to_string(&value).map_err(|e| {
        EstimatorError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_hash_deterministic() {
        let a = EstimatorConfig::new(20, 30);
        let b = EstimatorConfig::new(20, 30);
        assert_eq!(
            compute_config_hash(&a).unwrap(),
            compute_config_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_config_hash_changes_with_seed() {
        let a = EstimatorConfig::new(20, 30);
        let b = EstimatorConfig {
            rng_seed: 7,
            ..a.clone()
        };
        assert_ne!(
            compute_config_hash(&a).unwrap(),
            compute_config_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_config_hash_is_sha256_hex() {
        let hash = compute_config_hash(&EstimatorConfig::new(3, 3)).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_summary_matches_estimator() {
        let estimator = ThresholdEstimator::from_config(EstimatorConfig {
            grid_size: 8,
            trials: 12,
            rng_seed: 99,
        })
        .unwrap();
        let summary = estimator.summary().unwrap();

        assert_eq!(summary.mean, estimator.mean());
        assert_eq!(summary.stddev, Some(estimator.stddev().unwrap()));
        assert_eq!(summary.confidence_lo, Some(estimator.confidence_lo().unwrap()));
        assert_eq!(summary.confidence_hi, Some(estimator.confidence_hi().unwrap()));
        assert!(summary.min_threshold <= summary.mean);
        assert!(summary.mean <= summary.max_threshold);
        assert_eq!(summary.rng_seed, 99);
        let total_opened: usize = estimator.outcomes().iter().map(|o| o.opened_sites).sum();
        assert!(summary.total_draws >= total_opened);
    }

    #[test]
    fn test_summary_json_roundtrip() {
        let summary = ThresholdEstimator::new(5, 4).unwrap().summary().unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: ThresholdSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.config_hash, summary.config_hash);
        assert_eq!(parsed.trials, 4);
    }
}
