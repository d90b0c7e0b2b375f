//! PyO3 wrapper for ThresholdEstimator
//!
//! This module provides the Python interface to the Rust estimator.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{estimator_error_to_py, summary_to_py};
use crate::estimator::{EstimatorConfig, ThresholdEstimator as RustEstimator, DEFAULT_RNG_SEED};

/// Python wrapper for Rust ThresholdEstimator
///
/// # Example (from Python)
///
/// ```python
/// from percolation_core_rs import ThresholdEstimator
///
/// est = ThresholdEstimator(200, 100, seed=42)
/// print(est.mean(), est.confidence_lo(), est.confidence_hi())
/// ```
#[pyclass(name = "ThresholdEstimator")]
pub struct PyThresholdEstimator {
    inner: RustEstimator,
}

#[pymethods]
impl PyThresholdEstimator {
    /// Run `trials` experiments on an `n`×`n` grid
    ///
    /// # Errors
    ///
    /// Raises ValueError if `n` or `trials` is zero.
    #[new]
    #[pyo3(signature = (n, trials, seed=None))]
    fn new(n: usize, trials: usize, seed: Option<u64>) -> PyResult<Self> {
        let config = EstimatorConfig {
            grid_size: n,
            trials,
            rng_seed: seed.unwrap_or(DEFAULT_RNG_SEED),
        };
        let inner = RustEstimator::from_config(config).map_err(estimator_error_to_py)?;
        Ok(PyThresholdEstimator { inner })
    }

    fn mean(&self) -> f64 {
        self.inner.mean()
    }

    /// Raises ValueError when only one trial ran
    fn stddev(&self) -> PyResult<f64> {
        self.inner.stddev().map_err(estimator_error_to_py)
    }

    fn confidence_lo(&self) -> PyResult<f64> {
        self.inner.confidence_lo().map_err(estimator_error_to_py)
    }

    fn confidence_hi(&self) -> PyResult<f64> {
        self.inner.confidence_hi().map_err(estimator_error_to_py)
    }

    /// Per-trial threshold fractions as a list of floats
    fn thresholds(&self) -> Vec<f64> {
        self.inner.thresholds().to_vec()
    }

    /// Full run report as a dict
    fn summary(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let summary = self.inner.summary().map_err(estimator_error_to_py)?;
        summary_to_py(py, &summary)
    }
}
