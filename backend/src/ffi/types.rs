//! Type conversion utilities for FFI boundary
//!
//! Converts estimator results into Python dicts and estimator errors into
//! Python exceptions.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::estimator::{EstimatorError, ThresholdSummary};

/// Map an estimator error to `ValueError` with its display message
pub fn estimator_error_to_py(error: EstimatorError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

/// Convert ThresholdSummary to Python dict
///
/// Missing statistics (single-trial runs) become `None`.
pub fn summary_to_py(py: Python<'_>, summary: &ThresholdSummary) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("grid_size", summary.grid_size)?;
    dict.set_item("trials", summary.trials)?;
    dict.set_item("rng_seed", summary.rng_seed)?;
    dict.set_item("mean", summary.mean)?;
    dict.set_item("stddev", summary.stddev)?;
    dict.set_item("confidence_lo", summary.confidence_lo)?;
    dict.set_item("confidence_hi", summary.confidence_hi)?;
    dict.set_item("min_threshold", summary.min_threshold)?;
    dict.set_item("max_threshold", summary.max_threshold)?;
    dict.set_item("total_draws", summary.total_draws)?;
    dict.set_item("config_hash", &summary.config_hash)?;

    Ok(dict.into())
}
