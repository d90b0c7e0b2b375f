//! Python bindings (feature `pyo3`)

pub mod estimator;
pub mod types;
