//! Grid engine - site state and connectivity for one percolation run
//!
//! See `percolation.rs` for the backwash-free dual union-find wiring.

pub mod percolation;

pub use percolation::{GridError, Percolation};
