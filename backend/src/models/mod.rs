//! Domain models shared across the estimator

pub mod event;

// Re-exports
pub use event::{Event, EventLog};
