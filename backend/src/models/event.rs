//! Event logging for trial replay and auditing.
//!
//! Every estimator run records what each trial did, in order:
//! - **TrialStarted**: a fresh grid was allocated
//! - **TrialCompleted**: the grid percolated; opened-site count, draw count
//!   and threshold fraction are captured
//!
//! # Example
//!
//! ```rust
//! use percolation_core_rs::models::{Event, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(Event::TrialStarted { trial: 0, grid_size: 20 });
//! log.log(Event::TrialCompleted {
//!     trial: 0,
//!     opened_sites: 236,
//!     draws: 310,
//!     threshold: 0.59,
//! });
//!
//! assert_eq!(log.events_for_trial(0).len(), 2);
//! assert_eq!(log.events_of_type("TrialCompleted").len(), 1);
//! ```

/// Estimator event capturing trial progress.
///
/// All events carry the 0-based trial number for ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A trial began on a fresh, fully blocked grid
    TrialStarted { trial: usize, grid_size: usize },

    /// The trial's grid percolated
    TrialCompleted {
        trial: usize,
        /// Distinct sites opened before percolation
        opened_sites: usize,
        /// Random draws taken, redraws of open sites included
        draws: usize,
        /// `opened_sites / grid_size²`
        threshold: f64,
    },
}

impl Event {
    /// Trial number the event belongs to
    pub fn trial(&self) -> usize {
        match self {
            Event::TrialStarted { trial, .. } => *trial,
            Event::TrialCompleted { trial, .. } => *trial,
        }
    }

    /// Event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::TrialStarted { .. } => "TrialStarted",
            Event::TrialCompleted { .. } => "TrialCompleted",
        }
    }
}

/// Event log for storing and querying estimator events.
///
/// A thin wrapper around `Vec<Event>`.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in logging order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events for a specific trial
    pub fn events_for_trial(&self, trial: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.trial() == trial).collect()
    }

    /// Events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
