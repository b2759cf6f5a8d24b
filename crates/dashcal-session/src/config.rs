//! Session configuration.

use std::time::Duration;

/// Configuration for a [`CalendarSession`](crate::CalendarSession).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The calendar to fetch events from.
    pub calendar_id: String,
    /// Maximum number of events requested per fetch.
    pub max_results: usize,
    /// Minimum time between two fetches of the same window.
    pub throttle_interval: Duration,
    /// How long after an invalidation the throttle stays bypassed.
    pub invalidation_grace: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            calendar_id: "primary".to_string(),
            max_results: 100,
            throttle_interval: Duration::from_millis(2000),
            invalidation_grace: Duration::from_millis(1000),
        }
    }
}

impl SessionConfig {
    /// Creates a config for the given calendar.
    pub fn new(calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            ..Default::default()
        }
    }

    /// Builder: set the per-fetch result cap.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Builder: set the throttle interval.
    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval = interval;
        self
    }

    /// Builder: set the invalidation grace window.
    pub fn with_invalidation_grace(mut self, grace: Duration) -> Self {
        self.invalidation_grace = grace;
        self
    }
}
