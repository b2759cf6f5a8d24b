//! Fetch window type for range-scoped queries.
//!
//! A [`FetchWindow`] identifies the `(start, end)` range of a fetch or a
//! cache query. Windows are compared for throttling purposes by the RFC 3339
//! serialization of both boundaries, so two windows are "the same" only when
//! their serialized instants are string-equal.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A query range over event start instants.
///
/// Both bounds are inclusive: merge and query treat an event whose start
/// equals either boundary as inside the window. A reversed window
/// (`end < start`) is representable but rejected by the fetch coordinator;
/// see [`FetchWindow::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchWindow {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (inclusive).
    pub end: DateTime<Utc>,
}

impl FetchWindow {
    /// Creates a new fetch window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Creates a window from a start instant and a duration.
    pub fn from_duration(start: DateTime<Utc>, duration: Duration) -> Self {
        Self::new(start, start + duration)
    }

    /// Returns false when the window is reversed (`end < start`).
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Identity key for throttle comparison.
    ///
    /// Two windows are identical iff their keys are string-equal.
    pub fn key(&self) -> String {
        format!("{}/{}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }

    /// Checks whether an instant falls within `[start, end]` inclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns the span of the window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
