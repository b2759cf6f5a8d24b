//! Normalized event types.
//!
//! This module provides the canonical event representation used throughout
//! the dashboard:
//! - [`NormalizedEvent`]: a provider-agnostic event record
//! - [`TemporalStatus`]: where an event sits relative to "now"

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::EventCategory;

/// Where an event sits relative to a reference instant.
///
/// Derived once, at normalization time. The status is a snapshot: an event
/// read from the cache long after it was fetched keeps the status it had
/// when normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalStatus {
    /// The event ended before the reference instant.
    Completed,
    /// The reference instant falls within `[start, end]`.
    Current,
    /// The event starts after the reference instant.
    Upcoming,
}

impl TemporalStatus {
    /// Derives the status of `[start, end]` against `now`.
    ///
    /// Both boundaries are inclusive: an event ending exactly at `now` is
    /// still Current.
    pub fn derive(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if end < now {
            Self::Completed
        } else if start <= now {
            Self::Current
        } else {
            Self::Upcoming
        }
    }
}

/// A normalized calendar event.
///
/// This is the canonical representation after fetching from the remote
/// provider. `end >= start` is NOT guaranteed: the source may produce
/// zero-length or malformed reversed ranges, and callers must tolerate a
/// zero or negative duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Unique identifier, stable across fetches of the same remote event.
    pub id: String,
    /// Display title.
    pub title: String,
    /// When the event starts.
    pub start: DateTime<Utc>,
    /// When the event ends. Defaults to `start` when the source omits it.
    pub end: DateTime<Utc>,
    /// Rounded event length in minutes; zero or negative for malformed input.
    pub duration_minutes: i64,
    /// Display category derived from the title.
    pub category: EventCategory,
    /// Temporal status snapshot taken at normalization time.
    pub status: TemporalStatus,
    /// The event location, if available.
    pub location: Option<String>,
    /// The event description, if available.
    pub description: Option<String>,
}

impl NormalizedEvent {
    /// Creates a normalized event, deriving duration, category, and status.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let title = title.into();
        let category = crate::category::classify_title(&title);
        Self {
            id: id.into(),
            title,
            start,
            end,
            duration_minutes: rounded_minutes(start, end),
            category,
            status: TemporalStatus::derive(start, end, now),
            location: None,
            description: None,
        }
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Rounds `(end - start)` to whole minutes.
fn rounded_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    (seconds as f64 / 60.0).round() as i64
}
