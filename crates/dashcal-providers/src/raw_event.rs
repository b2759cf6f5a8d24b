//! Raw event type as returned by the calendar proxy.
//!
//! [`RawEvent`] mirrors the provider's wire shape before normalization.
//! Only the fields the dashboard reads are modeled; unknown fields in the
//! payload are ignored during deserialization.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A start or end boundary on a raw event.
///
/// Providers send either an RFC 3339 timestamp (`dateTime`) or a plain
/// `YYYY-MM-DD` date for all-day events. Both may be absent or malformed;
/// the normalizer decides what to do about that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBoundary {
    /// RFC 3339 timestamp, when the event has a specific time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// All-day date, when the event has no specific time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RawBoundary {
    /// Creates a boundary from an RFC 3339 timestamp string.
    pub fn from_date_time(date_time: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            date: None,
        }
    }

    /// Creates an all-day boundary from a `YYYY-MM-DD` string.
    pub fn from_date(date: impl Into<String>) -> Self {
        Self {
            date_time: None,
            date: Some(date.into()),
        }
    }

    /// Returns true when neither a timestamp nor a date is present.
    pub fn is_empty(&self) -> bool {
        self.date_time.is_none() && self.date.is_none()
    }

    /// Resolves the boundary to an absolute instant.
    ///
    /// Timestamps take precedence over dates; all-day dates resolve to
    /// midnight UTC. Returns `None` when the boundary is empty or fails to
    /// parse.
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        if let Some(ref dt) = self.date_time {
            return DateTime::parse_from_rfc3339(dt)
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc));
        }
        if let Some(ref date) = self.date {
            let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
        }
        None
    }
}

/// A raw calendar event from the proxy, prior to normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// Unique identifier within the provider.
    pub id: String,
    /// The event title, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// When the event starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<RawBoundary>,
    /// When the event ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<RawBoundary>,
    /// The event location, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The event description, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RawEvent {
    /// Creates a raw event with the given id and start boundary.
    pub fn new(id: impl Into<String>, start: RawBoundary) -> Self {
        Self {
            id: id.into(),
            start: Some(start),
            ..Self::default()
        }
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the end boundary.
    pub fn with_end(mut self, end: RawBoundary) -> Self {
        self.end = Some(end);
        self
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
