//! RawEvent to NormalizedEvent conversion.
//!
//! Normalization is a pure transform: one raw provider event in, one
//! canonical event (or a skip) out. A skipped event never fails the batch
//! it arrived in.

use chrono::{DateTime, Utc};
use tracing::warn;

use dashcal_core::NormalizedEvent;

use crate::raw_event::RawEvent;

/// Converts a [`RawEvent`] to a [`NormalizedEvent`].
///
/// Returns `None` (skip this event) when the raw event has no start
/// boundary at all, or when a present start or end boundary fails to parse
/// into an instant. A missing end boundary is not an error: it defaults to
/// the start instant.
///
/// The temporal status is derived against `now` once, here; it is a
/// snapshot that later cache reads do not refresh.
pub fn normalize(raw: &RawEvent, now: DateTime<Utc>) -> Option<NormalizedEvent> {
    let start_boundary = match raw.start {
        Some(ref boundary) if !boundary.is_empty() => boundary,
        _ => {
            warn!(id = %raw.id, "event has no start boundary, skipping");
            return None;
        }
    };

    let Some(start) = start_boundary.to_instant() else {
        warn!(id = %raw.id, "event start failed to parse, skipping");
        return None;
    };

    let end = match raw.end {
        Some(ref boundary) if !boundary.is_empty() => match boundary.to_instant() {
            Some(end) => end,
            None => {
                warn!(id = %raw.id, "event end failed to parse, skipping");
                return None;
            }
        },
        _ => start,
    };

    let title = raw
        .summary
        .as_ref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.as_str())
        .unwrap_or("(No title)");

    let mut event = NormalizedEvent::new(&raw.id, title, start, end, now);

    if let Some(ref location) = raw.location {
        event = event.with_location(location);
    }

    if let Some(ref description) = raw.description {
        event = event.with_description(description);
    }

    Some(event)
}

/// Batch normalize, dropping events that fail to normalize.
///
/// A malformed event is a per-item condition: the rest of the batch still
/// comes through.
pub fn normalize_events(raw_events: &[RawEvent], now: DateTime<Utc>) -> Vec<NormalizedEvent> {
    raw_events.iter().filter_map(|raw| normalize(raw, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw_event::RawBoundary;
    use chrono::TimeZone;
    use dashcal_core::{EventCategory, TemporalStatus};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 5, 9, 0, 0).unwrap()
    }

    fn sample_raw() -> RawEvent {
        RawEvent::new("evt-123", RawBoundary::from_date_time("2025-02-05T10:00:00Z"))
            .with_summary("Team Meeting")
            .with_end(RawBoundary::from_date_time("2025-02-05T11:00:00Z"))
    }

    mod single_event {
        use super::*;

        #[test]
        fn normalizes_complete_event() {
            let event = normalize(&sample_raw(), now()).unwrap();

            assert_eq!(event.id, "evt-123");
            assert_eq!(event.title, "Team Meeting");
            assert_eq!(event.duration_minutes, 60);
            assert_eq!(event.category, EventCategory::Meeting);
            assert_eq!(event.status, TemporalStatus::Upcoming);
        }

        #[test]
        fn missing_end_defaults_to_start() {
            let raw = RawEvent::new("evt-1", RawBoundary::from_date_time("2025-02-05T10:00:00Z"));
            let event = normalize(&raw, now()).unwrap();

            assert_eq!(event.start, event.end);
            assert_eq!(event.duration_minutes, 0);
        }

        #[test]
        fn missing_title_gets_placeholder() {
            let raw = RawEvent::new("evt-1", RawBoundary::from_date_time("2025-02-05T10:00:00Z"));
            assert_eq!(normalize(&raw, now()).unwrap().title, "(No title)");

            let raw = raw.with_summary("   ");
            assert_eq!(normalize(&raw, now()).unwrap().title, "(No title)");
        }

        #[test]
        fn all_day_event_resolves_to_midnight_utc() {
            let raw = RawEvent::new("evt-1", RawBoundary::from_date("2025-02-05"))
                .with_end(RawBoundary::from_date("2025-02-06"));
            let event = normalize(&raw, now()).unwrap();

            assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 2, 5, 0, 0, 0).unwrap());
            assert_eq!(event.duration_minutes, 24 * 60);
        }

        #[test]
        fn passes_through_optional_fields() {
            let raw = sample_raw()
                .with_location("Room 101")
                .with_description("Weekly sync");
            let event = normalize(&raw, now()).unwrap();

            assert_eq!(event.location, Some("Room 101".to_string()));
            assert_eq!(event.description, Some("Weekly sync".to_string()));
        }

        #[test]
        fn classifies_from_title() {
            let raw = sample_raw().with_summary("Algorithms lecture");
            assert_eq!(normalize(&raw, now()).unwrap().category, EventCategory::Class);
        }
    }

    mod skip_conditions {
        use super::*;

        #[test]
        fn no_start_boundary_is_skipped() {
            let raw = RawEvent {
                id: "evt-1".to_string(),
                ..RawEvent::default()
            };
            assert!(normalize(&raw, now()).is_none());
        }

        #[test]
        fn empty_start_boundary_is_skipped() {
            let raw = RawEvent::new("evt-1", RawBoundary::default());
            assert!(normalize(&raw, now()).is_none());
        }

        #[test]
        fn unparseable_start_is_skipped() {
            let raw = RawEvent::new("evt-1", RawBoundary::from_date_time("yesterday-ish"));
            assert!(normalize(&raw, now()).is_none());
        }

        #[test]
        fn unparseable_end_is_skipped() {
            let raw = sample_raw().with_end(RawBoundary::from_date("02/05/2025"));
            assert!(normalize(&raw, now()).is_none());
        }
    }

    mod batch {
        use super::*;

        #[test]
        fn drops_malformed_events_keeps_the_rest() {
            let batch = vec![
                sample_raw(),
                RawEvent {
                    id: "evt-broken".to_string(),
                    ..RawEvent::default()
                },
                RawEvent::new("evt-2", RawBoundary::from_date("2025-02-06")),
            ];

            let events = normalize_events(&batch, now());

            assert_eq!(events.len(), 2);
            assert_eq!(events[0].id, "evt-123");
            assert_eq!(events[1].id, "evt-2");
        }

        #[test]
        fn empty_batch_is_fine() {
            assert!(normalize_events(&[], now()).is_empty());
        }
    }
}
