//! Range-merging in-memory event store.
//!
//! The store owns the canonical set of normalized events for the session.
//! Merges are range-scoped: a fresh fetch for a window replaces exactly the
//! cached events whose start falls inside that window, so an event deleted
//! upstream disappears on re-fetch while events from disjoint windows
//! survive untouched.

use tracing::debug;

use dashcal_core::{FetchWindow, NormalizedEvent};

/// In-memory store of normalized events, ordered by insertion.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<NormalizedEvent>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges freshly fetched events for a window into the store.
    ///
    /// Cached events whose start lies inside `[window.start, window.end]`
    /// are dropped (the fresh result is authoritative for that range, and
    /// absence there means deletion upstream); events outside the window
    /// are preserved. Events are NOT deduplicated by id: merging
    /// overlapping-but-not-identical windows can leave duplicate ids in
    /// the store. Callers that need id uniqueness must dedupe on read.
    pub fn merge(&mut self, window: &FetchWindow, fresh: Vec<NormalizedEvent>) {
        let before = self.events.len();
        self.events.retain(|event| !window.contains(event.start));
        let dropped = before - self.events.len();
        let added = fresh.len();
        self.events.extend(fresh);

        debug!(dropped = dropped, added = added, total = self.events.len(), "merged fetch window");
    }

    /// Returns all cached events whose start lies within the window,
    /// boundaries inclusive. Order is stable for a given cache snapshot.
    pub fn query_range(&self, window: &FetchWindow) -> Vec<NormalizedEvent> {
        self.events
            .iter()
            .filter(|event| window.contains(event.start))
            .cloned()
            .collect()
    }

    /// Returns every cached event sorted by start instant.
    pub fn events_sorted(&self) -> Vec<NormalizedEvent> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| a.start.cmp(&b.start));
        events
    }

    /// Returns the number of cached events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops all cached events.
    pub fn clear(&mut self) {
        let count = self.events.len();
        self.events.clear();
        debug!(count = count, "cleared event store");
    }
}
