//! The calendar session: fetch coordination and cache invalidation.
//!
//! [`CalendarSession`] owns the session-lifetime [`CacheState`] and is the
//! only writer to it. Consumers ask for a window with
//! [`fetch_events`](CalendarSession::fetch_events), read through
//! [`get_events`](CalendarSession::get_events), and signal staleness with
//! [`invalidate_cache`](CalendarSession::invalidate_cache).
//!
//! The state lock is never held across an await: the fetch path locks to
//! check-and-set the in-flight guard, drops the lock for the network call,
//! then re-locks to merge. Interleaved callers during the suspension see
//! the guard and drop out.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

use dashcal_core::{FetchWindow, NormalizedEvent};
use dashcal_providers::{ToolClient, list_events, normalize_events};

use crate::config::SessionConfig;
use crate::store::EventStore;

/// Bookkeeping for the most recently completed fetch.
#[derive(Debug, Clone)]
struct LastFetch {
    /// The fetched window's identity key.
    window_key: String,
    /// When the fetch completed.
    at: DateTime<Utc>,
}

/// Session-lifetime cache state.
///
/// One instance per session, owned by the [`CalendarSession`]; mutation
/// flows exclusively through the fetch path and the invalidation gate.
#[derive(Debug, Default)]
struct CacheState {
    /// The canonical event set.
    store: EventStore,
    /// The most recently completed fetch, if any.
    last_fetch: Option<LastFetch>,
    /// At most one fetch may be outstanding at any time.
    fetch_in_flight: bool,
    /// When the cache was last invalidated (None = never).
    last_invalidation: Option<DateTime<Utc>>,
    /// Whether a fetch is currently loading.
    loading: bool,
    /// The last fetch failure, as a display string.
    error: Option<String>,
}

impl CacheState {
    /// Whether a fetch of `window` may be skipped as fresh.
    ///
    /// Fresh means: the last completed fetch was for the exact same window
    /// (string-exact key match), it finished less than the throttle
    /// interval ago, and no invalidation happened within the grace window.
    fn is_fresh(&self, window: &FetchWindow, now: DateTime<Utc>, config: &SessionConfig) -> bool {
        let Some(ref last) = self.last_fetch else {
            return false;
        };
        if last.window_key != window.key() {
            return false;
        }
        if now.signed_duration_since(last.at) >= to_delta(config.throttle_interval) {
            return false;
        }
        let recently_invalidated = self
            .last_invalidation
            .is_some_and(|at| now.signed_duration_since(at) < to_delta(config.invalidation_grace));
        !recently_invalidated
    }
}

/// Converts a std duration into a chrono delta for instant arithmetic.
fn to_delta(duration: std::time::Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX)
}

/// A point-in-time snapshot of the session's readable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    /// When the last successful fetch completed.
    pub last_fetch_at: Option<DateTime<Utc>>,
    /// Whether a fetch is in progress.
    pub loading: bool,
    /// The last fetch failure, if any.
    pub error: Option<String>,
    /// Number of events currently cached.
    pub cached_events: usize,
}

/// The event synchronization session.
///
/// Holds the proxy capability and the cache, and enforces the fetch
/// policy: connection bootstrap, single-flight, and same-window
/// throttling with invalidation bypass.
pub struct CalendarSession {
    config: SessionConfig,
    client: Arc<dyn ToolClient>,
    state: RwLock<CacheState>,
}

impl CalendarSession {
    /// Creates a session over the given proxy client.
    pub fn new(client: Arc<dyn ToolClient>, config: SessionConfig) -> Self {
        Self {
            config,
            client,
            state: RwLock::new(CacheState::default()),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().expect("state lock poisoned")
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().expect("state lock poisoned")
    }

    /// Requests that events for `[start, end]` be fetched into the cache.
    ///
    /// Does not return data; read the result through
    /// [`get_events`](Self::get_events). A fetch may be elided entirely:
    /// invalid windows are dropped, a disconnected client only performs
    /// the connection handshake (re-invoke to fetch), an in-flight fetch
    /// suppresses new ones, and a recent identical fetch is throttled
    /// unless the cache was just invalidated. Failures land in
    /// [`last_error`](Self::last_error) rather than propagating.
    pub async fn fetch_events(&self, start: DateTime<Utc>, end: DateTime<Utc>) {
        let window = FetchWindow::new(start, end);
        if !window.is_valid() {
            warn!(start = %start, end = %end, "invalid fetch window, ignoring request");
            return;
        }

        // Bootstrap: first call connects, the caller re-invokes to fetch.
        if !self.client.is_connected() {
            debug!("proxy not connected, initiating handshake");
            if let Err(e) = self.client.connect().await {
                warn!(error = %e, "proxy connection failed");
                self.write_state().error = Some(e.to_string());
            }
            return;
        }

        {
            let mut state = self.write_state();
            if state.fetch_in_flight {
                debug!(window = %window.key(), "fetch already in flight, dropping request");
                return;
            }
            if state.is_fresh(&window, Utc::now(), &self.config) {
                debug!(window = %window.key(), "window fetched recently, serving cached data");
                return;
            }
            state.fetch_in_flight = true;
            state.loading = true;
        }

        let outcome = list_events(
            self.client.as_ref(),
            &self.config.calendar_id,
            &window,
            self.config.max_results,
        )
        .await;

        // The guard is released on every exit path before the outcome is
        // inspected.
        let mut state = self.write_state();
        state.fetch_in_flight = false;
        state.loading = false;

        match outcome {
            Ok(raw_events) => {
                let fetched_at = Utc::now();
                let events = normalize_events(&raw_events, fetched_at);
                debug!(
                    window = %window.key(),
                    raw = raw_events.len(),
                    normalized = events.len(),
                    "merging fetched events"
                );
                state.last_fetch = Some(LastFetch {
                    window_key: window.key(),
                    at: fetched_at,
                });
                state.store.merge(&window, events);
                state.error = None;
            }
            Err(e) => {
                warn!(window = %window.key(), error = %e, "fetch failed");
                state.error = Some(e.to_string());
            }
        }
    }

    /// Returns cached events whose start lies within `[start, end]`
    /// inclusive, in cache order.
    pub fn get_events(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<NormalizedEvent> {
        let window = FetchWindow::new(start, end);
        self.read_state().store.query_range(&window)
    }

    /// Returns every cached event, sorted by start instant.
    pub fn all_events(&self) -> Vec<NormalizedEvent> {
        self.read_state().store.events_sorted()
    }

    /// Marks the cached data as possibly stale.
    ///
    /// Synchronous and network-free: clears the last-fetch record so the
    /// next [`fetch_events`](Self::fetch_events) is not throttled, and
    /// stamps the invalidation instant. Idempotent; safe to call with no
    /// fetch pending. Writers call this after create/update/delete so the
    /// next read-triggering fetch sees fresh data.
    pub fn invalidate_cache(&self) {
        let mut state = self.write_state();
        state.last_fetch = None;
        state.last_invalidation = Some(Utc::now());
        debug!("cache invalidated");
    }

    /// Whether a fetch is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    /// The last fetch failure, if the most recent fetch failed.
    pub fn last_error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    /// Returns a snapshot of the session's readable state.
    pub fn status(&self) -> SessionStatus {
        let state = self.read_state();
        SessionStatus {
            last_fetch_at: state.last_fetch.as_ref().map(|last| last.at),
            loading: state.loading,
            error: state.error.clone(),
            cached_events: state.store.len(),
        }
    }
}
