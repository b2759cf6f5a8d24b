//! Session state: fetch coordination, range-merging event store, invalidation.
//!
//! This crate owns the in-memory half of the sync layer. One
//! [`CalendarSession`] lives for the process lifetime and mediates every
//! cache access:
//!
//! - [`CalendarSession::fetch_events`] decides whether to hit the network
//!   (connection bootstrap, single-flight guard, same-window throttle) and
//!   merges normalized results into the store
//! - [`CalendarSession::get_events`] answers range queries from the cache
//! - [`CalendarSession::invalidate_cache`] lets writers force the next
//!   fetch past the throttle without touching the network
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use dashcal_providers::ProxyClient;
//! use dashcal_session::{CalendarSession, SessionConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ProxyClient::new("http://127.0.0.1:3100/rpc", Duration::from_secs(30))?;
//! let session = CalendarSession::new(Arc::new(client), SessionConfig::default());
//!
//! let start = chrono::Utc::now();
//! let end = start + chrono::Duration::days(7);
//! session.fetch_events(start, end).await; // first call connects
//! session.fetch_events(start, end).await;
//! let events = session.get_events(start, end);
//! # Ok(())
//! # }
//! ```

mod config;
mod session;
mod store;

pub use config::SessionConfig;
pub use session::{CalendarSession, SessionStatus};
pub use store::EventStore;
