//! Core types: fetch windows, normalized events, categories, status

pub mod category;
pub mod event;
pub mod time;
pub mod tracing;

pub use category::{EventCategory, classify_title};
pub use event::{NormalizedEvent, TemporalStatus};
pub use time::FetchWindow;
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
