//! Proxy client, raw events, and the normalization pipeline.
//!
//! This crate is the upstream-facing half of the sync layer:
//!
//! - [`ToolClient`] - the consumed `call_tool` capability of the remote proxy
//! - [`ProxyClient`] - its JSON-RPC-over-HTTP implementation
//! - [`RawEvent`] - provider wire shape prior to normalization
//! - [`normalize`] - the pure raw-to-canonical transform
//! - [`list_events`] - the event-listing tool invocation with payload decode
//! - [`ProxyError`] - categorized errors for everything above
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   calendar proxy     │  JSON-RPC 2.0 over HTTP
//! └──────────┬───────────┘
//!            │ tools/call list_events
//!            ▼
//!     ┌─────────────┐      ┌──────────────┐
//!     │ ProxyClient │─────▶│ decode (text │
//!     └─────────────┘      │ or direct)   │
//!                          └──────┬───────┘
//!                                 ▼
//!                          ┌─────────────┐
//!                          │  RawEvent   │
//!                          └──────┬──────┘
//!                                 │ normalize()
//!                                 ▼
//!                        ┌──────────────────┐
//!                        │ NormalizedEvent  │
//!                        └──────────────────┘
//! ```

pub mod client;
pub mod decode;
pub mod error;
pub mod list_events;
pub mod normalize;
pub mod raw_event;
pub mod rpc;

pub use client::{BoxFuture, DEFAULT_TIMEOUT, ProxyClient, ToolClient};
pub use decode::events_payload;
pub use error::{ProxyError, ProxyErrorCode, ProxyResult};
pub use list_events::{LIST_EVENTS_TOOL, list_events};
pub use normalize::{normalize, normalize_events};
pub use raw_event::{RawBoundary, RawEvent};
pub use rpc::{RpcErrorObject, RpcRequest, RpcResponse};
