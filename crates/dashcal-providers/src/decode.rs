//! Tool result payload decoding.
//!
//! The proxy returns `list_events` results in one of two shapes:
//!
//! 1. A text-wrapped payload: `{"content": [{"type": "text", "text": "[...]"}]}`
//!    where the inner text is a JSON array of raw events.
//! 2. A direct JSON array of raw events.
//!
//! Decoding tries the shapes in that fixed order and returns a typed
//! failure when neither matches. An unrecognized payload is never silently
//! treated as an empty event list.

use serde_json::Value;
use tracing::trace;

use crate::error::{ProxyError, ProxyResult};
use crate::raw_event::RawEvent;

/// The recognized payload shapes, in decode order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PayloadShape {
    /// JSON array serialized into `content[0].text`.
    TextWrapped(String),
    /// The result itself is the event array.
    Direct,
}

/// Classifies the payload shape without deserializing events.
fn classify(result: &Value) -> Option<PayloadShape> {
    if let Some(text) = result
        .get("content")
        .and_then(Value::as_array)
        .and_then(|content| content.first())
        .and_then(|first| first.get("text"))
        .and_then(Value::as_str)
    {
        return Some(PayloadShape::TextWrapped(text.to_string()));
    }

    if let Some(items) = result.as_array() {
        if items.is_empty() || looks_event_shaped(&items[0]) {
            return Some(PayloadShape::Direct);
        }
    }

    None
}

/// Heuristic for the direct-array fallback: an event-shaped value carries
/// an id plus at least one of the fields every provider event has.
fn looks_event_shaped(value: &Value) -> bool {
    value.get("id").is_some() && (value.get("start").is_some() || value.get("summary").is_some())
}

/// Decodes a `list_events` tool result into raw events.
///
/// # Errors
///
/// Returns a [`ProxyError`] with code `DecodeError` when the payload
/// matches neither recognized shape, or matches a shape but fails to
/// deserialize as an event array.
pub fn events_payload(result: &Value) -> ProxyResult<Vec<RawEvent>> {
    match classify(result) {
        Some(PayloadShape::TextWrapped(text)) => {
            trace!("decoding text-wrapped events payload");
            serde_json::from_str(&text).map_err(|e| {
                ProxyError::decode("text-wrapped payload is not an event array").with_source(e)
            })
        }
        Some(PayloadShape::Direct) => {
            trace!("decoding direct-array events payload");
            serde_json::from_value(result.clone()).map_err(|e| {
                ProxyError::decode("direct payload is not an event array").with_source(e)
            })
        }
        None => Err(ProxyError::decode(format!(
            "unrecognized events payload shape: {}",
            summarize(result)
        ))),
    }
}

/// Short payload description for error messages, without echoing event data.
fn summarize(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array of non-event values",
        Value::Object(_) => "object without text content",
    }
}
