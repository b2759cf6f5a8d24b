//! The `list_events` tool invocation.

use serde_json::json;
use tracing::debug;

use dashcal_core::FetchWindow;

use crate::client::ToolClient;
use crate::decode;
use crate::error::ProxyResult;
use crate::raw_event::RawEvent;

/// Name of the event-listing tool exposed by the proxy.
pub const LIST_EVENTS_TOOL: &str = "list_events";

/// Fetches raw events for a window from the proxy.
///
/// Builds the `{calendarId, timeMin, timeMax, maxResults}` arguments,
/// invokes the tool, and decodes whichever payload shape comes back.
pub async fn list_events(
    client: &dyn ToolClient,
    calendar_id: &str,
    window: &FetchWindow,
    max_results: usize,
) -> ProxyResult<Vec<RawEvent>> {
    let arguments = json!({
        "calendarId": calendar_id,
        "timeMin": window.start.to_rfc3339(),
        "timeMax": window.end.to_rfc3339(),
        "maxResults": max_results,
    });

    let payload = client.call_tool(LIST_EVENTS_TOOL, arguments).await?;
    let events = decode::events_payload(&payload)?;

    debug!(
        count = events.len(),
        calendar_id = %calendar_id,
        "fetched raw events from proxy"
    );
    Ok(events)
}
