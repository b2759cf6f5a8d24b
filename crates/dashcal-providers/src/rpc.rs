//! JSON-RPC 2.0 wire types for the calendar proxy.
//!
//! The proxy speaks JSON-RPC 2.0 over HTTP POST. Requests carry a
//! monotonically increasing id for correlation; responses carry either a
//! `result` or an `error` member, never both.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON-RPC protocol version string.
pub const JSONRPC_VERSION: &str = "2.0";

/// The method name for tool invocation.
pub const TOOLS_CALL_METHOD: &str = "tools/call";

/// The method name for the connection handshake.
pub const INITIALIZE_METHOD: &str = "initialize";

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Always "2.0".
    pub jsonrpc: String,
    /// Request id for correlation.
    pub id: u64,
    /// The method to invoke.
    pub method: String,
    /// Method parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcRequest {
    /// Creates a new request for the given method.
    pub fn new(id: u64, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }

    /// Creates a `tools/call` request.
    pub fn tool_call(id: u64, name: &str, arguments: Value) -> Self {
        Self::new(
            id,
            TOOLS_CALL_METHOD,
            Some(serde_json::json!({ "name": name, "arguments": arguments })),
        )
    }

    /// Creates an `initialize` handshake request.
    pub fn initialize(id: u64) -> Self {
        Self::new(id, INITIALIZE_METHOD, Some(serde_json::json!({})))
    }
}

/// The error member of a JSON-RPC 2.0 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured error data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A JSON-RPC 2.0 response.
///
/// Exactly one of `result` and `error` is present in a well-formed
/// response; the caller treats an `error` member as a fetch failure
/// regardless of what `result` contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Always "2.0".
    pub jsonrpc: String,
    /// Echoed request id.
    pub id: Option<u64>,
    /// The result payload, on success.
    #[serde(default)]
    pub result: Option<Value>,
    /// The error object, on failure.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_call_request_shape() {
        let req = RpcRequest::tool_call(7, "list_events", serde_json::json!({"calendarId": "primary"}));
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], 7);
        assert_eq!(json["method"], "tools/call");
        assert_eq!(json["params"]["name"], "list_events");
        assert_eq!(json["params"]["arguments"]["calendarId"], "primary");
    }

    #[test]
    fn parses_result_response() {
        let json = r#"{"jsonrpc":"2.0","id":7,"result":{"content":[]}}"#;
        let resp: RpcResponse = serde_json::from_str(json).unwrap();
        assert!(resp.result.is_some());
        assert!(resp.error.is_none());
    }

    #[test]
    fn parses_error_response() {
        let json = r#"{"jsonrpc":"2.0","id":7,"error":{"code":-32601,"message":"method not found"}}"#;
        let resp: RpcResponse = serde_json::from_str(json).unwrap();
        assert!(resp.result.is_none());
        let error = resp.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "method not found");
    }

    #[test]
    fn parses_null_id() {
        let json = r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32700,"message":"parse error"}}"#;
        let resp: RpcResponse = serde_json::from_str(json).unwrap();
        assert!(resp.id.is_none());
    }
}
