//! The tool-calling capability and its JSON-RPC-over-HTTP implementation.
//!
//! [`ToolClient`] is the abstraction the session layer fetches through: a
//! connection handshake plus a `call_tool(name, arguments)` capability.
//! [`ProxyClient`] implements it against the calendar proxy's JSON-RPC
//! endpoint.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ProxyError, ProxyResult};
use crate::rpc::{RpcRequest, RpcResponse};

/// A boxed future for async trait methods.
///
/// Async functions in traits do not yet compose with dynamic dispatch;
/// boxed futures keep [`ToolClient`] object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The remote collaborator capability consumed by the session layer.
///
/// Implementations must be `Send + Sync`; the session holds one behind an
/// `Arc<dyn ToolClient>` and shares it across fetches.
pub trait ToolClient: Send + Sync {
    /// Returns true once the connection handshake has completed.
    fn is_connected(&self) -> bool;

    /// Performs the connection handshake.
    ///
    /// Idempotent: connecting an already-connected client is a no-op.
    fn connect(&self) -> BoxFuture<'_, ProxyResult<()>>;

    /// Invokes a named tool with the given arguments and returns the raw
    /// result payload.
    fn call_tool(&self, name: &str, arguments: Value) -> BoxFuture<'_, ProxyResult<Value>>;
}

/// Default request timeout for the proxy client.
///
/// The timeout doubles as the bound on how long a fetch can hold the
/// session's in-flight guard: without it a hung proxy would starve every
/// later fetch for the process lifetime.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-RPC-over-HTTP client for the calendar proxy.
#[derive(Debug)]
pub struct ProxyClient {
    http_client: reqwest::Client,
    endpoint: Url,
    connected: AtomicBool,
    next_id: AtomicU64,
}

impl ProxyClient {
    /// Creates a new proxy client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the endpoint is not a valid URL.
    pub fn new(endpoint: &str, timeout: Duration) -> ProxyResult<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            ProxyError::configuration(format!("invalid proxy endpoint {endpoint:?}")).with_source(e)
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Ok(Self {
            http_client,
            endpoint,
            connected: AtomicBool::new(false),
            next_id: AtomicU64::new(1),
        })
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Posts a JSON-RPC request and returns the result payload.
    async fn post(&self, request: RpcRequest) -> ProxyResult<Value> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProxyError::network("request timeout").with_source(e)
                } else if e.is_connect() {
                    ProxyError::network("connection failed").with_source(e)
                } else {
                    ProxyError::network("request failed").with_source(e)
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(ProxyError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {s} seconds"))
                    .unwrap_or_default()
            )));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProxyError::authentication("proxy credentials expired or invalid"));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProxyError::authorization("access denied by proxy"));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::server(format!("proxy error ({status}): {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProxyError::network("failed to read response").with_source(e))?;

        let rpc: RpcResponse = serde_json::from_str(&body)
            .map_err(|e| ProxyError::decode("response is not valid JSON-RPC").with_source(e))?;

        if let Some(error) = rpc.error {
            warn!(code = error.code, message = %error.message, "proxy returned JSON-RPC error");
            return Err(ProxyError::rpc(format!("{} (code {})", error.message, error.code)));
        }

        rpc.result
            .ok_or_else(|| ProxyError::rpc("response carried neither result nor error"))
    }
}

impl ToolClient for ProxyClient {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    fn connect(&self) -> BoxFuture<'_, ProxyResult<()>> {
        Box::pin(async move {
            if self.is_connected() {
                return Ok(());
            }

            let request = RpcRequest::initialize(self.next_request_id());
            self.post(request).await?;
            self.connected.store(true, Ordering::Release);
            debug!(endpoint = %self.endpoint, "connected to calendar proxy");
            Ok(())
        })
    }

    fn call_tool(&self, name: &str, arguments: Value) -> BoxFuture<'_, ProxyResult<Value>> {
        let request = RpcRequest::tool_call(self.next_request_id(), name, arguments);
        Box::pin(async move {
            if !self.is_connected() {
                return Err(ProxyError::not_connected("call_tool before connect"));
            }
            debug!(method = %request.method, id = request.id, "calling proxy tool");
            self.post(request).await
        })
    }
}
