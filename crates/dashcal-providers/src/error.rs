//! Error types for proxy operations.
//!
//! Everything that can go wrong between this process and the remote
//! calendar proxy is captured as a [`ProxyError`] carrying a categorized
//! [`ProxyErrorCode`].

use std::fmt;
use thiserror::Error;

/// The category of a proxy error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyErrorCode {
    /// The client has not completed its connection handshake.
    NotConnected,
    /// Network error: connection failed, timeout, DNS resolution.
    NetworkError,
    /// Rate limit exceeded upstream.
    RateLimited,
    /// Authentication failed or credentials expired.
    AuthenticationFailed,
    /// Authorization failed: access to the calendar was denied.
    AuthorizationFailed,
    /// The proxy returned a server-side failure (5xx).
    ServerError,
    /// The JSON-RPC response carried an error object.
    RpcError,
    /// The tool result payload did not match any known shape.
    DecodeError,
    /// Missing or invalid client configuration.
    ConfigurationError,
}

impl ProxyErrorCode {
    /// Returns true if the error is transient and the operation may be
    /// retried by a caller that chooses to.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError | Self::RateLimited | Self::ServerError
        )
    }

    /// Returns a stable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConnected => "not_connected",
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthorizationFailed => "authorization_failed",
            Self::ServerError => "server_error",
            Self::RpcError => "rpc_error",
            Self::DecodeError => "decode_error",
            Self::ConfigurationError => "configuration_error",
        }
    }
}

impl fmt::Display for ProxyErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error from the remote calendar proxy or its transport.
#[derive(Debug, Error)]
pub struct ProxyError {
    code: ProxyErrorCode,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProxyError {
    /// Creates a new proxy error with the given code and message.
    pub fn new(code: ProxyErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a not-connected error.
    pub fn not_connected(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::NotConnected, message)
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::NetworkError, message)
    }

    /// Creates a rate limit error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::RateLimited, message)
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::AuthenticationFailed, message)
    }

    /// Creates an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::AuthorizationFailed, message)
    }

    /// Creates a server error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::ServerError, message)
    }

    /// Creates a JSON-RPC error.
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::RpcError, message)
    }

    /// Creates a payload decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::DecodeError, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorCode::ConfigurationError, message)
    }

    /// Sets the source error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> ProxyErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error is transient.
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for proxy operations.
pub type ProxyResult<T> = Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_retryability() {
        assert!(ProxyErrorCode::NetworkError.is_retryable());
        assert!(ProxyErrorCode::RateLimited.is_retryable());
        assert!(ProxyErrorCode::ServerError.is_retryable());
        assert!(!ProxyErrorCode::AuthenticationFailed.is_retryable());
        assert!(!ProxyErrorCode::DecodeError.is_retryable());
        assert!(!ProxyErrorCode::NotConnected.is_retryable());
    }

    #[test]
    fn error_creation() {
        let err = ProxyError::rpc("method not found");
        assert_eq!(err.code(), ProxyErrorCode::RpcError);
        assert_eq!(err.message(), "method not found");
        assert!(!err.is_retryable());
    }

    #[test]
    fn error_display() {
        let err = ProxyError::rate_limited("too many requests");
        let display = format!("{}", err);
        assert!(display.contains("rate_limited"));
        assert!(display.contains("too many requests"));
    }

    #[test]
    fn error_with_source() {
        use std::error::Error;
        let io_err = std::io::Error::other("connection reset");
        let err = ProxyError::network("request failed").with_source(io_err);
        assert!(err.source().is_some());
    }
}
