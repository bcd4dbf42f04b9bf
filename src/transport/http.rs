//! reqwest-backed transport.
//!
//! [`HttpTransport`] owns its HTTP client and performs the one exchange the
//! [`Transport`](super::Transport) seam asks for. Non-success responses are
//! surfaced as [`TransportError`] with the status code and body text;
//! connection-level failures carry only the error chain as a message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{HttpRequest, Method, Transport, TransportError};

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Production transport over reqwest.
///
/// # Example
///
/// ```
/// use flowise_client::transport::HttpTransport;
///
/// let transport = HttpTransport::new();
/// let with_key = HttpTransport::new().with_api_key("sk-...");
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    /// Optional API key. If set, sent as `Authorization: Bearer {key}`.
    api_key: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport whose client enforces the given request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            api_key: None,
        }
    }

    /// Set the API key for authentication.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Returns `true` if an API key has been configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Join an error with its source chain so connection failures keep their
    /// underlying cause (e.g. the OS-level refused-connection detail).
    fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &HttpRequest) -> std::result::Result<Value, TransportError> {
        let mut req = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if let Some(ref body) = request.body {
            req = req.json(body);
        }
        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| TransportError::connection(Self::error_chain(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(TransportError::status(status.as_u16(), text));
        }

        resp.json()
            .await
            .map_err(|e| TransportError::connection(Self::error_chain(&e)))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_defaults() {
        let transport = HttpTransport::new();
        assert!(!transport.has_api_key());
        assert_eq!(transport.name(), "http");
    }

    #[test]
    fn test_transport_api_key_configured() {
        let transport = HttpTransport::new().with_api_key("sk-test");
        assert!(transport.has_api_key());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let transport = HttpTransport::new().with_api_key("sk-very-secret");
        let rendered = format!("{:?}", transport);
        assert!(!rendered.contains("sk-very-secret"));
    }

    #[test]
    fn test_error_chain_joins_sources() {
        use std::fmt;

        #[derive(Debug)]
        struct Inner;
        impl fmt::Display for Inner {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("connection refused")
            }
        }
        impl std::error::Error for Inner {}

        #[derive(Debug)]
        struct Outer(Inner);
        impl fmt::Display for Outer {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("request failed")
            }
        }
        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let chain = HttpTransport::error_chain(&Outer(Inner));
        assert_eq!(chain, "request failed: connection refused");
    }
}
