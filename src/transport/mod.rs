//! Transport trait and normalized request/error types.
//!
//! The [`Transport`] trait abstracts the single capability the pipeline needs
//! from its host: perform one HTTP exchange and return the decoded JSON body,
//! or a [`TransportError`] carrying an optional status code and a message.
//! Built-in implementations: [`HttpTransport`] (reqwest), [`MockTransport`]
//! (canned outcomes for tests).
//!
//! ## Architecture
//!
//! ```text
//! FlowiseClient ──► HttpRequest ──► Transport::execute() ──► Value | TransportError
//!                                          │
//!                               ┌──────────┴──────────┐
//!                          HttpTransport         MockTransport
//!                          reqwest + auth        canned outcomes
//! ```

pub mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

use async_trait::async_trait;
use serde_json::Value;

/// HTTP method of a request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully specified request descriptor, ready for dispatch.
///
/// JSON bodies are sent with `Content-Type: application/json`; implementations
/// add credential headers from their own configuration.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// A body-less GET descriptor.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    /// A POST descriptor with a JSON body.
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// A raw transport failure, before classification.
///
/// `status` is present when the server answered with a non-success code and
/// absent for connection-level failures. The classifier in
/// [`crate::error`] maps this into a user-facing [`crate::ApiError`].
#[derive(Debug, Clone)]
pub struct TransportError {
    /// HTTP status code, when the failure came from a server response.
    pub status: Option<u16>,
    /// Response body text, or the connection failure's message.
    pub message: String,
}

impl TransportError {
    /// A failure carrying a non-success HTTP status and the body text.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// A connection-level failure with only a message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Host-injected dispatch capability.
///
/// One call = one HTTP exchange = one suspension point. No cancellation and
/// no retries at this seam; timeouts belong to the concrete implementation's
/// client configuration.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as `Arc<dyn Transport>`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request, returning the decoded JSON body.
    async fn execute(&self, request: &HttpRequest) -> std::result::Result<Value, TransportError>;

    /// Human-readable name for logging and diagnostics.
    fn name(&self) -> &'static str;
}
