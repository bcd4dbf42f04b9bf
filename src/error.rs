use thiserror::Error;

use crate::transport::TransportError;

/// Errors produced by the prediction pipeline.
///
/// Every variant renders as a fixed, user-facing message suitable for direct
/// display. Messages never leak stack traces or internal identifiers beyond
/// the upstream-provided text.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The resolved base URL does not use an `http://` or `https://` scheme.
    #[error("Invalid API endpoint. URL must start with http:// or https://")]
    InvalidEndpoint,

    /// The server rejected the request with HTTP 401.
    #[error("Invalid API key. Please check your authentication settings.")]
    AuthenticationFailed,

    /// The server rejected the request with HTTP 403.
    #[error("Access forbidden. Please check your API permissions.")]
    Forbidden,

    /// The server answered HTTP 404 — the chatflow ID does not exist.
    #[error("Chatflow not found. Please check your chatflow ID.")]
    NotFound,

    /// The server answered HTTP 429.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Any other non-success HTTP status, with the response body text.
    #[error("Flowise API error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Connection-level failure whose message carries `ECONNREFUSED`.
    #[error("Could not connect to Flowise server. Please check if the server is running and accessible.")]
    ConnectionRefused,

    /// Any other connection-level failure, with the transport's message.
    #[error("Failed to connect to Flowise API: {0}")]
    Unreachable(String),

    /// A 2xx response whose body is missing the expected `text` field.
    #[error("Invalid response from Flowise API")]
    MalformedResponse,

    /// A 2xx response whose body carries an embedded `error` field.
    #[error("Flowise Error: {0}")]
    UpstreamError(String),
}

/// Classify a raw transport failure into a user-facing [`ApiError`].
///
/// Status codes take precedence; connection-level failures (no status) are
/// classified by message content. Total: every input maps to exactly one
/// variant. Errors already typed as `ApiError` never re-enter this path —
/// they propagate through the pipeline unchanged.
impl From<TransportError> for ApiError {
    fn from(failure: TransportError) -> Self {
        match failure.status {
            Some(401) => ApiError::AuthenticationFailed,
            Some(403) => ApiError::Forbidden,
            Some(404) => ApiError::NotFound,
            Some(429) => ApiError::RateLimited,
            Some(status) => ApiError::ServerError {
                status,
                message: failure.message,
            },
            None if failure.message.contains("ECONNREFUSED") => ApiError::ConnectionRefused,
            None => {
                let message = if failure.message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    failure.message
                };
                ApiError::Unreachable(message)
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unreachable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
