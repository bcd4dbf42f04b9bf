//! Base-URL resolution for a Flowise deployment.
//!
//! [`Endpoint::resolve`] picks the user override when one is configured,
//! falls back to the deployment default otherwise, and normalizes the result.
//! The default is an explicit argument rather than a baked-in constant so the
//! same pipeline serves cloud and self-hosted deployments.

use crate::error::{ApiError, Result};

/// Base URL of the hosted Flowise cloud deployment.
pub const FLOWISE_CLOUD: &str = "https://api.flowiseai.com";

/// Base URL a self-hosted Flowise instance listens on out of the box.
pub const DEFAULT_SELF_HOSTED: &str = "http://localhost:3000";

/// A validated base URL: non-empty, `http://` or `https://` scheme, no
/// trailing slash. Created per call; immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Resolve the effective base URL from an optional override and a default.
    ///
    /// The override wins when present and non-empty. Exactly one trailing `/`
    /// is stripped if present; the rest of the string is left untouched.
    /// Fails with [`ApiError::InvalidEndpoint`] when the result does not start
    /// with `http://` or `https://`.
    pub fn resolve(override_url: Option<&str>, default_url: &str) -> Result<Self> {
        let raw = match override_url {
            Some(url) if !url.is_empty() => url,
            _ => default_url,
        };
        let base = raw.strip_suffix('/').unwrap_or(raw);
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ApiError::InvalidEndpoint);
        }
        Ok(Self(base.to_string()))
    }

    /// The normalized base URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an absolute API path onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_override() {
        let endpoint = Endpoint::resolve(Some("https://flowise.example.com"), FLOWISE_CLOUD).unwrap();
        assert_eq!(endpoint.as_str(), "https://flowise.example.com");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let endpoint = Endpoint::resolve(None, FLOWISE_CLOUD).unwrap();
        assert_eq!(endpoint.as_str(), "https://api.flowiseai.com");
    }

    #[test]
    fn test_resolve_empty_override_falls_back() {
        let endpoint = Endpoint::resolve(Some(""), DEFAULT_SELF_HOSTED).unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:3000");
    }

    #[test]
    fn test_resolve_strips_one_trailing_slash() {
        let endpoint = Endpoint::resolve(Some("http://localhost:3000/"), FLOWISE_CLOUD).unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:3000");
    }

    #[test]
    fn test_resolve_strips_at_most_one_slash() {
        // Only the last slash goes; the rest of the string is bitwise unchanged.
        let endpoint = Endpoint::resolve(Some("http://localhost:3000//"), FLOWISE_CLOUD).unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_resolve_preserves_path_segments() {
        let endpoint =
            Endpoint::resolve(Some("https://example.com/flowise/"), FLOWISE_CLOUD).unwrap();
        assert_eq!(endpoint.as_str(), "https://example.com/flowise");
    }

    #[test]
    fn test_resolve_rejects_missing_scheme() {
        let err = Endpoint::resolve(Some("localhost:3000"), FLOWISE_CLOUD).unwrap_err();
        assert!(matches!(err, ApiError::InvalidEndpoint));
    }

    #[test]
    fn test_resolve_rejects_other_schemes() {
        let err = Endpoint::resolve(Some("ftp://example.com"), FLOWISE_CLOUD).unwrap_err();
        assert!(matches!(err, ApiError::InvalidEndpoint));

        // "httpx://" is not http:// even though it starts with "http".
        let err = Endpoint::resolve(Some("httpx://example.com"), FLOWISE_CLOUD).unwrap_err();
        assert!(matches!(err, ApiError::InvalidEndpoint));
    }

    #[test]
    fn test_resolve_rejects_invalid_default_when_no_override() {
        let err = Endpoint::resolve(None, "not-a-url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidEndpoint));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let once = Endpoint::resolve(Some("http://localhost:3000/"), FLOWISE_CLOUD).unwrap();
        let twice = Endpoint::resolve(Some(once.as_str()), FLOWISE_CLOUD).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_url_for_joins_path() {
        let endpoint = Endpoint::resolve(None, FLOWISE_CLOUD).unwrap();
        assert_eq!(
            endpoint.url_for("/api/v1/ping"),
            "https://api.flowiseai.com/api/v1/ping"
        );
    }
}
