//! Connection-name display probe.
//!
//! A display-only health check used to label a configured connection. It
//! swallows every failure (resolution, transport, decode) and falls back to a
//! fixed label — that behavior is confined to this module and never feeds the
//! pipeline's error taxonomy.

use tracing::debug;

use crate::client::FlowiseClient;
use crate::endpoint::Endpoint;
use crate::transport::HttpRequest;

/// Label used when the ping probe fails or returns no message.
const FALLBACK_CONNECTION_NAME: &str = "Flowise Connection";

impl FlowiseClient {
    /// Probe `GET {endpoint}/api/v1/ping` and return a display name for the
    /// connection: the body's `message` field when present and non-empty,
    /// otherwise `"Flowise Connection"`. Never fails.
    pub async fn connection_name(&self) -> String {
        self.try_connection_name()
            .await
            .unwrap_or_else(|| FALLBACK_CONNECTION_NAME.to_string())
    }

    async fn try_connection_name(&self) -> Option<String> {
        let endpoint = Endpoint::resolve(self.endpoint.as_deref(), &self.default_endpoint).ok()?;
        let request = HttpRequest::get(endpoint.url_for("/api/v1/ping"));
        let body = match self.transport.execute(&request).await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "ping probe failed, using fallback label");
                return None;
            }
        };
        body.get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockTransport, TransportError};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_connection_name_from_ping_message() {
        let mock = Arc::new(MockTransport::fixed(json!({"message": "pong"})));
        let client = FlowiseClient::builder().transport(mock.clone()).build();

        assert_eq!(client.connection_name().await, "pong");
        assert_eq!(
            mock.requests()[0].url,
            "https://api.flowiseai.com/api/v1/ping"
        );
    }

    #[tokio::test]
    async fn test_connection_name_swallows_transport_failure() {
        let mock = Arc::new(MockTransport::failing(TransportError::status(500, "down")));
        let client = FlowiseClient::builder().transport(mock).build();

        assert_eq!(client.connection_name().await, "Flowise Connection");
    }

    #[tokio::test]
    async fn test_connection_name_swallows_bad_endpoint() {
        let client = FlowiseClient::builder()
            .endpoint("not-a-url")
            .transport(Arc::new(MockTransport::fixed(json!({"message": "pong"}))))
            .build();

        assert_eq!(client.connection_name().await, "Flowise Connection");
    }

    #[tokio::test]
    async fn test_connection_name_empty_message_falls_back() {
        let mock = Arc::new(MockTransport::fixed(json!({"message": ""})));
        let client = FlowiseClient::builder().transport(mock).build();
        assert_eq!(client.connection_name().await, "Flowise Connection");
    }

    #[tokio::test]
    async fn test_connection_name_missing_message_falls_back() {
        let mock = Arc::new(MockTransport::fixed(json!({"status": "ok"})));
        let client = FlowiseClient::builder().transport(mock).build();
        assert_eq!(client.connection_name().await, "Flowise Connection");
    }
}
