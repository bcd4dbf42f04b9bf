//! The client executor: resolve → build → dispatch → validate.
//!
//! [`FlowiseClient`] orchestrates the prediction pipeline. The flow is
//! strictly linear per call and every failure is terminal — no retries happen
//! at this layer; retry policy, if any, belongs to the caller. Concurrent
//! calls are fully independent: the client holds no mutable state.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::endpoint::{Endpoint, FLOWISE_CLOUD};
use crate::error::{ApiError, Result};
use crate::request::{PredictionRequest, ResponseFormat};
use crate::response::PredictionResponse;
use crate::transport::{HttpTransport, Transport};

/// Client for the Flowise prediction API.
///
/// # Example
///
/// ```no_run
/// use flowise_client::FlowiseClient;
///
/// #[tokio::main]
/// async fn main() -> flowise_client::Result<()> {
///     let client = FlowiseClient::builder()
///         .endpoint("https://flowise.example.com")
///         .api_key("sk-...")
///         .build();
///
///     let answer = client.predict("my-chatflow-id", "Why is the sky blue?").await?;
///     println!("{answer}");
///     Ok(())
/// }
/// ```
pub struct FlowiseClient {
    pub(crate) transport: Arc<dyn Transport>,
    /// User-supplied base-URL override, if any.
    pub(crate) endpoint: Option<String>,
    /// Deployment default used when no override is configured.
    pub(crate) default_endpoint: String,
    response_format: ResponseFormat,
}

impl FlowiseClient {
    /// Create a new builder.
    pub fn builder() -> FlowiseClientBuilder {
        FlowiseClientBuilder {
            transport: None,
            endpoint: None,
            default_endpoint: FLOWISE_CLOUD.to_string(),
            response_format: ResponseFormat::default(),
            api_key: None,
            timeout: None,
        }
    }

    /// Ask a question, single-shot. Returns the generated answer text.
    pub async fn predict(&self, chatflow_id: &str, question: &str) -> Result<String> {
        let request = PredictionRequest::new(chatflow_id, question)
            .with_response_format(self.response_format);
        self.run(request).await
    }

    /// Ask a question via the streaming variant of the endpoint.
    ///
    /// The result is the same aggregated answer text as [`predict`](Self::predict);
    /// only the attempted path differs. Error handling is identical.
    pub async fn predict_streaming(&self, chatflow_id: &str, question: &str) -> Result<String> {
        let request = PredictionRequest::new(chatflow_id, question)
            .with_response_format(self.response_format)
            .with_streaming(true);
        self.run(request).await
    }

    /// The shared pipeline. Errors already typed as [`ApiError`] propagate
    /// unchanged; only raw transport failures go through classification.
    async fn run(&self, request: PredictionRequest) -> Result<String> {
        let endpoint = Endpoint::resolve(self.endpoint.as_deref(), &self.default_endpoint)?;
        let http_request = request.build(&endpoint);

        debug!(
            url = %http_request.url,
            transport = self.transport.name(),
            "dispatching prediction request"
        );

        let body = self
            .transport
            .execute(&http_request)
            .await
            .map_err(ApiError::from)
            .inspect_err(|e| warn!(error = %e, url = %http_request.url, "prediction request failed"))?;

        PredictionResponse::from_body(body)?.into_text()
    }
}

impl std::fmt::Debug for FlowiseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowiseClient")
            .field("transport", &self.transport.name())
            .field("endpoint", &self.endpoint)
            .field("default_endpoint", &self.default_endpoint)
            .field("response_format", &self.response_format)
            .finish()
    }
}

/// Builder for [`FlowiseClient`].
pub struct FlowiseClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    endpoint: Option<String>,
    default_endpoint: String,
    response_format: ResponseFormat,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl FlowiseClientBuilder {
    /// Set the base-URL override (e.g. a self-hosted instance).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the deployment default used when no override is configured.
    /// Default: [`FLOWISE_CLOUD`].
    pub fn default_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.default_endpoint = endpoint.into();
        self
    }

    /// Set the requested answer rendering. Default: [`ResponseFormat::Plain`].
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// Set the transport. If not set, an [`HttpTransport`] is created.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the API key sent as `Authorization: Bearer {key}`.
    ///
    /// Only applies to the default [`HttpTransport`]; ignored when a custom
    /// transport is provided via [`transport`](Self::transport) (the custom
    /// transport's own credentials apply).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout for the default [`HttpTransport`].
    /// Default: 60 seconds. Ignored when a custom transport is provided.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> FlowiseClient {
        let transport = self.transport.unwrap_or_else(|| {
            let mut http =
                HttpTransport::with_timeout(self.timeout.unwrap_or(crate::transport::http::DEFAULT_TIMEOUT));
            if let Some(key) = self.api_key {
                http = http.with_api_key(key);
            }
            Arc::new(http)
        });
        FlowiseClient {
            transport,
            endpoint: self.endpoint,
            default_endpoint: self.default_endpoint,
            response_format: self.response_format,
        }
    }
}
