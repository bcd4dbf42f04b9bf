//! Prediction request construction.
//!
//! [`PredictionRequest`] is built fresh per invocation and translated into an
//! [`HttpRequest`] descriptor against a resolved [`Endpoint`]. Construction is
//! pure: no validation beyond standard JSON encoding happens here — in
//! particular, `chatflow_id` and `question` pass through verbatim and the
//! caller owns non-emptiness.

use serde_json::json;

use crate::endpoint::Endpoint;
use crate::transport::HttpRequest;

/// Requested answer rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Plain text (the wire default; the field is omitted from the body).
    #[default]
    Plain,
    /// Markdown-rendered answer (`"responseFormat": "markdown"`).
    Markdown,
}

/// One prediction call against a chatflow.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    /// Opaque ID of the server-side chatflow.
    pub chatflow_id: String,
    /// The question to ask.
    pub question: String,
    /// Whether to target the streaming variant of the endpoint.
    pub streaming: bool,
    /// Requested answer rendering.
    pub response_format: ResponseFormat,
}

impl PredictionRequest {
    /// Create a single-shot, plain-text request.
    pub fn new(chatflow_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            chatflow_id: chatflow_id.into(),
            question: question.into(),
            streaming: false,
            response_format: ResponseFormat::default(),
        }
    }

    /// Target the streaming variant.
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// Set the requested answer rendering.
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// Build the POST descriptor for this request.
    ///
    /// Sync: `POST {endpoint}/api/v1/prediction/{chatflow_id}`.
    /// Streaming: same with a `/stream` suffix and `"streaming": true` in the
    /// body. Optional body fields are omitted rather than sent as null.
    pub fn build(&self, endpoint: &Endpoint) -> HttpRequest {
        let mut url = endpoint.url_for(&format!("/api/v1/prediction/{}", self.chatflow_id));
        if self.streaming {
            url.push_str("/stream");
        }

        let mut body = json!({ "question": self.question });
        if self.response_format == ResponseFormat::Markdown {
            body["responseFormat"] = json!("markdown");
        }
        if self.streaming {
            body["streaming"] = json!(true);
        }

        HttpRequest::post(url, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::FLOWISE_CLOUD;
    use crate::transport::Method;

    fn endpoint() -> Endpoint {
        Endpoint::resolve(None, FLOWISE_CLOUD).unwrap()
    }

    #[test]
    fn test_build_sync_request() {
        let request = PredictionRequest::new("abc-123", "Why is the sky blue?");
        let http = request.build(&endpoint());

        assert_eq!(http.method, Method::Post);
        assert_eq!(
            http.url,
            "https://api.flowiseai.com/api/v1/prediction/abc-123"
        );
        let body = http.body.expect("body");
        assert_eq!(body["question"], "Why is the sky blue?");
        // Optional fields are omitted, not null.
        assert!(body.get("responseFormat").is_none());
        assert!(body.get("streaming").is_none());
    }

    #[test]
    fn test_build_streaming_request() {
        let request = PredictionRequest::new("abc-123", "hello").with_streaming(true);
        let http = request.build(&endpoint());

        assert_eq!(
            http.url,
            "https://api.flowiseai.com/api/v1/prediction/abc-123/stream"
        );
        assert_eq!(http.body.expect("body")["streaming"], true);
    }

    #[test]
    fn test_build_markdown_format() {
        let request =
            PredictionRequest::new("abc-123", "hello").with_response_format(ResponseFormat::Markdown);
        let body = request.build(&endpoint()).body.expect("body");
        assert_eq!(body["responseFormat"], "markdown");
    }

    #[test]
    fn test_question_passes_through_verbatim() {
        let question = "what does \"x\" mean?\nand {y}?";
        let request = PredictionRequest::new("abc-123", question);
        let body = request.build(&endpoint()).body.expect("body");
        assert_eq!(body["question"], question);
    }

    #[test]
    fn test_empty_values_are_not_rejected_here() {
        // Emptiness is deliberately the caller's concern.
        let request = PredictionRequest::new("", "");
        let http = request.build(&endpoint());
        assert_eq!(http.url, "https://api.flowiseai.com/api/v1/prediction/");
        assert_eq!(http.body.expect("body")["question"], "");
    }
}
