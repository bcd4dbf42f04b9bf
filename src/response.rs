//! Prediction response validation.
//!
//! A 2xx exchange is not yet a success: the decoded body may carry an
//! embedded `error` field, or lack the expected `text` field entirely.
//! [`PredictionResponse::into_text`] applies the validation rule in order —
//! an upstream error wins over any placeholder text that arrives next to it.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Decoded body of a prediction response. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Decode a transport-level JSON body.
    ///
    /// Bodies that do not fit the expected shape (non-object, wrongly typed
    /// fields) fail with [`ApiError::MalformedResponse`].
    pub fn from_body(body: Value) -> Result<Self> {
        serde_json::from_value(body).map_err(|_| ApiError::MalformedResponse)
    }

    /// Validate the body and extract the answer text.
    ///
    /// Checked in order:
    /// 1. non-empty `error` field → [`ApiError::UpstreamError`];
    /// 2. absent or empty `text` → [`ApiError::MalformedResponse`];
    /// 3. otherwise → the text.
    pub fn into_text(self) -> Result<String> {
        if let Some(error) = self.error {
            if !error.is_empty() {
                return Err(ApiError::UpstreamError(error));
            }
        }
        match self.text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ApiError::MalformedResponse),
        }
    }
}
