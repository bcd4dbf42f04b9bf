//! Mock transport for testing without a live Flowise server.
//!
//! [`MockTransport`] returns pre-configured outcomes in order and records the
//! requests it receives, allowing downstream consumers to write deterministic
//! tests against this crate.
//!
//! # Example
//!
//! ```
//! use flowise_client::transport::MockTransport;
//! use serde_json::json;
//!
//! let mock = MockTransport::fixed(json!({"text": "Hello!"}));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{HttpRequest, Transport, TransportError};

/// A test transport that replays canned outcomes in order.
///
/// Cycles back to the beginning when all outcomes have been consumed.
/// Every request is recorded and retrievable via [`MockTransport::requests`].
#[derive(Debug)]
pub struct MockTransport {
    outcomes: Vec<Result<Value, TransportError>>,
    index: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Create a mock with the given outcomes, replayed in order.
    ///
    /// When exhausted, cycles from the beginning.
    pub fn new(outcomes: Vec<Result<Value, TransportError>>) -> Self {
        assert!(
            !outcomes.is_empty(),
            "MockTransport requires at least one outcome"
        );
        Self {
            outcomes,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A mock that always succeeds with the same JSON body.
    pub fn fixed(body: Value) -> Self {
        Self::new(vec![Ok(body)])
    }

    /// A mock that always fails with the same transport error.
    pub fn failing(error: TransportError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// The requests executed so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_outcome(&self) -> Result<Value, TransportError> {
        let idx = self.index.fetch_add(1, Ordering::Relaxed) % self.outcomes.len();
        self.outcomes[idx].clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.next_outcome()
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
