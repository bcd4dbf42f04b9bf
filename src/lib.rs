//! # Flowise Client
//!
//! Client for the Flowise prediction API: ask a question to a server-side
//! chatflow, get the generated answer back.
//!
//! The crate is built around one linear pipeline per call — resolve the
//! endpoint, build the request, dispatch it through an injected
//! [`Transport`], validate the response — with every failure classified into
//! a fixed, user-displayable [`ApiError`]. There are no retries at this
//! layer and no shared state between calls.
//!
//! ## Core Concepts
//!
//! - **[`FlowiseClient`]** — the executor. Two public operations,
//!   [`predict`](FlowiseClient::predict) and
//!   [`predict_streaming`](FlowiseClient::predict_streaming), sharing one
//!   pipeline and one error taxonomy.
//! - **[`Endpoint`]** — a validated base URL, resolved per call from an
//!   override or a deployment default.
//! - **[`Transport`]** — the host-injected dispatch capability: one HTTP
//!   exchange, a decoded JSON body or a raw transport failure. Ships with a
//!   reqwest-backed [`HttpTransport`] and a [`MockTransport`] for tests.
//! - **[`ApiError`]** — the user-facing error taxonomy. Messages are fixed
//!   strings fit for direct display.
//!
//! ## Quick Start
//!
//! ```no_run
//! use flowise_client::FlowiseClient;
//!
//! #[tokio::main]
//! async fn main() -> flowise_client::Result<()> {
//!     let client = FlowiseClient::builder()
//!         .endpoint("http://localhost:3000")
//!         .build();
//!
//!     let answer = client.predict("my-chatflow-id", "Why is the sky blue?").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! ## Testing downstream code
//!
//! ```
//! use flowise_client::{FlowiseClient, transport::MockTransport};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let mock = Arc::new(MockTransport::fixed(json!({"text": "42"})));
//! let client = FlowiseClient::builder().transport(mock).build();
//! assert_eq!(client.predict("id", "question").await.unwrap(), "42");
//! # });
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

mod probe;

pub use client::{FlowiseClient, FlowiseClientBuilder};
pub use endpoint::{Endpoint, DEFAULT_SELF_HOSTED, FLOWISE_CLOUD};
pub use error::{ApiError, Result};
pub use request::{PredictionRequest, ResponseFormat};
pub use response::PredictionResponse;
pub use transport::{HttpTransport, MockTransport, Transport};
