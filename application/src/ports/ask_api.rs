//! Answer server port
//!
//! Defines the interface for talking to the answer server over HTTP.

use askdesk_domain::{AnswerResult, HealthStatus, PublicConfig, Question};
use async_trait::async_trait;
use thiserror::Error;

/// Any failure to obtain a payload from the server.
///
/// Network, status and decoding failures share one type so callers can
/// discard the cause in a single match arm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the answer server
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AskApi: Send + Sync {
    /// Fetch the public front-end configuration
    async fn fetch_config(&self) -> Result<PublicConfig, FetchError>;

    /// Submit a question and get the answer
    async fn ask(&self, question: &Question) -> Result<AnswerResult, FetchError>;

    /// Probe the server health endpoint
    async fn health(&self) -> Result<HealthStatus, FetchError>;
}
