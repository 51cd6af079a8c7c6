//! Check API use case
//!
//! Smoke test for a deployment: probe the health endpoint, then send one
//! sample question through the answer endpoint.

use crate::ports::ask_api::{AskApi, FetchError};
use askdesk_domain::{AnswerResult, HealthStatus, Question};
use std::sync::Arc;
use tracing::info;

/// Outcome of both probes
#[derive(Debug, Clone)]
pub struct ApiCheckReport {
    pub health: Result<HealthStatus, FetchError>,
    pub ask: Result<AnswerResult, FetchError>,
}

impl ApiCheckReport {
    /// Both calls succeeded and the server reports itself healthy
    pub fn is_ok(&self) -> bool {
        matches!(self.health, Ok(HealthStatus { ok: true })) && self.ask.is_ok()
    }
}

/// Use case for checking a running answer server
pub struct CheckApiUseCase<A: AskApi + 'static> {
    api: Arc<A>,
}

impl<A: AskApi + 'static> CheckApiUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Run both probes. The sample question is sent even when the health
    /// probe fails.
    pub async fn execute(&self, sample: &Question) -> ApiCheckReport {
        let health = self.api.health().await;
        info!("Health probe: {:?}", health);

        let ask = self.api.ask(sample).await;
        info!("Sample question answered: {}", ask.is_ok());

        ApiCheckReport { health, ask }
    }
}
