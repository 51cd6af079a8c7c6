//! reqwest-backed implementation of the [`AskApi`] port

use super::error::{HttpSetupError, fetch_error};
use crate::config::FileServerConfig;
use askdesk_application::{AskApi, FetchError};
use askdesk_domain::{AnswerResult, HealthStatus, Locale, PublicConfig, Question};
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Body of `POST /ask`
#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// HTTP client for the answer server
pub struct HttpAskClient {
    client: reqwest::Client,
    config_url: Url,
    ask_url: Url,
    health_url: Url,
    locale: Locale,
}

impl HttpAskClient {
    /// Build a client using the configured timeout (if any)
    pub fn new(server: &FileServerConfig, locale: Locale) -> Result<Self, HttpSetupError> {
        Self::with_timeout(
            server,
            server.timeout_seconds.map(Duration::from_secs),
            locale,
        )
    }

    /// Build a client with an explicit timeout, overriding the configured one
    pub fn with_timeout(
        server: &FileServerConfig,
        timeout: Option<Duration>,
        locale: Locale,
    ) -> Result<Self, HttpSetupError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("askdesk/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config_url: endpoint(&server.base_url, &server.config_path)?,
            ask_url: endpoint(&server.base_url, &server.ask_path)?,
            health_url: endpoint(&server.base_url, &server.health_path)?,
            locale,
        })
    }

    /// URL of the answer endpoint
    pub fn ask_url(&self) -> &Url {
        &self.ask_url
    }

    /// Turn a non-success response into a status error.
    ///
    /// The body becomes the detail; an empty body becomes `HTTP error
    /// <status>` and an unreadable one the localized default.
    async fn status_error(&self, response: Response) -> FetchError {
        let status = response.status().as_u16();
        let detail = match response.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => format!("HTTP error {}", status),
            Err(e) => {
                debug!("Failed to read error body: {}", e);
                self.locale.default_error_detail().to_string()
            }
        };
        FetchError::Status { status, detail }
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, FetchError> {
        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }
        let body = response.bytes().await.map_err(fetch_error)?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        // Derived struct impls would also accept a positional array
        if !value.is_object() {
            return Err(FetchError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AskApi for HttpAskClient {
    async fn fetch_config(&self) -> Result<PublicConfig, FetchError> {
        debug!("GET {}", self.config_url);
        let response = self
            .client
            .get(self.config_url.clone())
            .send()
            .await
            .map_err(fetch_error)?;
        self.read_json(response).await
    }

    async fn ask(&self, question: &Question) -> Result<AnswerResult, FetchError> {
        debug!("POST {}", self.ask_url);
        let response = self
            .client
            .post(self.ask_url.clone())
            .json(&AskRequest {
                question: question.content(),
            })
            .send()
            .await
            .map_err(fetch_error)?;
        self.read_json(response).await
    }

    async fn health(&self) -> Result<HealthStatus, FetchError> {
        debug!("GET {}", self.health_url);
        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(fetch_error)?;
        self.read_json(response).await
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Join a base URL and an absolute path
fn endpoint(base_url: &str, path: &str) -> Result<Url, HttpSetupError> {
    let invalid = |reason: String| HttpSetupError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))
        .map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}
