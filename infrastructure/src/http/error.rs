//! Error types for the HTTP adapter

use askdesk_application::FetchError;
use thiserror::Error;

/// Errors building the HTTP client (as opposed to using it)
#[derive(Error, Debug)]
pub enum HttpSetupError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Map a reqwest transport error into the port error type
pub(crate) fn fetch_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_decode() {
        FetchError::Decode(error.to_string())
    } else {
        FetchError::Network(error.to_string())
    }
}
