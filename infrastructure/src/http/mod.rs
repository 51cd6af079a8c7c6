//! HTTP adapter for the answer server

mod client;
mod error;

pub use client::HttpAskClient;
pub use error::HttpSetupError;
