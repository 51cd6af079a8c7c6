//! Infrastructure layer for askdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and case file loading.

pub mod acceptance;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use acceptance::{AcceptanceSuiteLoader, SuiteLoadError};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAcceptanceConfig, FileConfig, FileReplConfig,
    FileServerConfig, FileUiConfig,
};
pub use http::{HttpAskClient, HttpSetupError};
