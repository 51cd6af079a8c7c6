//! Domain layer for askdesk
//!
//! This crate contains the value objects exchanged with the answer server
//! and the UI state the front-end renders. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: trimmed, non-empty text submitted by the user
//! - **PublicConfig**: best-effort settings served once at start-up
//! - **AnswerResult**: the server's answer plus a fallback flag
//! - **ViewState**: the visibility/enablement flags of the front-end
//! - **AcceptanceCase**: a question with expectations checked against a live server

pub mod acceptance;
pub mod api;
pub mod core;
pub mod view;

// Re-export commonly used types
pub use acceptance::{AcceptanceCase, CaseVerdict, Expected, ExpectedKind, evaluate};
pub use api::{AnswerResult, HealthStatus, PublicConfig};
pub use core::{error::DomainError, locale::Locale, question::Question, string::snippet};
pub use view::ViewState;
