//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] - a validated question to submit
//! - [`locale::Locale`] - language of the fixed user-facing messages
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod locale;
pub mod question;
pub mod string;
