//! Application layer for askdesk
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    acceptance_progress::{AcceptanceProgress, NoAcceptanceProgress},
    answer_view::{AnswerView, StateView},
    ask_api::{AskApi, FetchError},
};
pub use use_cases::check_api::{ApiCheckReport, CheckApiUseCase};
pub use use_cases::request_controller::{RequestController, SubmitOutcome};
pub use use_cases::run_acceptance::{
    AcceptanceSummary, CaseOutcome, CaseReport, RunAcceptanceUseCase,
};
