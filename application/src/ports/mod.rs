//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod acceptance_progress;
pub mod answer_view;
pub mod ask_api;
