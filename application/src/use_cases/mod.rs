//! Use cases
//!
//! - [`request_controller`] - the interactive question/answer cycle
//! - [`run_acceptance`] - batch acceptance run against the answer endpoint
//! - [`check_api`] - health probe plus one sample question

pub mod check_api;
pub mod request_controller;
pub mod run_acceptance;
