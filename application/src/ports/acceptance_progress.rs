//! Acceptance progress port
//!
//! Defines the interface for reporting progress during an acceptance run.

use crate::use_cases::run_acceptance::{AcceptanceSummary, CaseReport};

/// Callback for progress updates during an acceptance run
///
/// Implementations live in the presentation layer.
pub trait AcceptanceProgress: Send + Sync {
    /// Called once before the first case is sent
    fn on_run_start(&self, total_cases: usize);

    /// Called after each case has been sent and evaluated
    fn on_case_complete(&self, report: &CaseReport);

    /// Called once after the last case
    fn on_run_complete(&self, summary: &AcceptanceSummary);
}

/// No-op progress for when reporting is not needed
pub struct NoAcceptanceProgress;

impl AcceptanceProgress for NoAcceptanceProgress {
    fn on_run_start(&self, _total_cases: usize) {}
    fn on_case_complete(&self, _report: &CaseReport) {}
    fn on_run_complete(&self, _summary: &AcceptanceSummary) {}
}
