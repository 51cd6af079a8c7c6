//! Console reporter for acceptance runs

use askdesk_application::{AcceptanceProgress, AcceptanceSummary, CaseOutcome, CaseReport};
use colored::Colorize;

/// Prints one line per case and a final tally to stdout
pub struct AcceptanceReporter {
    target: String,
}

impl AcceptanceReporter {
    /// `target` names the server in the run header
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Format the lines for one case
    pub fn format_case(report: &CaseReport) -> String {
        match &report.outcome {
            CaseOutcome::Passed => format!("{} {}", "[PASS]".green(), report.name),
            CaseOutcome::Failed {
                reasons,
                answer_snippet,
            } => {
                let mut line = format!("{} {}: {}", "[FAIL]".red(), report.name, reasons.join("; "));
                if let Some(snippet) = answer_snippet {
                    line.push_str(&format!("\n       answer: {}", snippet));
                }
                line
            }
            CaseOutcome::Errored(reason) => {
                format!("{} {}: {}", "[FAIL]".red(), report.name, reason)
            }
        }
    }

    /// Format the closing tally
    pub fn format_summary(summary: &AcceptanceSummary) -> String {
        let tally = format!(
            "Result: {}/{} passed in {:.2}s",
            summary.passed(),
            summary.total(),
            summary.elapsed.as_secs_f64()
        );
        if summary.all_passed() {
            tally.green().bold().to_string()
        } else {
            tally.red().bold().to_string()
        }
    }
}

impl AcceptanceProgress for AcceptanceReporter {
    fn on_run_start(&self, total_cases: usize) {
        println!("Running {} cases against {}\n", total_cases, self.target);
    }

    fn on_case_complete(&self, report: &CaseReport) {
        println!("{}", Self::format_case(report));
    }

    fn on_run_complete(&self, summary: &AcceptanceSummary) {
        println!("\n{}", Self::format_summary(summary));
    }
}
