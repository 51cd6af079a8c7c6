//! Run Acceptance use case
//!
//! Sends every acceptance case to the answer endpoint, one after another,
//! and evaluates the answers against the case expectations. A failing case
//! never aborts the run.

use crate::ports::acceptance_progress::{AcceptanceProgress, NoAcceptanceProgress};
use crate::ports::ask_api::{AskApi, FetchError};
use askdesk_domain::{AcceptanceCase, Question, evaluate, snippet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Characters of the answer kept for failure reports
const ANSWER_SNIPPET_CHARS: usize = 160;

/// Result of a single case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Answer met every expectation
    Passed,
    /// Answer arrived but missed expectations
    Failed {
        reasons: Vec<String>,
        /// Flattened start of the answer, if it was non-empty
        answer_snippet: Option<String>,
    },
    /// No usable answer (empty question, transport error, bad status or body)
    Errored(String),
}

/// Report for one case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub outcome: CaseOutcome,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed)
    }
}

/// Result of a whole run
#[derive(Debug, Clone)]
pub struct AcceptanceSummary {
    pub reports: Vec<CaseReport>,
    pub elapsed: Duration,
}

impl AcceptanceSummary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Use case for running acceptance cases against the answer endpoint
pub struct RunAcceptanceUseCase<A: AskApi + 'static> {
    api: Arc<A>,
}

impl<A: AskApi + 'static> RunAcceptanceUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, cases: &[AcceptanceCase]) -> AcceptanceSummary {
        self.execute_with_progress(cases, &NoAcceptanceProgress).await
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        cases: &[AcceptanceCase],
        progress: &dyn AcceptanceProgress,
    ) -> AcceptanceSummary {
        info!("Running {} acceptance cases", cases.len());
        progress.on_run_start(cases.len());

        let start = Instant::now();
        let mut reports = Vec::with_capacity(cases.len());

        for case in cases {
            let report = CaseReport {
                name: case.name.clone(),
                outcome: self.run_case(case).await,
            };
            debug!(case = %report.name, passed = report.passed(), "Case finished");
            progress.on_case_complete(&report);
            reports.push(report);
        }

        let summary = AcceptanceSummary {
            reports,
            elapsed: start.elapsed(),
        };
        info!("{}/{} cases passed", summary.passed(), summary.total());
        progress.on_run_complete(&summary);
        summary
    }

    async fn run_case(&self, case: &AcceptanceCase) -> CaseOutcome {
        let Some(question) = Question::try_new(&case.question) else {
            return CaseOutcome::Errored("question is empty".to_string());
        };

        let result = match self.api.ask(&question).await {
            Ok(result) => result,
            Err(e) => return CaseOutcome::Errored(describe_failure(&e)),
        };

        let verdict = evaluate(&result.answer, result.fallback, &case.expected);
        if verdict.passed {
            CaseOutcome::Passed
        } else {
            CaseOutcome::Failed {
                reasons: verdict.reasons,
                answer_snippet: (!result.answer.is_empty())
                    .then(|| snippet(&result.answer, ANSWER_SNIPPET_CHARS)),
            }
        }
    }
}

fn describe_failure(error: &FetchError) -> String {
    match error {
        FetchError::Network(e) => format!("request error: {}", e),
        FetchError::Timeout => "request error: timed out".to_string(),
        FetchError::Status { status, detail } => format!("HTTP {}: {}", status, detail),
        FetchError::Decode(e) => format!("invalid JSON response: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdesk_domain::{AnswerResult, Expected, HealthStatus, PublicConfig};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Answers keyed by question text
    struct TableApi {
        table: HashMap<String, Result<AnswerResult, FetchError>>,
    }

    impl TableApi {
        fn new(entries: Vec<(&str, Result<AnswerResult, FetchError>)>) -> Self {
            Self {
                table: entries
                    .into_iter()
                    .map(|(q, r)| (q.to_string(), r))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl AskApi for TableApi {
        async fn fetch_config(&self) -> Result<PublicConfig, FetchError> {
            Ok(PublicConfig::empty())
        }

        async fn ask(&self, question: &Question) -> Result<AnswerResult, FetchError> {
            self.table
                .get(question.content())
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Network("unknown question".to_string())))
        }

        async fn health(&self) -> Result<HealthStatus, FetchError> {
            Ok(HealthStatus { ok: true })
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl AcceptanceProgress for RecordingProgress {
        fn on_run_start(&self, total_cases: usize) {
            self.events.lock().unwrap().push(format!("start {}", total_cases));
        }

        fn on_case_complete(&self, report: &CaseReport) {
            self.events
                .lock()
                .unwrap()
                .push(format!("case {} {}", report.name, report.passed()));
        }

        fn on_run_complete(&self, summary: &AcceptanceSummary) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {}/{}", summary.passed(), summary.total()));
        }
    }

    #[tokio::test]
    async fn test_mixed_run() {
        let api = Arc::new(TableApi::new(vec![
            ("deadline?", Ok(AnswerResult::new("3月31日です", false))),
            ("weather?", Ok(AnswerResult::new("該当情報が見つかりません", true))),
            ("fees?", Ok(AnswerResult::new("line one\nline two", false))),
            (
                "broken?",
                Err(FetchError::Status {
                    status: 500,
                    detail: "Internal Server Error".to_string(),
                }),
            ),
        ]));
        let cases = vec![
            AcceptanceCase::new("deadline", "deadline?", Expected::answer().including("3月31日")),
            AcceptanceCase::new("out-of-scope", "weather?", Expected::fallback()),
            AcceptanceCase::new("fees", "fees?", Expected::answer().including("yen")),
            AcceptanceCase::new("broken", "broken?", Expected::answer()),
            AcceptanceCase::new("blank", "  ", Expected::answer()),
        ];

        let progress = RecordingProgress::default();
        let summary = RunAcceptanceUseCase::new(api)
            .execute_with_progress(&cases, &progress)
            .await;

        assert_eq!(summary.total(), 5);
        assert_eq!(summary.passed(), 2);
        assert!(!summary.all_passed());

        assert_eq!(
            summary.reports[2].outcome,
            CaseOutcome::Failed {
                reasons: vec!["missing include: yen".to_string()],
                answer_snippet: Some("line one line two".to_string()),
            }
        );
        assert_eq!(
            summary.reports[3].outcome,
            CaseOutcome::Errored("HTTP 500: Internal Server Error".to_string())
        );
        assert_eq!(
            summary.reports[4].outcome,
            CaseOutcome::Errored("question is empty".to_string())
        );

        let events = progress.events.lock().unwrap();
        assert_eq!(events.first().unwrap(), "start 5");
        assert_eq!(events.last().unwrap(), "done 2/5");
        assert_eq!(events.len(), 7);
    }

    #[tokio::test]
    async fn test_empty_answer_has_no_snippet() {
        let api = Arc::new(TableApi::new(vec![("q", Ok(AnswerResult::new("", true)))]));
        let cases = vec![AcceptanceCase::new("q", "q", Expected::answer())];

        let summary = RunAcceptanceUseCase::new(api).execute(&cases).await;

        assert_eq!(
            summary.reports[0].outcome,
            CaseOutcome::Failed {
                reasons: vec!["unexpected fallback=true for answer case".to_string()],
                answer_snippet: None,
            }
        );
    }

    #[test]
    fn test_describe_failure() {
        assert_eq!(
            describe_failure(&FetchError::Network("refused".to_string())),
            "request error: refused"
        );
        assert_eq!(describe_failure(&FetchError::Timeout), "request error: timed out");
        assert_eq!(
            describe_failure(&FetchError::Status {
                status: 503,
                detail: "warming up".to_string(),
            }),
            "HTTP 503: warming up"
        );
        // An empty error body arrives with the adapter's substitute detail
        assert_eq!(
            describe_failure(&FetchError::Status {
                status: 500,
                detail: "HTTP error 500".to_string(),
            }),
            "HTTP 500: HTTP error 500"
        );
        assert_eq!(
            describe_failure(&FetchError::Decode("EOF".to_string())),
            "invalid JSON response: EOF"
        );
    }
}
