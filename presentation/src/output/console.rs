//! Console output formatter

use askdesk_application::ApiCheckReport;
use askdesk_domain::{Locale, ViewState};
use colored::Colorize;

/// Formats view state and reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render what the front-end currently shows.
    ///
    /// Only visible parts are rendered: nothing while the result panel is
    /// hidden, and the fallback notice only when it is visible.
    pub fn format_view(state: &ViewState, locale: Locale) -> String {
        if !state.result_visible {
            return String::new();
        }

        let mut output = String::new();
        output.push_str(&state.answer_text);
        output.push('\n');

        if state.fallback_visible {
            output.push_str(&format!(
                "\n{} {}\n",
                locale.fallback_notice().yellow().bold(),
                state.form_link.underline()
            ));
        }

        output
    }

    /// Format the view state as JSON
    pub fn format_view_json(state: &ViewState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the result of `check`
    pub fn format_check_report(report: &ApiCheckReport) -> String {
        let mut output = String::new();

        match &report.health {
            Ok(health) if health.ok => {
                output.push_str(&format!("{} health: ok\n", "v".green()));
            }
            Ok(_) => {
                output.push_str(&format!("{} health: not ready (ok=false)\n", "x".red()));
            }
            Err(e) => {
                output.push_str(&format!("{} health: {}\n", "x".red(), e));
            }
        }

        match &report.ask {
            Ok(result) => {
                output.push_str(&format!(
                    "{} ask: fallback={}\n",
                    "v".green(),
                    result.fallback
                ));
                if !result.answer.is_empty() {
                    output.push_str(&format!("  {}\n", result.answer));
                }
            }
            Err(e) => {
                output.push_str(&format!("{} ask: {}\n", "x".red(), e));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdesk_application::FetchError;
    use askdesk_domain::{AnswerResult, HealthStatus};

    fn answered(text: &str, fallback: bool) -> ViewState {
        ViewState {
            result_visible: true,
            fallback_visible: fallback,
            answer_text: text.to_string(),
            ..ViewState::new("https://forms.example/x")
        }
    }

    #[test]
    fn test_hidden_result_renders_nothing() {
        assert_eq!(
            ConsoleFormatter::format_view(&ViewState::default(), Locale::En),
            ""
        );
    }

    #[test]
    fn test_answer_without_fallback() {
        let output = ConsoleFormatter::format_view(&answered("Friday", false), Locale::En);
        assert!(output.contains("Friday"));
        assert!(!output.contains("https://forms.example/x"));
    }

    #[test]
    fn test_answer_with_fallback_shows_link() {
        let output = ConsoleFormatter::format_view(&answered("Not sure", true), Locale::Ja);
        assert!(output.contains("Not sure"));
        assert!(output.contains("お問い合わせください"));
        assert!(output.contains("https://forms.example/x"));
    }

    #[test]
    fn test_view_json() {
        let json = ConsoleFormatter::format_view_json(&answered("Friday", false));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["answer_text"], "Friday");
        assert_eq!(value["result_visible"], true);
    }

    #[test]
    fn test_check_report() {
        let report = ApiCheckReport {
            health: Ok(HealthStatus { ok: true }),
            ask: Err(FetchError::Status {
                status: 503,
                detail: "warming up".to_string(),
            }),
        };
        let output = ConsoleFormatter::format_check_report(&report);
        assert!(output.contains("health: ok"));
        assert!(output.contains("ask: HTTP 503: warming up"));

        let report = ApiCheckReport {
            health: Ok(HealthStatus { ok: false }),
            ask: Ok(AnswerResult::new("3月31日です", false)),
        };
        let output = ConsoleFormatter::format_check_report(&report);
        assert!(output.contains("not ready"));
        assert!(output.contains("3月31日です"));
    }
}
