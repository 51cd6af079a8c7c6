//! Evaluation of an answer against case expectations

use super::case::{Expected, ExpectedKind};

/// Outcome of checking one answer against its expectations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseVerdict {
    pub passed: bool,
    /// Human-readable reasons for failure, in check order
    pub reasons: Vec<String>,
}

/// Check an answer against expectations.
///
/// Checks, in order: the fallback flag against the expected kind, every
/// non-empty `must_include` substring, every non-empty `must_not_include`
/// substring. All failures are collected rather than stopping at the first.
pub fn evaluate(answer: &str, fallback: bool, expected: &Expected) -> CaseVerdict {
    let mut reasons = Vec::new();

    match expected.kind {
        ExpectedKind::Fallback if !fallback => {
            reasons.push("expected fallback=true".to_string());
        }
        ExpectedKind::Answer if fallback => {
            reasons.push("unexpected fallback=true for answer case".to_string());
        }
        _ => {}
    }

    for s in expected.must_include.iter().filter(|s| !s.is_empty()) {
        if !answer.contains(s.as_str()) {
            reasons.push(format!("missing include: {}", s));
        }
    }

    for s in expected.must_not_include.iter().filter(|s| !s.is_empty()) {
        if answer.contains(s.as_str()) {
            reasons.push(format!("should not include: {}", s));
        }
    }

    CaseVerdict {
        passed: reasons.is_empty(),
        reasons,
    }
}
