//! Acceptance case entities

use serde::{Deserialize, Serialize};

/// Expected kind of response for a case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedKind {
    /// A confident answer (`fallback = false`)
    #[default]
    Answer,
    /// A fallback answer (`fallback = true`)
    Fallback,
}

impl ExpectedKind {
    /// Parse leniently: `"fallback"` in any case selects Fallback, anything
    /// else is treated as a regular answer.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("fallback") {
            ExpectedKind::Fallback
        } else {
            ExpectedKind::Answer
        }
    }
}

/// Expectations for one case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expected {
    pub kind: ExpectedKind,
    pub must_include: Vec<String>,
    pub must_not_include: Vec<String>,
}

impl Expected {
    pub fn answer() -> Self {
        Self::default()
    }

    pub fn fallback() -> Self {
        Self {
            kind: ExpectedKind::Fallback,
            ..Self::default()
        }
    }

    pub fn including(mut self, s: impl Into<String>) -> Self {
        self.must_include.push(s.into());
        self
    }

    pub fn excluding(mut self, s: impl Into<String>) -> Self {
        self.must_not_include.push(s.into());
        self
    }
}

/// A named question with expectations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptanceCase {
    pub name: String,
    /// Trimmed question text; may be empty if the case file left it out
    pub question: String,
    pub expected: Expected,
}

impl AcceptanceCase {
    pub fn new(name: impl Into<String>, question: impl AsRef<str>, expected: Expected) -> Self {
        Self {
            name: name.into(),
            question: question.as_ref().trim().to_string(),
            expected,
        }
    }
}
