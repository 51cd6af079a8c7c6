//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A question to be submitted to the answer endpoint (Value Object)
///
/// The content is always trimmed and never empty. Blank input is not an
/// error for the front-end, it is simply ignored, so the primary
/// constructor returns `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a question from raw input, returning None if it is blank
    pub fn try_new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl FromStr for Question {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
            .ok_or_else(|| DomainError::InvalidQuestion("question is required".to_string()))
    }
}
