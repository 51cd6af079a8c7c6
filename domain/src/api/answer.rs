//! Answer payload served by `/ask`

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// The server's response to a submitted question (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Answer text, empty when the server sent none
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    /// Server could not produce a confident answer; surface the human fallback
    #[serde(default, deserialize_with = "null_as_default")]
    pub fallback: bool,
}

impl AnswerResult {
    pub fn new(answer: impl Into<String>, fallback: bool) -> Self {
        Self {
            answer: answer.into(),
            fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let result: AnswerResult =
            serde_json::from_str(r#"{"answer": "Friday", "fallback": false}"#).unwrap();
        assert_eq!(result, AnswerResult::new("Friday", false));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let result: AnswerResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, AnswerResult::default());

        let result: AnswerResult =
            serde_json::from_str(r#"{"answer": null, "fallback": true}"#).unwrap();
        assert_eq!(result, AnswerResult::new("", true));
    }

    #[test]
    fn test_null_body_is_an_error() {
        assert!(serde_json::from_str::<AnswerResult>("null").is_err());
        assert!(serde_json::from_str::<AnswerResult>("").is_err());
    }
}
