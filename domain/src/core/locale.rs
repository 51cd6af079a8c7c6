//! Locale of the fixed user-facing messages

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used for the messages the front-end shows on its own
/// (as opposed to answer text, which comes from the server verbatim).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Message rendered in the result panel when a request fails for any reason
    pub fn request_failed_message(&self) -> &'static str {
        match self {
            Locale::En => "An error occurred. Please try again later.",
            Locale::Ja => "エラーが発生しました。時間をおいて再度お試しください。",
        }
    }

    /// Error detail used when the body of a failed response cannot be read
    pub fn default_error_detail(&self) -> &'static str {
        match self {
            Locale::En => "An error occurred",
            Locale::Ja => "エラーが発生しました",
        }
    }

    /// Text of the fallback notice shown next to the form link
    pub fn fallback_notice(&self) -> &'static str {
        match self {
            Locale::En => "No confident answer was found. Please contact us using the form:",
            Locale::Ja => "該当情報が見つからない場合は、こちらのフォームからお問い合わせください:",
        }
    }

    /// Spinner message while a request is in flight
    pub fn loading_message(&self) -> &'static str {
        match self {
            Locale::En => "Waiting for an answer...",
            Locale::Ja => "回答を待っています...",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ja" | "japanese" => Ok(Locale::Ja),
            other => Err(DomainError::UnknownLocale(other.to_string())),
        }
    }
}
