//! UI configuration from TOML (`[ui]` section)

use askdesk_domain::Locale;
use serde::{Deserialize, Serialize};

/// Raw front-end configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Language of the fixed messages
    pub locale: Locale,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a request is in flight
    pub show_progress: bool,
    /// Fallback link target until the server configuration says otherwise
    pub default_form_url: String,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            color: true,
            show_progress: true,
            default_form_url: "#".to_string(),
        }
    }
}
