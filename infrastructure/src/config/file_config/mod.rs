//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod acceptance;
mod repl;
mod server;
mod ui;

pub use acceptance::FileAcceptanceConfig;
pub use repl::FileReplConfig;
pub use server::FileServerConfig;
pub use ui::FileUiConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0}.timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("server.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("server.{field} must start with '/' (got {value:?})")]
    InvalidPath { field: &'static str, value: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answer server settings
    pub server: FileServerConfig,
    /// Front-end settings
    pub ui: FileUiConfig,
    /// Acceptance run settings
    pub acceptance: FileAcceptanceConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        for (field, value) in [
            ("config_path", &self.server.config_path),
            ("ask_path", &self.server.ask_path),
            ("health_path", &self.server.health_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigValidationError::InvalidPath {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.server.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout("server"));
        }
        if self.acceptance.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("acceptance"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdesk_domain::Locale;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
base_url = "https://rag.example.com"
ask_path = "/api/ask"
timeout_seconds = 15

[ui]
locale = "ja"
color = false
show_progress = false
default_form_url = "https://forms.example/contact"

[acceptance]
file = "cases.yml"
timeout_seconds = 60

[repl]
history_file = "~/.local/share/askdesk/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url, "https://rag.example.com");
        assert_eq!(config.server.ask_path, "/api/ask");
        assert_eq!(config.server.config_path, "/config_public");
        assert_eq!(config.server.timeout_seconds, Some(15));
        assert_eq!(config.ui.locale, Locale::Ja);
        assert!(!config.ui.color);
        assert!(!config.ui.show_progress);
        assert_eq!(config.ui.default_form_url, "https://forms.example/contact");
        assert_eq!(config.acceptance.file, "cases.yml");
        assert_eq!(config.acceptance.timeout_seconds, 60);
        assert!(config.repl.history_file.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
base_url = "http://localhost:9000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url, "http://localhost:9000");
        // Defaults should apply
        assert_eq!(config.server.ask_path, "/ask");
        assert_eq!(config.server.timeout_seconds, None);
        assert_eq!(config.ui, FileUiConfig::default());
        assert_eq!(config.acceptance.timeout_seconds, 30);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.ui.locale, Locale::En);
        assert_eq!(config.ui.default_form_url, "#");
        assert_eq!(config.acceptance.file, "docs/acceptance_test.yml");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[server]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout("server"))
        );

        let config: FileConfig = toml::from_str("[acceptance]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout("acceptance"))
        );
    }

    #[test]
    fn test_validate_empty_base_url() {
        let config: FileConfig = toml::from_str("[server]\nbase_url = \" \"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }

    #[test]
    fn test_validate_relative_path() {
        let config: FileConfig = toml::from_str("[server]\nask_path = \"ask\"\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidPath {
                field: "ask_path",
                value: "ask".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(toml::from_str::<FileConfig>("[ui]\nlocale = \"fr\"\n").is_err());
    }
}
