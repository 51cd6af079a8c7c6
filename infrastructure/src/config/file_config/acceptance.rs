//! Acceptance run configuration from TOML (`[acceptance]` section)

use serde::{Deserialize, Serialize};

/// Raw acceptance configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAcceptanceConfig {
    /// YAML file holding the cases
    pub file: String,
    /// Per-request timeout for acceptance cases
    pub timeout_seconds: u64,
}

impl Default for FileAcceptanceConfig {
    fn default() -> Self {
        Self {
            file: "docs/acceptance_test.yml".to_string(),
            timeout_seconds: 30,
        }
    }
}
