//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Where the answer server lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Scheme, host and port of the server, without a trailing path
    pub base_url: String,
    /// Path of the public configuration endpoint
    pub config_path: String,
    /// Path of the answer endpoint
    pub ask_path: String,
    /// Path of the health endpoint
    pub health_path: String,
    /// Per-request timeout; unset means requests may wait forever
    pub timeout_seconds: Option<u64>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            config_path: "/config_public".to_string(),
            ask_path: "/ask".to_string(),
            health_path: "/healthz".to_string(),
            timeout_seconds: None,
        }
    }
}
