//! Health payload served by `/healthz`

use serde::{Deserialize, Serialize};

/// Whether the server has its index and chat model loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub ok: bool,
}
