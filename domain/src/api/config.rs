//! Public configuration served by `/config_public`

use serde::{Deserialize, Serialize};

/// Best-effort front-end settings, fetched once at start-up.
///
/// Every field is optional. A failed fetch degrades to [`PublicConfig::empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicConfig {
    /// Target of the fallback link shown for low-confidence answers
    pub google_form_url: Option<String>,
}

impl PublicConfig {
    /// Configuration with no fields set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form URL, if present and non-empty
    pub fn form_url(&self) -> Option<&str> {
        self.google_form_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.form_url().is_none()
    }
}
