//! View state snapshot

use serde::Serialize;

/// Visibility and enablement flags of the front-end, plus the two pieces of
/// text it renders.
///
/// This is derived state: it is rebuilt on every submission and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub submit_enabled: bool,
    pub spinner_visible: bool,
    pub result_visible: bool,
    pub fallback_visible: bool,
    pub answer_text: String,
    pub form_link: String,
}

impl ViewState {
    /// Idle state with the given default fallback link
    pub fn new(form_link: impl Into<String>) -> Self {
        Self {
            submit_enabled: true,
            spinner_visible: false,
            result_visible: false,
            fallback_visible: false,
            answer_text: String::new(),
            form_link: form_link.into(),
        }
    }

    /// A request is in flight
    pub fn is_loading(&self) -> bool {
        !self.submit_enabled || self.spinner_visible
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new("#")
    }
}
