//! Answer view port
//!
//! The UI capability surface driven by [`RequestController`]. The controller
//! only ever writes to the view; it never reads element state back.
//!
//! [`RequestController`]: crate::RequestController

use askdesk_domain::ViewState;
use std::sync::Mutex;

/// Write-only handle to the question front-end.
///
/// Methods take `&self` so a view can be shared with the scoped loading
/// guard; implementations use interior mutability.
pub trait AnswerView: Send + Sync {
    /// Enable or disable the submit control
    fn set_submit_enabled(&self, enabled: bool);

    /// Show or hide the loading spinner
    fn set_spinner_visible(&self, visible: bool);

    /// Show or hide the result panel
    fn set_result_visible(&self, visible: bool);

    /// Show or hide the fallback notice
    fn set_fallback_visible(&self, visible: bool);

    /// Replace the answer text
    fn set_answer_text(&self, text: &str);

    /// Point the fallback link at a new target
    fn set_form_link(&self, url: &str);
}

/// In-memory view that just records the [`ViewState`].
///
/// Used headless (JSON output) and as the state store of richer views.
pub struct StateView {
    state: Mutex<ViewState>,
}

impl StateView {
    pub fn new(default_form_link: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(ViewState::new(default_form_link)),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ViewState> {
        // Flags stay valid across a poisoning panic
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for StateView {
    fn default() -> Self {
        Self {
            state: Mutex::new(ViewState::default()),
        }
    }
}

impl AnswerView for StateView {
    fn set_submit_enabled(&self, enabled: bool) {
        self.lock().submit_enabled = enabled;
    }

    fn set_spinner_visible(&self, visible: bool) {
        self.lock().spinner_visible = visible;
    }

    fn set_result_visible(&self, visible: bool) {
        self.lock().result_visible = visible;
    }

    fn set_fallback_visible(&self, visible: bool) {
        self.lock().fallback_visible = visible;
    }

    fn set_answer_text(&self, text: &str) {
        self.lock().answer_text = text.to_string();
    }

    fn set_form_link(&self, url: &str) {
        self.lock().form_link = url.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_view_records_writes() {
        let view = StateView::new("#");
        view.set_submit_enabled(false);
        view.set_spinner_visible(true);
        view.set_answer_text("hello");
        view.set_form_link("https://forms.example/x");

        let state = view.snapshot();
        assert!(!state.submit_enabled);
        assert!(state.spinner_visible);
        assert_eq!(state.answer_text, "hello");
        assert_eq!(state.form_link, "https://forms.example/x");
    }
}
