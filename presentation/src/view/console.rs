//! Terminal answer view

use crate::output::console::ConsoleFormatter;
use askdesk_application::{AnswerView, StateView};
use askdesk_domain::{Locale, ViewState};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Answer view for the terminal.
///
/// Tracks the view state and shows an indicatif spinner while the spinner
/// flag is set. Everything else is rendered on demand by [`render`].
///
/// [`render`]: ConsoleView::render
pub struct ConsoleView {
    state: StateView,
    locale: Locale,
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleView {
    pub fn new(default_form_link: impl Into<String>, locale: Locale) -> Self {
        Self {
            state: StateView::new(default_form_link),
            locale,
            show_progress: true,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to show the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.snapshot()
    }

    /// Render the visible parts of the view
    pub fn render(&self) -> String {
        ConsoleFormatter::format_view(&self.snapshot(), self.locale)
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn toggle_spinner(&self, visible: bool) {
        let mut spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if visible {
            if spinner.is_none() {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(self.locale.loading_message());
                pb.enable_steady_tick(Duration::from_millis(100));
                *spinner = Some(pb);
            }
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl AnswerView for ConsoleView {
    fn set_submit_enabled(&self, enabled: bool) {
        self.state.set_submit_enabled(enabled);
    }

    fn set_spinner_visible(&self, visible: bool) {
        self.state.set_spinner_visible(visible);
        if self.show_progress {
            self.toggle_spinner(visible);
        }
    }

    fn set_result_visible(&self, visible: bool) {
        self.state.set_result_visible(visible);
    }

    fn set_fallback_visible(&self, visible: bool) {
        self.state.set_fallback_visible(visible);
    }

    fn set_answer_text(&self, text: &str) {
        self.state.set_answer_text(text);
    }

    fn set_form_link(&self, url: &str) {
        self.state.set_form_link(url);
    }
}
