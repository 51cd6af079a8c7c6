//! Request controller use case
//!
//! Drives the single-page interaction: load the public configuration once,
//! then turn each submitted question into one request/response cycle and
//! reflect it in the view.
//!
//! Per submission the view moves through `Idle → Loading → {Success,
//! Failure} → Idle`. The only guard against a second submission while one is
//! in flight is the disabled submit control.

use crate::ports::answer_view::AnswerView;
use crate::ports::ask_api::AskApi;
use askdesk_domain::{AnswerResult, Locale, PublicConfig, Question};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a call to [`RequestController::submit`] ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent and the view was not touched
    Ignored,
    /// The server answered (possibly with the fallback flag set)
    Answered(AnswerResult),
    /// The request failed; the view shows the fixed error message
    Failed,
}

impl SubmitOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, SubmitOutcome::Failed)
    }
}

/// Scoped loading state.
///
/// Engaging disables the submit control and shows the spinner; dropping
/// restores both, on every exit path including unwinding and a dropped
/// future.
struct LoadingGuard<'a, V: AnswerView + ?Sized> {
    view: &'a V,
}

impl<'a, V: AnswerView + ?Sized> LoadingGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.set_submit_enabled(false);
        view.set_spinner_visible(true);
        Self { view }
    }
}

impl<V: AnswerView + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_enabled(true);
        self.view.set_spinner_visible(false);
    }
}

/// Controller for the question front-end
pub struct RequestController<A: AskApi + 'static, V: AnswerView + 'static> {
    api: Arc<A>,
    view: Arc<V>,
    locale: Locale,
}

impl<A: AskApi + 'static, V: AnswerView + 'static> RequestController<A, V> {
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self {
            api,
            view,
            locale: Locale::default(),
        }
    }

    /// Set the locale of the fixed error message
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Load the public configuration and apply it to the view.
    ///
    /// Never fails: any fetch failure degrades to an empty configuration.
    /// The fallback link is only touched when the configuration carries a
    /// non-empty form URL. Returns the configuration that was applied.
    pub async fn initialize(&self) -> PublicConfig {
        let config = match self.api.fetch_config().await {
            Ok(config) => config,
            Err(e) => {
                debug!("Public configuration unavailable, using defaults: {}", e);
                PublicConfig::empty()
            }
        };

        if let Some(url) = config.form_url() {
            info!("Fallback form link set to {}", url);
            self.view.set_form_link(url);
        }

        config
    }

    /// Submit a question typed by the user.
    ///
    /// Blank input is ignored without touching the view. Otherwise the view
    /// enters the loading state before the request is issued and leaves it
    /// after the request settles, whatever the outcome.
    pub async fn submit(&self, raw_question: &str) -> SubmitOutcome {
        let Some(question) = Question::try_new(raw_question) else {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored;
        };

        let view = self.view.as_ref();
        let _loading = LoadingGuard::engage(view);
        view.set_result_visible(false);
        view.set_fallback_visible(false);
        view.set_answer_text("");

        match self.api.ask(&question).await {
            Ok(result) => {
                info!(fallback = result.fallback, "Answer received");
                view.set_answer_text(&result.answer);
                view.set_result_visible(true);
                if result.fallback {
                    view.set_fallback_visible(true);
                }
                SubmitOutcome::Answered(result)
            }
            // Only the fixed message reaches the view
            Err(e) => {
                warn!("Ask request failed: {}", e);
                view.set_answer_text(self.locale.request_failed_message());
                view.set_result_visible(true);
                SubmitOutcome::Failed
            }
        }
    }
}
