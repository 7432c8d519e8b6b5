//! The check-your-answers screen every event funnels through, plus the
//! confirmation banner shown after submission.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Event summary / submission page
#[derive(Debug, Clone)]
pub struct EventSummaryPage {
    action: WebAction,
}

impl EventSummaryPage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn submit_button() -> Selector {
        Selector::role("button", "Submit")
    }

    fn confirmation_banner() -> Selector {
        Selector::css("div.alert-message")
    }

    fn validation_error(text: &str) -> Selector {
        Selector::css_with_text("div.error-summary, span.error-message", text)
    }

    /// Submit the event
    pub async fn confirm_submission(&self) -> SuiteResult<()> {
        self.action.click(&Self::submit_button()).await
    }

    /// Wait for the post-submission confirmation banner
    pub async fn verify_confirmation(&self, banner_text: &str) -> SuiteResult<()> {
        self.action
            .wait_for_text(&Self::confirmation_banner(), banner_text)
            .await
    }

    /// Wait for a validation error with the given text
    pub async fn verify_validation_error(&self, text: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::validation_error(text))
            .await
    }
}
