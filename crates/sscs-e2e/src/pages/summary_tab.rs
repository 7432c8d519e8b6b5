//! The Summary tab.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Summary tab
#[derive(Debug, Clone)]
pub struct SummaryTab {
    action: WebAction,
}

impl SummaryTab {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn status_field() -> Selector {
        Selector::css("ccd-read-text-field span.case-status")
    }

    fn field_value(value: &str) -> Selector {
        Selector::css_with_text("ccd-field-read span", value)
    }

    /// Assert the case status shown at the top of the tab
    pub async fn verify_status(&self, status: &str) -> SuiteResult<()> {
        self.action
            .wait_for_text(&Self::status_field(), status)
            .await
    }

    /// Assert a field value is rendered somewhere on the tab
    pub async fn verify_field_value(&self, value: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::field_value(value))
            .await
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::Page;
    use crate::locator::LocatorOptions;
    use std::time::Duration;

    #[tokio::test]
    async fn status_assertion_polls_the_status_field() {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        let tab = SummaryTab::new(action);
        tab.action
            .page()
            .await
            .stub_text(&SummaryTab::status_field(), "Ready to list");
        tab.verify_status("Ready to list").await.unwrap();
    }
}
