//! The Related Appeals tab, populated by the Link a case event.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Related Appeals tab
#[derive(Debug, Clone)]
pub struct RelatedAppealsTab {
    action: WebAction,
}

impl RelatedAppealsTab {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn linked_case_cell(hyphenated_ref: &str) -> Selector {
        Selector::css_with_text("ccd-read-case-link-field a", hyphenated_ref)
    }

    /// Assert the tab lists the linked case's hyphenated reference
    pub async fn verify_linked_case(&self, hyphenated_ref: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::linked_case_cell(hyphenated_ref))
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
    async fn linked_case_assertion_uses_the_hyphenated_reference() {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        let tab = RelatedAppealsTab::new(action);
        tab.action
            .page()
            .await
            .stub_visible(&RelatedAppealsTab::linked_case_cell("1748-5239-8624-3150"));
        tab.verify_linked_case("1748-5239-8624-3150").await.unwrap();
    }
}
