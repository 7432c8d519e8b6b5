//! The Response reviewed event page, where a caseworker answers the
//! interlocutory-review question after the FTA response lands.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Response reviewed page
#[derive(Debug, Clone)]
pub struct ResponseReviewedPage {
    action: WebAction,
}

impl ResponseReviewedPage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn interloc_radio(answer: bool) -> Selector {
        if answer {
            Selector::css("input#isInterlocRequired_Yes")
        } else {
            Selector::css("input#isInterlocRequired_No")
        }
    }

    fn continue_button() -> Selector {
        Selector::role("button", "Continue")
    }

    /// Answer "Is an interlocutory review required?"
    pub async fn select_interloc_required(&self, answer: bool) -> SuiteResult<()> {
        self.action
            .set_checked(&Self::interloc_radio(answer), true)
            .await?;
        self.action.click(&Self::continue_button()).await
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::{MockAction, Page};
    use crate::locator::LocatorOptions;
    use std::time::Duration;

    #[tokio::test]
    async fn interloc_no_checks_the_no_radio() {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        let page = ResponseReviewedPage::new(action);
        {
            let mock = page.action.page().await;
            mock.stub_visible(&ResponseReviewedPage::interloc_radio(false));
            mock.stub_visible(&ResponseReviewedPage::continue_button());
        }
        page.select_interloc_required(false).await.unwrap();
        let actions = page.action.page().await.actions();
        assert!(matches!(
            &actions[0],
            MockAction::SetChecked { selector, checked: true }
                if selector.contains("isInterlocRequired_No")
        ));
    }
}
