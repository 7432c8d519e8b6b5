//! The Link a case event page.

use crate::action::WebAction;
use crate::content;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Link a case page
#[derive(Debug, Clone)]
pub struct LinkCasePage {
    action: WebAction,
}

impl LinkCasePage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn add_new_button() -> Selector {
        Selector::role("button", "Add new")
    }

    fn case_reference_input() -> Selector {
        Selector::css("input#linkedCasesBoolean_value")
    }

    fn continue_button() -> Selector {
        Selector::role("button", "Continue")
    }

    /// Assert the page heading is rendered
    pub async fn verify_page_content(&self) -> SuiteResult<()> {
        self.action
            .verify_text_visible(&content::link_case().title)
            .await
    }

    /// Enter a case reference into a fresh linked-case row
    pub async fn add_linked_case(&self, case_reference: &str) -> SuiteResult<()> {
        self.action.click(&Self::add_new_button()).await?;
        self.action
            .fill(&Self::case_reference_input(), case_reference)
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
    async fn add_linked_case_adds_a_row_fills_it_and_continues() {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        let page = LinkCasePage::new(action);
        {
            let mock = page.action.page().await;
            mock.stub_visible(&LinkCasePage::add_new_button());
            mock.stub_visible(&LinkCasePage::case_reference_input());
            mock.stub_visible(&LinkCasePage::continue_button());
        }

        page.add_linked_case("1748523986243150").await.unwrap();

        let actions = page.action.page().await.actions();
        assert_eq!(actions.len(), 3);
        assert!(matches!(&actions[1], MockAction::Type { text, .. } if text == "1748523986243150"));
    }
}
