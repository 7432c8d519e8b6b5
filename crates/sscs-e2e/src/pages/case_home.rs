//! The case-details screen: header, tab strip and the next-step event
//! trigger shared by every scenario.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Case-details home page
#[derive(Debug, Clone)]
pub struct CaseHomePage {
    action: WebAction,
}

impl CaseHomePage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn case_header() -> Selector {
        Selector::css("ccd-case-header .case-title")
    }

    fn next_step_dropdown() -> Selector {
        Selector::css("select#next-step")
    }

    fn go_button() -> Selector {
        Selector::role("button", "Go")
    }

    fn tab(label: &str) -> Selector {
        Selector::role("tab", label)
    }

    /// Wait for the case header to show the hyphenated case reference
    pub async fn verify_case_reference(&self, hyphenated_ref: &str) -> SuiteResult<()> {
        self.action
            .wait_for_text(&Self::case_header(), hyphenated_ref)
            .await
    }

    /// Pick an event in the next-step dropdown and press Go
    pub async fn choose_event(&self, event_label: &str) -> SuiteResult<()> {
        self.action
            .select_option(&Self::next_step_dropdown(), event_label)
            .await?;
        self.action.click(&Self::go_button()).await
    }

    /// Open a tab on the tab strip
    pub async fn open_tab(&self, label: &str) -> SuiteResult<()> {
        self.action.click(&Self::tab(label)).await
    }

    /// Sign the current user out
    pub async fn sign_out(&self) -> SuiteResult<()> {
        self.action
            .click(&super::sign_in::SignInPage::sign_out_link())
            .await
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::{MockAction, Page};
    use crate::locator::LocatorOptions;
    use std::time::Duration;

    fn page_under_test() -> CaseHomePage {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        CaseHomePage::new(action)
    }

    #[tokio::test]
    async fn choose_event_selects_then_goes() {
        let page = page_under_test();
        {
            let mock = page.action.page().await;
            mock.stub_visible(&CaseHomePage::next_step_dropdown());
            mock.stub_visible(&CaseHomePage::go_button());
        }

        page.choose_event("Upload response").await.unwrap();

        let actions = page.action.page().await.actions();
        assert_eq!(
            actions,
            vec![
                MockAction::Select {
                    selector: CaseHomePage::next_step_dropdown().to_string(),
                    option: "Upload response".to_string(),
                },
                MockAction::Click(CaseHomePage::go_button().to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn verify_case_reference_waits_for_header_text() {
        let page = page_under_test();
        page.action
            .page()
            .await
            .stub_text(&CaseHomePage::case_header(), "1748-5239-8624-3150");
        page.verify_case_reference("1748-5239-8624-3150")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn open_tab_targets_the_labelled_tab() {
        let page = page_under_test();
        page.action
            .page()
            .await
            .stub_visible(&CaseHomePage::tab("History"));
        page.open_tab("History").await.unwrap();
        assert_eq!(
            page.action.page().await.actions(),
            vec![MockAction::Click(CaseHomePage::tab("History").to_string())]
        );
    }
}
