//! The Bundles tab.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Bundles tab
#[derive(Debug, Clone)]
pub struct BundlesTab {
    action: WebAction,
}

impl BundlesTab {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn bundle_config_cell(config_name: &str) -> Selector {
        Selector::css_with_text("ccd-read-complex-field table td", config_name)
    }

    fn stitch_status(status: &str) -> Selector {
        Selector::css_with_text("ccd-read-complex-field table td span", status)
    }

    /// Assert the tab shows the given bundle configuration
    pub async fn verify_bundle_config(&self, config_name: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::bundle_config_cell(config_name))
            .await
    }

    /// Assert the stitching outcome, e.g. "DONE"
    pub async fn verify_stitch_status(&self, status: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::stitch_status(status))
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
    async fn stitch_status_assertion_matches_cell_text() {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        let tab = BundlesTab::new(action);
        tab.action
            .page()
            .await
            .stub_visible(&BundlesTab::stitch_status("DONE"));
        tab.verify_stitch_status("DONE").await.unwrap();
    }
}
