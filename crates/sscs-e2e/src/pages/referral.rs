//! The interlocutory-referral event page.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Referral page
#[derive(Debug, Clone)]
pub struct ReferralPage {
    action: WebAction,
}

impl ReferralPage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn referral_reason_dropdown() -> Selector {
        Selector::css("select#interlocReferralReason")
    }

    fn referral_note_input() -> Selector {
        Selector::css("textarea#interlocReferralNote")
    }

    fn continue_button() -> Selector {
        Selector::role("button", "Continue")
    }

    /// Record why the case is being referred and by whom
    pub async fn record_referral(&self, reason: &str, note: &str) -> SuiteResult<()> {
        self.action
            .select_option(&Self::referral_reason_dropdown(), reason)
            .await?;
        self.action.fill(&Self::referral_note_input(), note).await?;
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
    async fn referral_records_reason_and_note() {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        let page = ReferralPage::new(action);
        {
            let mock = page.action.page().await;
            mock.stub_visible(&ReferralPage::referral_reason_dropdown());
            mock.stub_visible(&ReferralPage::referral_note_input());
            mock.stub_visible(&ReferralPage::continue_button());
        }
        page.record_referral("Over 300 pages", "Bundle needs a judge's direction")
            .await
            .unwrap();
        let actions = page.action.page().await.actions();
        assert!(matches!(&actions[0], MockAction::Select { option, .. } if option == "Over 300 pages"));
        assert!(matches!(&actions[1], MockAction::Type { .. }));
    }
}
