//! The appeal-withdrawal event page.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;
use std::path::Path;

/// Withdrawal request page
#[derive(Debug, Clone)]
pub struct WithdrawalPage {
    action: WebAction,
}

impl WithdrawalPage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn requested_by_dropdown() -> Selector {
        Selector::css("select#withdrawalRequestedBy")
    }

    fn request_doc_input() -> Selector {
        Selector::css("input#withdrawalRequestDocument")
    }

    fn continue_button() -> Selector {
        Selector::role("button", "Continue")
    }

    /// Record who asked for the withdrawal and attach their request
    pub async fn record_request(&self, requested_by: &str, document: &Path) -> SuiteResult<()> {
        self.action
            .select_option(&Self::requested_by_dropdown(), requested_by)
            .await?;
        self.action
            .upload_file(&Self::request_doc_input(), document)
            .await?;
        self.action.click(&Self::continue_button()).await
    }
}
