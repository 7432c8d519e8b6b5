//! The urgent-hearing request pages: uploading the request document and
//! the admin action that marks the case urgent.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;
use std::path::Path;

/// Urgent hearing request page
#[derive(Debug, Clone)]
pub struct UrgentHearingPage {
    action: WebAction,
}

impl UrgentHearingPage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn request_doc_input() -> Selector {
        Selector::css("input#urgentHearingRequestDocument")
    }

    fn urgent_case_radio(answer: bool) -> Selector {
        if answer {
            Selector::css("input#urgentCase_Yes")
        } else {
            Selector::css("input#urgentCase_No")
        }
    }

    fn urgent_flag() -> Selector {
        Selector::css_with_text("ccd-case-header .case-flag", "Urgent case")
    }

    fn continue_button() -> Selector {
        Selector::role("button", "Continue")
    }

    /// Attach the urgent-hearing request document
    pub async fn upload_request_document(&self, document: &Path) -> SuiteResult<()> {
        self.action
            .upload_file(&Self::request_doc_input(), document)
            .await?;
        self.action.click(&Self::continue_button()).await
    }

    /// Answer the "is this an urgent case" question
    pub async fn mark_case_urgent(&self, answer: bool) -> SuiteResult<()> {
        self.action
            .set_checked(&Self::urgent_case_radio(answer), true)
            .await?;
        self.action.click(&Self::continue_button()).await
    }

    /// Assert the urgent-case flag is shown on the case header
    pub async fn verify_urgent_flag(&self) -> SuiteResult<()> {
        self.action.wait_for_visible(&Self::urgent_flag()).await
    }
}
