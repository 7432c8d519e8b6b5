//! The Upload response event page, where the FTA responder attaches the
//! response bundle and answers the further-information question.

use crate::action::WebAction;
use crate::content;
use crate::locator::Selector;
use crate::result::SuiteResult;
use std::path::Path;

/// Upload response page
#[derive(Debug, Clone)]
pub struct UploadResponsePage {
    action: WebAction,
}

impl UploadResponsePage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn response_doc_input() -> Selector {
        Selector::css("input#dwpResponseDocument")
    }

    fn evidence_bundle_input() -> Selector {
        Selector::css("input#dwpEvidenceBundleDocument")
    }

    fn further_info_radio(answer: bool) -> Selector {
        if answer {
            Selector::css("input#dwpFurtherInfo_Yes")
        } else {
            Selector::css("input#dwpFurtherInfo_No")
        }
    }

    fn fta_state_dropdown() -> Selector {
        Selector::css("select#dwpState")
    }

    fn continue_button() -> Selector {
        Selector::role("button", "Continue")
    }

    /// Assert the page heading and static field labels are rendered
    pub async fn verify_page_content(&self) -> SuiteResult<()> {
        let expected = content::upload_response();
        self.action.verify_text_visible(&expected.title).await?;
        for label in &expected.labels {
            self.action.verify_text_visible(label).await?;
        }
        Ok(())
    }

    /// Attach the FTA response document and evidence bundle
    pub async fn upload_response_docs(
        &self,
        response: &Path,
        evidence: &Path,
    ) -> SuiteResult<()> {
        self.action
            .upload_file(&Self::response_doc_input(), response)
            .await?;
        self.action
            .upload_file(&Self::evidence_bundle_input(), evidence)
            .await
    }

    /// Answer "Is there any further information?"
    pub async fn select_further_info(&self, answer: bool) -> SuiteResult<()> {
        self.action
            .set_checked(&Self::further_info_radio(answer), true)
            .await
    }

    /// Pick the FTA state the response leaves the case in
    pub async fn select_fta_state(&self, state: &str) -> SuiteResult<()> {
        self.action
            .select_option(&Self::fta_state_dropdown(), state)
            .await
    }

    /// Continue to the check-your-answers screen
    pub async fn continue_to_summary(&self) -> SuiteResult<()> {
        self.action.click(&Self::continue_button()).await
    }
}
