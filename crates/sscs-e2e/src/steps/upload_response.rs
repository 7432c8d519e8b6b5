//! Upload response scenario: the FTA responder uploads the response
//! bundle, a caseworker reviews it, and the case becomes listable.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::UserRole;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;
use crate::steps::helper::{ResponseDocs, StepsHelper};
use tracing::info;

/// Summary status once review is complete with no interlocutory referral
pub const STATUS_READY_TO_LIST: &str = "Ready to list";

/// Upload response scenario steps
#[derive(Debug, Clone)]
pub struct UploadResponseSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl UploadResponseSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Seed a PIP case and run the upload-response flow as the FTA user.
    /// Returns the case for follow-on steps.
    pub async fn upload_response_with_further_info(
        &self,
        further_info: bool,
        docs: &ResponseDocs,
    ) -> SuiteResult<CaseRef> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let case = self.api.create_case(CaseType::Pip, credentials).await?;
        info!(case_id = %case.id, "upload response scenario starting");

        self.base
            .login_user_with_case_id(UserRole::FtaUser, &case)
            .await?;
        StepsHelper::perform_upload_response(&self.base, further_info, docs).await?;
        Ok(case)
    }

    /// Review the uploaded response as a caseworker with no interlocutory
    /// referral, then check the case reads "Ready to list".
    pub async fn review_response_without_interloc(&self, case: &CaseRef) -> SuiteResult<()> {
        self.base
            .login_user_with_case_id(UserRole::TribunalCaseworker, case)
            .await?;
        self.base.case_home.choose_event("Response reviewed").await?;
        self.base
            .response_reviewed
            .select_interloc_required(false)
            .await?;
        self.base.event_summary.confirm_submission().await?;

        self.base.case_home.open_tab("Summary").await?;
        self.base.summary.verify_status(STATUS_READY_TO_LIST).await
    }

    /// The full journey: upload with further information, review with
    /// interloc = No, assert "Ready to list".
    pub async fn upload_and_review_to_ready_to_list(
        &self,
        docs: &ResponseDocs,
    ) -> SuiteResult<CaseRef> {
        let case = self.upload_response_with_further_info(true, docs).await?;
        self.review_response_without_interloc(&case).await?;
        Ok(case)
    }
}
