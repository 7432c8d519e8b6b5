//! Urgent hearing scenario: upload the request document, mark the case
//! urgent, and check the header flag.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::UserRole;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;
use std::path::Path;

/// Urgent hearing scenario steps
#[derive(Debug, Clone)]
pub struct UrgentHearingSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl UrgentHearingSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Seed a case, file an urgent-hearing request, mark the case urgent,
    /// and assert the flag and History row.
    pub async fn request_and_grant_urgent_hearing(
        &self,
        request_document: &Path,
    ) -> SuiteResult<CaseRef> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let case = self.api.create_case(CaseType::Pip, credentials).await?;

        self.base
            .login_user_with_case_id(UserRole::CtscAdmin, &case)
            .await?;

        self.base
            .case_home
            .choose_event("Upload urgent hearing request")
            .await?;
        self.base
            .urgent_hearing
            .upload_request_document(request_document)
            .await?;
        self.base.event_summary.confirm_submission().await?;

        self.base.case_home.choose_event("Mark case as urgent").await?;
        self.base.urgent_hearing.mark_case_urgent(true).await?;
        self.base.event_summary.confirm_submission().await?;

        self.base.urgent_hearing.verify_urgent_flag().await?;
        self.base
            .verify_history_tab_details("Mark case as urgent", "With FTA")
            .await?;

        Ok(case)
    }
}
