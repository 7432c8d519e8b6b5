//! Adjournment scenario: a judge adjourns a hearing and the case drops
//! back to "Not listable" until re-listed.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::UserRole;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;

/// Summary status after an adjournment
pub const STATUS_NOT_LISTABLE: &str = "Not listable";

/// Adjournment scenario steps
#[derive(Debug, Clone)]
pub struct AdjournmentSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl AdjournmentSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Seed a case and adjourn it as a judge, generating the notice and
    /// re-listing face to face with the previous panel allowed back.
    pub async fn adjourn_case(&self) -> SuiteResult<CaseRef> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let case = self.api.create_case(CaseType::Pip, credentials).await?;

        self.base
            .login_user_with_case_id(UserRole::Judge, &case)
            .await?;

        self.base.case_home.choose_event("Adjourn case").await?;
        self.base.adjournment.select_generate_notice(true).await?;
        self.base
            .adjournment
            .select_next_hearing_type("Face to face")
            .await?;
        self.base
            .adjournment
            .select_panel_members_excluded(false)
            .await?;
        self.base.event_summary.confirm_submission().await?;

        self.base
            .verify_history_tab_details("Adjourn case", STATUS_NOT_LISTABLE)
            .await?;
        self.base.case_home.open_tab("Summary").await?;
        self.base.summary.verify_status(STATUS_NOT_LISTABLE).await?;

        Ok(case)
    }
}
