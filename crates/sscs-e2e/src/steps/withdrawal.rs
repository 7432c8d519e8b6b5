//! Appeal-withdrawal scenario.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::UserRole;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;
use std::path::Path;

/// Summary status once the withdrawal is actioned
pub const STATUS_DORMANT: &str = "Dormant";

/// Withdrawal scenario steps
#[derive(Debug, Clone)]
pub struct WithdrawalSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl WithdrawalSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Seed a case and record an appellant withdrawal request, then
    /// assert the History row and dormant status.
    pub async fn withdraw_appeal(&self, request_document: &Path) -> SuiteResult<CaseRef> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let case = self.api.create_case(CaseType::Pip, credentials).await?;

        self.base
            .login_user_with_case_id(UserRole::TribunalCaseworker, &case)
            .await?;

        self.base.case_home.choose_event("Withdrawal request").await?;
        self.base
            .withdrawal
            .record_request("Appellant", request_document)
            .await?;
        self.base.event_summary.confirm_submission().await?;

        self.base
            .verify_history_tab_details("Withdrawal request", STATUS_DORMANT)
            .await?;
        self.base.case_home.open_tab("Summary").await?;
        self.base.summary.verify_status(STATUS_DORMANT).await?;

        Ok(case)
    }
}
