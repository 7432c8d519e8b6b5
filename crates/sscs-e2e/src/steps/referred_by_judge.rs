//! Interlocutory referral scenario: a caseworker refers the case to a
//! judge and the review lands in the judge's queue.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::UserRole;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;

/// Referred-by-judge scenario steps
#[derive(Debug, Clone)]
pub struct ReferredByJudgeSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl ReferredByJudgeSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Seed a case, refer it for judge review, then confirm as the judge
    /// that the referral task is visible on the Tasks tab.
    pub async fn refer_case_to_judge(&self, reason: &str) -> SuiteResult<CaseRef> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let case = self.api.create_case(CaseType::Pip, credentials).await?;

        self.base
            .login_user_with_case_id(UserRole::TribunalCaseworker, &case)
            .await?;

        self.base.case_home.choose_event("Refer case to judge").await?;
        self.base
            .referral
            .record_referral(reason, "Referred for directions")
            .await?;
        self.base.event_summary.confirm_submission().await?;
        self.base
            .verify_history_tab_details("Refer case to judge", "With FTA")
            .await?;

        self.base
            .login_user_with_case_id(UserRole::Judge, &case)
            .await?;
        self.base.case_home.open_tab("Tasks").await?;
        self.base
            .tasks
            .verify_task_listed("Review referred by judge")
            .await?;

        Ok(case)
    }
}
