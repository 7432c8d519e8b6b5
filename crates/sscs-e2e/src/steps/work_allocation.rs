//! Work-allocation scenarios: task visibility, self-assignment and
//! completion on the Tasks tab. Only the rendered task UI is asserted;
//! allocation itself belongs to the external application.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::UserRole;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;

/// Task raised for a non-compliant appeal
pub const TASK_REVIEW_NON_COMPLIANT: &str = "Review non-compliant appeal";

/// Work-allocation scenario steps
#[derive(Debug, Clone)]
pub struct WorkAllocationSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl WorkAllocationSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Seed a non-compliant case and check its review task is raised for
    /// the CTSC admin.
    pub async fn verify_non_compliant_task_raised(&self) -> SuiteResult<CaseRef> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let case = self
            .api
            .create_case(CaseType::PipNonCompliant, credentials)
            .await?;

        self.base
            .login_user_with_case_id(UserRole::CtscAdmin, &case)
            .await?;
        self.base.case_home.open_tab("Tasks").await?;
        self.base
            .tasks
            .verify_task_listed(TASK_REVIEW_NON_COMPLIANT)
            .await?;

        Ok(case)
    }

    /// Self-assign the review task and complete it; the task must leave
    /// the list once done.
    pub async fn assign_and_complete_task(&self, case: &CaseRef) -> SuiteResult<()> {
        self.base
            .login_user_with_case_id(UserRole::CtscAdmin, case)
            .await?;
        self.base.case_home.open_tab("Tasks").await?;
        self.base
            .tasks
            .assign_to_self(TASK_REVIEW_NON_COMPLIANT)
            .await?;
        self.base.tasks.mark_done().await?;
        self.base
            .tasks
            .verify_task_absent(TASK_REVIEW_NON_COMPLIANT)
            .await
    }
}
