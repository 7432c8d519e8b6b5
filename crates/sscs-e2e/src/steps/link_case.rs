//! Link a case scenarios: linking two appeals, and the self-link
//! validation error.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::UserRole;
use crate::content;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;
use tracing::info;

/// Link a case scenario steps
#[derive(Debug, Clone)]
pub struct LinkCaseSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl LinkCaseSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Seed two PIP cases, link the second to the first, and assert the
    /// History row and Related Appeals entry.
    pub async fn link_two_fresh_cases(&self) -> SuiteResult<(CaseRef, CaseRef)> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let first = self.api.create_case(CaseType::Pip, credentials).await?;
        let second = self.api.create_case(CaseType::Pip, credentials).await?;
        info!(first = %first.id, second = %second.id, "linking cases");

        self.base
            .login_user_with_case_id(UserRole::CtscAdmin, &first)
            .await?;

        let expected = content::link_case();
        self.base.case_home.choose_event(&expected.event_label).await?;
        self.base.link_case.verify_page_content().await?;
        self.base.link_case.add_linked_case(&second.id).await?;
        self.base.event_summary.confirm_submission().await?;

        self.base
            .verify_history_tab_details(&expected.event_label, &expected.end_state)
            .await?;

        self.base.case_home.open_tab("Related Appeals").await?;
        self.base
            .related_appeals
            .verify_linked_case(&second.hyphenated())
            .await?;

        Ok((first, second))
    }

    /// Attempt to link a case to itself and assert the validation error.
    pub async fn attempt_self_link(&self) -> SuiteResult<CaseRef> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        let case = self.api.create_case(CaseType::Pip, credentials).await?;

        self.base
            .login_user_with_case_id(UserRole::CtscAdmin, &case)
            .await?;

        let expected = content::link_case();
        self.base.case_home.choose_event(&expected.event_label).await?;
        self.base.link_case.add_linked_case(&case.id).await?;
        self.base.event_summary.confirm_submission().await?;
        self.base
            .event_summary
            .verify_validation_error(&expected.self_link_error)
            .await?;

        Ok(case)
    }
}
