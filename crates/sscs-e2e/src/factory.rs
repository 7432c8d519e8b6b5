//! The steps factory: wires every scenario-step type to one shared
//! browser session, configuration and API client. Spec files ask it for
//! the steps they need and nothing else.

use crate::action::WebAction;
use crate::api::{CaseApiClient, CaseType};
use crate::browser::Browser;
use crate::config::{SuiteConfig, UserRole};
use crate::fixture::CaseFixture;
use crate::result::SuiteResult;
use crate::steps::{
    AdjournmentSteps, BaseSteps, BundleSteps, LinkCaseSteps, ReferredByJudgeSteps,
    UploadResponseSteps, UrgentHearingSteps, WithdrawalSteps, WorkAllocationSteps,
};
use std::fmt;

/// CI pipeline tags scenarios are filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioTag {
    /// Full overnight run
    NightlyPipeline,
    /// Work-allocation regression set
    WorkAllocation,
    /// Smoke set run against preview environments
    PreviewRegression,
}

impl ScenarioTag {
    /// Tag string as used by the pipelines
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NightlyPipeline => "@nightly-pipeline",
            Self::WorkAllocation => "@work-allocation",
            Self::PreviewRegression => "@preview-regression",
        }
    }
}

impl fmt::Display for ScenarioTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One browser session plus everything the scenarios hang off it
#[derive(Debug)]
pub struct StepsFactory {
    browser: Browser,
    base: BaseSteps,
    api: CaseApiClient,
}

impl StepsFactory {
    /// Launch the browser and build the shared scaffolding
    pub async fn launch(config: SuiteConfig) -> SuiteResult<Self> {
        let browser = Browser::launch(config.browser.clone()).await?;
        let page = browser.new_page().await?;
        let action = WebAction::new(page);
        let api = CaseApiClient::new(&config);
        let base = BaseSteps::new(action, config);
        Ok(Self { browser, base, api })
    }

    /// The shared scaffolding, for scenarios not covered by a step type
    #[must_use]
    pub fn base(&self) -> &BaseSteps {
        &self.base
    }

    /// Upload response scenario steps
    #[must_use]
    pub fn upload_response(&self) -> UploadResponseSteps {
        UploadResponseSteps::new(self.base.clone(), self.api.clone())
    }

    /// Link a case scenario steps
    #[must_use]
    pub fn link_case(&self) -> LinkCaseSteps {
        LinkCaseSteps::new(self.base.clone(), self.api.clone())
    }

    /// Urgent hearing scenario steps
    #[must_use]
    pub fn urgent_hearing(&self) -> UrgentHearingSteps {
        UrgentHearingSteps::new(self.base.clone(), self.api.clone())
    }

    /// Adjournment scenario steps
    #[must_use]
    pub fn adjournment(&self) -> AdjournmentSteps {
        AdjournmentSteps::new(self.base.clone(), self.api.clone())
    }

    /// Referred-by-judge scenario steps
    #[must_use]
    pub fn referred_by_judge(&self) -> ReferredByJudgeSteps {
        ReferredByJudgeSteps::new(self.base.clone(), self.api.clone())
    }

    /// Withdrawal scenario steps
    #[must_use]
    pub fn withdrawal(&self) -> WithdrawalSteps {
        WithdrawalSteps::new(self.base.clone(), self.api.clone())
    }

    /// Work-allocation scenario steps
    #[must_use]
    pub fn work_allocation(&self) -> WorkAllocationSteps {
        WorkAllocationSteps::new(self.base.clone(), self.api.clone())
    }

    /// Bundling scenario steps
    #[must_use]
    pub fn bundle(&self) -> BundleSteps {
        BundleSteps::new(self.base.clone(), self.api.clone())
    }

    /// A case fixture seeding the given type as the superuser
    pub fn case_fixture(&self, case_type: CaseType) -> SuiteResult<CaseFixture> {
        let credentials = self.base.config.credentials_for(UserRole::Superuser)?;
        Ok(CaseFixture::new(
            self.api.clone(),
            credentials.clone(),
            case_type,
        ))
    }

    /// Close the browser session
    pub async fn shutdown(self) -> SuiteResult<()> {
        self.browser.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_render_with_their_at_prefix() {
        assert_eq!(ScenarioTag::NightlyPipeline.as_str(), "@nightly-pipeline");
        assert_eq!(ScenarioTag::WorkAllocation.to_string(), "@work-allocation");
        assert_eq!(
            ScenarioTag::PreviewRegression.as_str(),
            "@preview-regression"
        );
    }

    #[cfg(not(feature = "browser"))]
    #[tokio::test]
    async fn factory_wires_every_step_type_to_one_session() {
        let factory = StepsFactory::launch(SuiteConfig::default()).await.unwrap();
        let _ = factory.upload_response();
        let _ = factory.link_case();
        let _ = factory.urgent_hearing();
        let _ = factory.adjournment();
        let _ = factory.referred_by_judge();
        let _ = factory.withdrawal();
        let _ = factory.work_allocation();
        let _ = factory.bundle();
        let fixture = factory.case_fixture(CaseType::Pip).unwrap();
        assert_eq!(fixture.state(), crate::fixture::FixtureState::Registered);
        factory.shutdown().await.unwrap();
    }
}
