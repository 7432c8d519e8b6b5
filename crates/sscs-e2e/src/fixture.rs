//! Per-scenario case fixture.
//!
//! A scenario owns exactly one `ScenarioContext`; the case id lives there
//! and nowhere else. Setup seeds the case through the API, teardown fires
//! the dormant event best-effort so abandoned test data does not pile up
//! in the environment.

use crate::api::{CaseApiClient, CaseRef, CaseType};
use crate::config::Credentials;
use crate::result::{SuiteError, SuiteResult};
use tracing::warn;
use uuid::Uuid;

/// State of a case fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureState {
    /// Created but no case seeded yet
    Registered,
    /// Case seeded and usable
    SetUp,
    /// Case sent dormant
    TornDown,
    /// Seeding failed
    Failed,
}

/// Everything a scenario needs to know about its seeded case
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    /// Unique id for this scenario run
    pub run_id: Uuid,
    /// Case type the fixture seeded
    pub case_type: CaseType,
    /// The seeded case
    pub case: CaseRef,
}

/// Seeds one case on setup and retires it on teardown
#[derive(Debug, Clone)]
pub struct CaseFixture {
    api: CaseApiClient,
    credentials: Credentials,
    case_type: CaseType,
    state: FixtureState,
    context: Option<ScenarioContext>,
}

impl CaseFixture {
    /// Create a fixture for a case type
    #[must_use]
    pub fn new(api: CaseApiClient, credentials: Credentials, case_type: CaseType) -> Self {
        Self {
            api,
            credentials,
            case_type,
            state: FixtureState::Registered,
            context: None,
        }
    }

    /// Current fixture state
    #[must_use]
    pub const fn state(&self) -> FixtureState {
        self.state
    }

    /// The seeded context, if setup has run
    #[must_use]
    pub fn context(&self) -> Option<&ScenarioContext> {
        self.context.as_ref()
    }

    /// Seed the case and build the scenario context
    pub async fn setup(&mut self) -> SuiteResult<&ScenarioContext> {
        if self.state == FixtureState::SetUp {
            return self.context.as_ref().ok_or_else(|| SuiteError::Config {
                message: "fixture marked set up without a context".to_string(),
            });
        }

        match self.api.create_case(self.case_type, &self.credentials).await {
            Ok(case) => {
                self.state = FixtureState::SetUp;
                self.context = Some(ScenarioContext {
                    run_id: Uuid::new_v4(),
                    case_type: self.case_type,
                    case,
                });
                Ok(self.context.as_ref().expect("context just set"))
            }
            Err(e) => {
                self.state = FixtureState::Failed;
                Err(e)
            }
        }
    }

    /// Retire the seeded case. Best-effort: a rejected dormant event is
    /// logged, not propagated, so teardown never masks a scenario result.
    pub async fn teardown(&mut self) {
        if self.state != FixtureState::SetUp {
            return;
        }
        if let Some(context) = &self.context {
            if let Err(e) = self
                .api
                .perform_appeal_dormant(&context.case, &self.credentials)
                .await
            {
                warn!(case_id = %context.case.id, error = %e, "fixture teardown failed");
            }
        }
        self.state = FixtureState::TornDown;
    }
}
