//! Bundling scenario: create a bundle from an uploaded response and
//! check the stitched result on the Bundles tab.

use crate::api::{CaseApiClient, CaseRef};
use crate::config::UserRole;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;
use crate::steps::helper::ResponseDocs;
use crate::steps::upload_response::UploadResponseSteps;

/// Bundle configuration used for standard SSCS bundles
pub const DEFAULT_BUNDLE_CONFIG: &str = "sscs-bundle-config.yaml";

/// Bundling scenario steps
#[derive(Debug, Clone)]
pub struct BundleSteps {
    base: BaseSteps,
    api: CaseApiClient,
}

impl BundleSteps {
    /// Build over shared scaffolding
    #[must_use]
    pub fn new(base: BaseSteps, api: CaseApiClient) -> Self {
        Self { base, api }
    }

    /// Upload a response, then create a bundle as a caseworker and assert
    /// the Bundles tab shows the stitched document.
    pub async fn create_bundle_after_response(
        &self,
        docs: &ResponseDocs,
    ) -> SuiteResult<CaseRef> {
        let upload = UploadResponseSteps::new(self.base.clone(), self.api.clone());
        let case = upload.upload_response_with_further_info(false, docs).await?;

        self.base
            .login_user_with_case_id(UserRole::TribunalCaseworker, &case)
            .await?;
        self.base.case_home.choose_event("Create a bundle").await?;
        self.base.event_summary.confirm_submission().await?;

        self.base.case_home.open_tab("Bundles").await?;
        self.base
            .bundles
            .verify_bundle_config(DEFAULT_BUNDLE_CONFIG)
            .await?;
        self.base.bundles.verify_stitch_status("DONE").await?;

        Ok(case)
    }
}
