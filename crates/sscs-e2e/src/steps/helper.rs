//! Cross-cutting flow pieces reused by several scenarios.

use crate::content;
use crate::result::SuiteResult;
use crate::steps::base::BaseSteps;
use std::path::{Path, PathBuf};

/// The FTA state chosen when a response is uploaded
pub const FTA_STATE_RESPONSE_RECEIVED: &str = "Response received";

/// Documents attached during an upload-response flow
#[derive(Debug, Clone)]
pub struct ResponseDocs {
    /// FTA response document
    pub response: PathBuf,
    /// FTA evidence bundle
    pub evidence: PathBuf,
}

impl ResponseDocs {
    /// Use the given files as response and evidence
    #[must_use]
    pub fn new(response: impl Into<PathBuf>, evidence: impl Into<PathBuf>) -> Self {
        Self {
            response: response.into(),
            evidence: evidence.into(),
        }
    }

    /// Write a pair of minimal PDF documents into a directory
    pub fn generate_in(dir: &Path) -> SuiteResult<Self> {
        let response = dir.join("fta-response.pdf");
        let evidence = dir.join("fta-evidence.pdf");
        std::fs::write(&response, minimal_pdf())?;
        std::fs::write(&evidence, minimal_pdf())?;
        Ok(Self { response, evidence })
    }
}

/// Smallest document the application's upload validation accepts
fn minimal_pdf() -> &'static [u8] {
    b"%PDF-1.4\n1 0 obj<</Type/Catalog/Pages 2 0 R>>endobj\n2 0 obj<</Type/Pages/Kids[]/Count 0>>endobj\ntrailer<</Root 1 0 R>>\n%%EOF\n"
}

/// Shared multi-page sequences
#[derive(Debug, Clone)]
pub struct StepsHelper;

impl StepsHelper {
    /// The repeated "upload response" flow: trigger the event, check the
    /// page, attach documents, answer further-information, set the FTA
    /// state, and submit through check-your-answers.
    pub async fn perform_upload_response(
        base: &BaseSteps,
        further_info: bool,
        docs: &ResponseDocs,
    ) -> SuiteResult<()> {
        base.case_home.choose_event("Upload response").await?;
        base.upload_response.verify_page_content().await?;
        base.upload_response
            .upload_response_docs(&docs.response, &docs.evidence)
            .await?;
        base.upload_response.select_further_info(further_info).await?;
        base.upload_response
            .select_fta_state(FTA_STATE_RESPONSE_RECEIVED)
            .await?;
        base.upload_response.continue_to_summary().await?;
        base.event_summary.confirm_submission().await?;
        base.event_summary
            .verify_confirmation(&content::upload_response().success_banner)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_docs_are_parseable_pdf_headers() {
        let dir = tempfile::tempdir().unwrap();
        let docs = ResponseDocs::generate_in(dir.path()).unwrap();
        let bytes = std::fs::read(&docs.response).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(docs.evidence.exists());
    }
}
