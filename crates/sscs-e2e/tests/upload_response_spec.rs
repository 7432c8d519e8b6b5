//! Upload response scenarios (@nightly-pipeline).
//!
//! The deployed-environment journey is ignored by default; the scripted
//! flow below exercises the exact page-object sequence offline.

use sscs_e2e::config::SuiteConfig;
use sscs_e2e::steps::ResponseDocs;
use sscs_e2e::StepsFactory;

#[tokio::test]
#[ignore = "requires a deployed SSCS environment and Chromium (run with --features browser)"]
async fn upload_response_then_review_reads_ready_to_list() {
    sscs_e2e::init_tracing();
    let factory = StepsFactory::launch(SuiteConfig::from_env()).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let docs = ResponseDocs::generate_in(dir.path()).unwrap();

    let steps = factory.upload_response();
    let case = steps.upload_and_review_to_ready_to_list(&docs).await.unwrap();
    assert!(!case.id.is_empty());

    factory.shutdown().await.unwrap();
}

#[cfg(not(feature = "browser"))]
mod scripted {
    use super::*;
    use sscs_e2e::content;
    use sscs_e2e::steps::{BaseSteps, StepsHelper};
    use sscs_e2e::{LocatorOptions, MockAction, Page, Selector, WebAction};
    use std::time::Duration;

    fn scripted_base() -> BaseSteps {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(200))
                .with_poll_interval(Duration::from_millis(5)),
        );
        BaseSteps::new(action, SuiteConfig::default())
    }

    async fn stub_upload_response_screens(base: &BaseSteps) {
        let mock = base.action.page().await;
        mock.stub_visible(&Selector::css("select#next-step"));
        mock.stub_visible(&Selector::role("button", "Go"));
        let expected = content::upload_response();
        mock.stub_visible(&Selector::text(&expected.title));
        for label in &expected.labels {
            mock.stub_visible(&Selector::text(label));
        }
        mock.stub_visible(&Selector::css("input#dwpResponseDocument"));
        mock.stub_visible(&Selector::css("input#dwpEvidenceBundleDocument"));
        mock.stub_visible(&Selector::css("input#dwpFurtherInfo_Yes"));
        mock.stub_visible(&Selector::css("select#dwpState"));
        mock.stub_visible(&Selector::role("button", "Continue"));
        mock.stub_visible(&Selector::role("button", "Submit"));
        mock.stub_text(
            &Selector::css("div.alert-message"),
            expected.success_banner.clone(),
        );
    }

    #[tokio::test]
    async fn the_upload_flow_triggers_event_uploads_and_submits_in_order() {
        let base = scripted_base();
        stub_upload_response_screens(&base).await;

        let dir = tempfile::tempdir().unwrap();
        let docs = ResponseDocs::generate_in(dir.path()).unwrap();

        StepsHelper::perform_upload_response(&base, true, &docs)
            .await
            .unwrap();

        let actions = base.action.page().await.actions();
        assert!(matches!(
            &actions[0],
            MockAction::Select { option, .. } if option == "Upload response"
        ));
        let uploads = actions
            .iter()
            .filter(|a| matches!(a, MockAction::Upload { .. }))
            .count();
        assert_eq!(uploads, 2, "response and evidence bundle both attached");
        assert!(matches!(
            &actions[actions.len() - 1],
            MockAction::Click(selector) if selector.contains("Submit")
        ));
    }

    #[tokio::test]
    async fn a_missing_page_label_fails_the_flow_before_any_upload() {
        let base = scripted_base();
        {
            let mock = base.action.page().await;
            mock.stub_visible(&Selector::css("select#next-step"));
            mock.stub_visible(&Selector::role("button", "Go"));
            // Event page content deliberately unstubbed.
        }

        let dir = tempfile::tempdir().unwrap();
        let docs = ResponseDocs::generate_in(dir.path()).unwrap();

        let err = StepsHelper::perform_upload_response(&base, true, &docs)
            .await
            .unwrap_err();
        assert!(matches!(err, sscs_e2e::SuiteError::Assertion { .. }));

        let actions = base.action.page().await.actions();
        assert!(
            !actions.iter().any(|a| matches!(a, MockAction::Upload { .. })),
            "no document may be attached once the content check fails"
        );
    }
}
