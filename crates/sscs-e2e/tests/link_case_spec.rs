//! Link a case scenarios (@nightly-pipeline).

use sscs_e2e::api::CaseRef;
use sscs_e2e::config::SuiteConfig;
use sscs_e2e::content;
use sscs_e2e::StepsFactory;

#[test]
fn related_appeals_reference_is_the_hyphenated_case_id() {
    let case = CaseRef::new("1748523986243150");
    assert_eq!(case.hyphenated(), "1748-5239-8624-3150");
}

#[test]
fn self_link_error_text_matches_the_application() {
    assert_eq!(
        content::link_case().self_link_error,
        "You can't link the case to itself, please correct"
    );
}

#[tokio::test]
#[ignore = "requires a deployed SSCS environment and Chromium (run with --features browser)"]
async fn linking_two_cases_updates_history_and_related_appeals() {
    sscs_e2e::init_tracing();
    let factory = StepsFactory::launch(SuiteConfig::from_env()).await.unwrap();

    let steps = factory.link_case();
    let (first, second) = steps.link_two_fresh_cases().await.unwrap();
    assert_ne!(first, second);

    factory.shutdown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a deployed SSCS environment and Chromium (run with --features browser)"]
async fn linking_a_case_to_itself_is_rejected() {
    sscs_e2e::init_tracing();
    let factory = StepsFactory::launch(SuiteConfig::from_env()).await.unwrap();

    let steps = factory.link_case();
    steps.attempt_self_link().await.unwrap();

    factory.shutdown().await.unwrap();
}

#[cfg(not(feature = "browser"))]
mod scripted {
    use sscs_e2e::config::SuiteConfig;
    use sscs_e2e::steps::BaseSteps;
    use sscs_e2e::{LocatorOptions, MockAction, Page, Selector, WebAction};
    use std::time::Duration;

    #[tokio::test]
    async fn history_verification_opens_the_tab_then_checks_row_and_end_state() {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(200))
                .with_poll_interval(Duration::from_millis(5)),
        );
        let base = BaseSteps::new(action, SuiteConfig::default());
        {
            let mock = base.action.page().await;
            mock.stub_visible(&Selector::role("tab", "History"));
            mock.stub_visible(&Selector::css_with_text(
                "table.EventLogTable tbody tr:first-child td",
                "Link a case",
            ));
            mock.stub_visible(&Selector::css_with_text(
                "table.EventLogDetails td",
                "With FTA",
            ));
        }

        base.verify_history_tab_details("Link a case", "With FTA")
            .await
            .unwrap();

        let actions = base.action.page().await.actions();
        assert_eq!(
            actions,
            vec![MockAction::Click(
                Selector::role("tab", "History").to_string()
            )]
        );
    }
}
