//! Judicial and admin case-event scenarios: urgent hearings,
//! adjournment, referral and withdrawal (@nightly-pipeline).

use sscs_e2e::config::SuiteConfig;
use sscs_e2e::steps::ResponseDocs;
use sscs_e2e::StepsFactory;

#[tokio::test]
#[ignore = "requires a deployed SSCS environment and Chromium (run with --features browser)"]
async fn urgent_hearing_request_flags_the_case() {
    sscs_e2e::init_tracing();
    let factory = StepsFactory::launch(SuiteConfig::from_env()).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let docs = ResponseDocs::generate_in(dir.path()).unwrap();

    factory
        .urgent_hearing()
        .request_and_grant_urgent_hearing(&docs.response)
        .await
        .unwrap();

    factory.shutdown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a deployed SSCS environment and Chromium (run with --features browser)"]
async fn adjourned_case_returns_to_not_listable() {
    sscs_e2e::init_tracing();
    let factory = StepsFactory::launch(SuiteConfig::from_env()).await.unwrap();

    factory.adjournment().adjourn_case().await.unwrap();

    factory.shutdown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a deployed SSCS environment and Chromium (run with --features browser)"]
async fn referral_raises_a_judge_review_task() {
    sscs_e2e::init_tracing();
    let factory = StepsFactory::launch(SuiteConfig::from_env()).await.unwrap();

    factory
        .referred_by_judge()
        .refer_case_to_judge("Over 300 pages")
        .await
        .unwrap();

    factory.shutdown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a deployed SSCS environment and Chromium (run with --features browser)"]
async fn withdrawal_request_sends_the_appeal_dormant() {
    sscs_e2e::init_tracing();
    let factory = StepsFactory::launch(SuiteConfig::from_env()).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let docs = ResponseDocs::generate_in(dir.path()).unwrap();

    factory
        .withdrawal()
        .withdraw_appeal(&docs.response)
        .await
        .unwrap();

    factory.shutdown().await.unwrap();
}
