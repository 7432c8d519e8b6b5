//! Case-factory acceptance checks: payload selection, case-id extraction
//! and the dormant-event timing contract.

use sscs_e2e::api::{self, CaseType, TOKEN_SETTLE_DELAY};
use sscs_e2e::config::{SuiteConfig, UserRole};
use std::str::FromStr;
use std::time::Duration;

#[test]
fn case_id_is_the_numeric_final_segment_of_the_location_header() {
    let location = "https://tribunals-api.example.net/api/appeals/1748523986243150";
    let id = api::case_id_from_location(location).expect("location should yield an id");
    assert_eq!(id, "1748523986243150");
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn noncompliant_case_gets_a_freshly_generated_valid_nino() {
    let payload = api::build_payload(CaseType::PipNonCompliant).unwrap();
    let nino = payload["appellant"]["nino"].as_str().unwrap();
    assert!(api::nino::is_valid_format(nino), "invalid NINO: {nino}");

    // Fresh means fresh: a second build never reuses the number.
    let second = api::build_payload(CaseType::PipNonCompliant).unwrap();
    assert_ne!(nino, second["appellant"]["nino"].as_str().unwrap());
}

#[test]
fn dormant_event_waits_three_seconds_after_token_retrieval() {
    assert_eq!(TOKEN_SETTLE_DELAY, Duration::from_secs(3));
}

#[test]
fn unrecognized_case_type_fails_before_anything_is_posted() {
    let err = CaseType::from_str("IIDB").unwrap_err();
    assert!(matches!(
        err,
        sscs_e2e::SuiteError::UnknownCaseType { ref case_type } if case_type == "IIDB"
    ));
}

#[test]
fn every_supported_case_type_has_a_parseable_payload() {
    for case_type in CaseType::all() {
        let payload = api::build_payload(case_type)
            .unwrap_or_else(|e| panic!("{case_type}: {e}"));
        assert!(
            payload["benefitType"]["code"].is_string(),
            "{case_type} has no benefit code"
        );
    }
}

#[tokio::test]
#[ignore = "requires a deployed tribunals API and IDAM stack"]
async fn creating_a_pip_case_returns_a_numeric_case_id() {
    sscs_e2e::init_tracing();
    let config = SuiteConfig::from_env();
    let api = api::CaseApiClient::new(&config);
    let credentials = config.credentials_for(UserRole::Superuser).unwrap();

    let case = api.create_case(CaseType::Pip, credentials).await.unwrap();
    assert!(!case.id.is_empty());
    assert!(case.id.chars().all(|c| c.is_ascii_digit()));

    api.perform_appeal_dormant(&case, credentials).await.unwrap();
}
