//! Case seeding against the tribunals API, bypassing the UI.
//!
//! Each scenario starts from a case created here: a payload template is
//! selected by case type, stamped with a fresh NINO and MRN date, and
//! POSTed with IDAM-issued tokens. The new case id is the trailing path
//! segment of the response's `Location` header.

use crate::api::idam::IdamClient;
use crate::api::nino;
use crate::config::{Credentials, SuiteConfig};
use crate::result::{SuiteError, SuiteResult};
use chrono::{Duration as ChronoDuration, Utc};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{info, warn};

/// Settle delay between token issuance and the dormant event.
/// Firing immediately is rejected by the API while the grant propagates.
pub const TOKEN_SETTLE_DELAY: Duration = Duration::from_secs(3);

/// MRN date stamped into compliant payloads (one month ago)
const MRN_AGE_DAYS: i64 = 30;

/// MRN date stamped into non-compliant payloads (past the 13-month limit)
const LATE_MRN_AGE_DAYS: i64 = 420;

/// Benefit-appeal payload templates the factory can seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// Personal Independence Payment
    Pip,
    /// Universal Credit
    Uc,
    /// Employment and Support Allowance
    Esa,
    /// Child Support
    ChildSupport,
    /// Tax Credit
    TaxCredit,
    /// PIP with special listing requirements
    PipSandL,
    /// DLA with special listing requirements
    DlaSandL,
    /// UC with special listing requirements
    UcSandL,
    /// PIP with representative and interpreter, special listing
    PipRepInterSandL,
    /// PIP with representative, special listing
    PipRepSandL,
    /// PIP missing its MRN date (incomplete application)
    PipIncomplete,
    /// PIP with a late MRN and no reason (non-compliant)
    PipNonCompliant,
    /// PIP with Welsh language preference
    WelshPip,
    /// Infected Blood Compensation
    Ibc,
}

impl CaseType {
    /// All seedable case types
    #[must_use]
    pub fn all() -> [CaseType; 14] {
        [
            Self::Pip,
            Self::Uc,
            Self::Esa,
            Self::ChildSupport,
            Self::TaxCredit,
            Self::PipSandL,
            Self::DlaSandL,
            Self::UcSandL,
            Self::PipRepInterSandL,
            Self::PipRepSandL,
            Self::PipIncomplete,
            Self::PipNonCompliant,
            Self::WelshPip,
            Self::Ibc,
        ]
    }

    /// Wire tag for this case type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pip => "PIP",
            Self::Uc => "UC",
            Self::Esa => "ESA",
            Self::ChildSupport => "CHILDSUPPORT",
            Self::TaxCredit => "TAX CREDIT",
            Self::PipSandL => "PIPSANDL",
            Self::DlaSandL => "DLASANDL",
            Self::UcSandL => "UCSANDL",
            Self::PipRepInterSandL => "PIPREPINTERSANDL",
            Self::PipRepSandL => "PIPREPSANDL",
            Self::PipIncomplete => "PIPINCOMPLETE",
            Self::PipNonCompliant => "PIPNONCOMPLIANT",
            Self::WelshPip => "WELSHPIP",
            Self::Ibc => "IBC",
        }
    }

    /// Raw payload template for this case type
    const fn template(&self) -> &'static str {
        match self {
            Self::Pip => include_str!("../../fixtures/payloads/pip.json"),
            Self::Uc => include_str!("../../fixtures/payloads/uc.json"),
            Self::Esa => include_str!("../../fixtures/payloads/esa.json"),
            Self::ChildSupport => include_str!("../../fixtures/payloads/childsupport.json"),
            Self::TaxCredit => include_str!("../../fixtures/payloads/taxcredit.json"),
            Self::PipSandL => include_str!("../../fixtures/payloads/pipsandl.json"),
            Self::DlaSandL => include_str!("../../fixtures/payloads/dlasandl.json"),
            Self::UcSandL => include_str!("../../fixtures/payloads/ucsandl.json"),
            Self::PipRepInterSandL => {
                include_str!("../../fixtures/payloads/piprepintersandl.json")
            }
            Self::PipRepSandL => include_str!("../../fixtures/payloads/piprepsandl.json"),
            Self::PipIncomplete => include_str!("../../fixtures/payloads/pipincomplete.json"),
            Self::PipNonCompliant => include_str!("../../fixtures/payloads/pipnoncompliant.json"),
            Self::WelshPip => include_str!("../../fixtures/payloads/welshpip.json"),
            Self::Ibc => include_str!("../../fixtures/payloads/ibc.json"),
        }
    }
}

impl FromStr for CaseType {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SuiteError::UnknownCaseType {
                case_type: s.to_string(),
            })
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a seeded case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRef {
    /// Case id as issued by the API
    pub id: String,
}

impl CaseRef {
    /// Create a case reference
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Whether the id has the 16-digit shape the application issues
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        static CASE_ID_RE: OnceLock<Regex> = OnceLock::new();
        CASE_ID_RE
            .get_or_init(|| Regex::new(r"^\d{16}$").expect("case id pattern compiles"))
            .is_match(&self.id)
    }

    /// The 16-digit reference in the `1234-5678-9012-3456` form the
    /// application renders on the Related Appeals tab.
    #[must_use]
    pub fn hyphenated(&self) -> String {
        let mut out = String::with_capacity(self.id.len() + 3);
        for (i, c) in self.id.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push('-');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for CaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Extract the case id from a `Location` header value: its final
/// non-empty path segment.
#[must_use]
pub fn case_id_from_location(location: &str) -> Option<String> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
}

/// Render a payload template: substitute the NINO and MRN date
/// placeholders and parse the result.
pub fn build_payload(case_type: CaseType) -> SuiteResult<serde_json::Value> {
    let today = Utc::now().date_naive();
    let mrn_date = (today - ChronoDuration::days(MRN_AGE_DAYS)).to_string();
    let late_mrn_date = (today - ChronoDuration::days(LATE_MRN_AGE_DAYS)).to_string();

    let rendered = case_type
        .template()
        .replace("{{nino}}", &nino::generate())
        .replace("{{mrn_date}}", &mrn_date)
        .replace("{{mrn_date_late}}", &late_mrn_date);

    Ok(serde_json::from_str(&rendered)?)
}

/// Client for the tribunals case API
#[derive(Debug, Clone)]
pub struct CaseApiClient {
    http: reqwest::Client,
    tribunals_api_uri: String,
    idam: IdamClient,
}

impl CaseApiClient {
    /// Build a client from the suite configuration
    #[must_use]
    pub fn new(config: &SuiteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            tribunals_api_uri: config.tribunals_api_uri.clone(),
            idam: IdamClient::new(config.idam_api_url.clone()),
        }
    }

    /// Seed a case of the given type and return its reference.
    pub async fn create_case(
        &self,
        case_type: CaseType,
        credentials: &Credentials,
    ) -> SuiteResult<CaseRef> {
        let tokens = self.idam.sign_in(credentials).await?;
        let payload = build_payload(case_type)?;

        info!(%case_type, "creating case via tribunals API");

        let response = self
            .http
            .post(format!("{}/api/appeals", self.tribunals_api_uri))
            .bearer_auth(&tokens.access_token)
            .header("ServiceAuthorization", &tokens.service_token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| SuiteError::CaseApi {
                message: format!("case creation for {case_type} failed: {e}"),
            })?;

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(SuiteError::MissingLocationHeader)?;

        let id = case_id_from_location(location).ok_or(SuiteError::MissingLocationHeader)?;
        let case = CaseRef::new(id);
        if !case.is_well_formed() {
            warn!(case_id = %case.id, "case id has an unexpected shape");
        }
        info!(case_id = %case.id, "case created");
        Ok(case)
    }

    /// Fire the `appealDormant` event to retire a seeded case.
    ///
    /// Always waits [`TOKEN_SETTLE_DELAY`] after token retrieval before
    /// firing, regardless of system load. No retry.
    pub async fn perform_appeal_dormant(
        &self,
        case: &CaseRef,
        credentials: &Credentials,
    ) -> SuiteResult<()> {
        let tokens = self.idam.sign_in(credentials).await?;
        tokio::time::sleep(TOKEN_SETTLE_DELAY).await;

        info!(case_id = %case.id, "sending case dormant");

        let result = self
            .http
            .post(format!(
                "{}/api/appeals/{}/events",
                self.tribunals_api_uri, case.id
            ))
            .bearer_auth(&tokens.access_token)
            .header("ServiceAuthorization", &tokens.service_token)
            .json(&serde_json::json!({ "event": "appealDormant" }))
            .send()
            .await?
            .error_for_status();

        if let Err(e) = result {
            warn!(case_id = %case.id, error = %e, "dormant event rejected");
            return Err(SuiteError::CaseApi {
                message: format!("dormant event for case {case} failed: {e}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod case_type_tests {
        use super::*;

        #[test]
        fn every_wire_tag_round_trips() {
            for case_type in CaseType::all() {
                let parsed: CaseType = case_type.as_str().parse().unwrap();
                assert_eq!(parsed, case_type);
            }
        }

        #[test]
        fn unknown_case_type_is_a_typed_error_not_a_payload() {
            let result = CaseType::from_str("NONSENSE");
            match result {
                Err(SuiteError::UnknownCaseType { case_type }) => {
                    assert_eq!(case_type, "NONSENSE");
                }
                other => panic!("expected UnknownCaseType, got {other:?}"),
            }
        }

        #[test]
        fn tax_credit_tag_contains_a_space() {
            assert_eq!(CaseType::TaxCredit.as_str(), "TAX CREDIT");
            assert_eq!("TAX CREDIT".parse::<CaseType>().unwrap(), CaseType::TaxCredit);
        }
    }

    mod payload_tests {
        use super::*;

        #[test]
        fn pip_payload_gets_a_fresh_valid_nino() {
            let payload = build_payload(CaseType::Pip).unwrap();
            let nino_value = payload["appellant"]["nino"].as_str().unwrap();
            assert!(
                crate::api::nino::is_valid_format(nino_value),
                "bad NINO: {nino_value}"
            );
        }

        #[test]
        fn noncompliant_payload_gets_a_fresh_valid_nino() {
            let payload = build_payload(CaseType::PipNonCompliant).unwrap();
            let nino_value = payload["appellant"]["nino"].as_str().unwrap();
            assert!(crate::api::nino::is_valid_format(nino_value));
        }

        #[test]
        fn two_payloads_never_share_a_nino() {
            let first = build_payload(CaseType::Pip).unwrap();
            let second = build_payload(CaseType::Pip).unwrap();
            assert_ne!(
                first["appellant"]["nino"], second["appellant"]["nino"],
                "seeded appellants must be distinct"
            );
        }

        #[test]
        fn mrn_dates_are_substituted_not_left_as_placeholders() {
            for case_type in CaseType::all() {
                let payload = build_payload(case_type).unwrap();
                let text = payload.to_string();
                assert!(!text.contains("{{"), "{case_type} left a placeholder");
            }
        }

        #[test]
        fn incomplete_payload_has_no_mrn_date() {
            let payload = build_payload(CaseType::PipIncomplete).unwrap();
            assert!(payload["mrn"]["date"].is_null());
            assert!(payload["mrn"]["dwpIssuingOffice"].is_string());
        }

        #[test]
        fn noncompliant_mrn_is_older_than_thirteen_months() {
            let payload = build_payload(CaseType::PipNonCompliant).unwrap();
            let date: chrono::NaiveDate =
                payload["mrn"]["date"].as_str().unwrap().parse().unwrap();
            let age = Utc::now().date_naive() - date;
            assert!(age.num_days() > 395, "MRN only {} days old", age.num_days());
        }

        #[test]
        fn welsh_payload_sets_language_preference() {
            let payload = build_payload(CaseType::WelshPip).unwrap();
            assert_eq!(payload["languagePreferenceWelsh"], true);
        }

        #[test]
        fn rep_payload_carries_representative_details() {
            let payload = build_payload(CaseType::PipRepSandL).unwrap();
            assert_eq!(payload["rep"]["hasRepresentative"], true);
        }
    }

    mod location_tests {
        use super::*;

        #[test]
        fn case_id_is_the_final_path_segment() {
            let id = case_id_from_location(
                "https://tribunals-api.example.net/api/appeals/1748523986243150",
            )
            .unwrap();
            assert_eq!(id, "1748523986243150");
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn trailing_slash_is_tolerated() {
            let id = case_id_from_location("/api/appeals/1748523986243150/").unwrap();
            assert_eq!(id, "1748523986243150");
        }

        #[test]
        fn empty_location_yields_none() {
            assert!(case_id_from_location("").is_none());
            assert!(case_id_from_location("///").is_none());
        }
    }

    mod case_ref_tests {
        use super::*;

        #[test]
        fn hyphenated_reference_groups_digits_in_fours() {
            let case = CaseRef::new("1748523986243150");
            assert_eq!(case.hyphenated(), "1748-5239-8624-3150");
        }

        #[test]
        fn well_formed_means_sixteen_digits() {
            assert!(CaseRef::new("1748523986243150").is_well_formed());
            assert!(!CaseRef::new("1748").is_well_formed());
            assert!(!CaseRef::new("1748-5239-8624-3150").is_well_formed());
        }

        #[test]
        fn settle_delay_is_pinned_at_three_seconds() {
            assert_eq!(TOKEN_SETTLE_DELAY, Duration::from_secs(3));
        }
    }
}
