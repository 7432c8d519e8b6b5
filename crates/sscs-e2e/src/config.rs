//! Suite configuration.
//!
//! Base URLs and per-role credentials come from the environment with
//! local defaults, so the same binary runs against preview, AAT-style
//! staging, or a local stack without code changes.

use crate::browser::BrowserConfig;
use crate::result::{SuiteError, SuiteResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Roles the suite signs in as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// CTSC administrator
    CtscAdmin,
    /// Tribunal caseworker
    TribunalCaseworker,
    /// Regional centre administrator
    RegionalCenterAdmin,
    /// Salaried judge
    Judge,
    /// First-tier Agency (DWP) responder
    FtaUser,
    /// Superuser with every case role
    Superuser,
}

impl UserRole {
    /// All roles, in the order credentials are loaded
    #[must_use]
    pub fn all() -> [UserRole; 6] {
        [
            Self::CtscAdmin,
            Self::TribunalCaseworker,
            Self::RegionalCenterAdmin,
            Self::Judge,
            Self::FtaUser,
            Self::Superuser,
        ]
    }

    /// Environment-variable infix for this role
    #[must_use]
    pub const fn env_infix(&self) -> &'static str {
        match self {
            Self::CtscAdmin => "CTSC_ADMIN",
            Self::TribunalCaseworker => "TRIBUNAL_CASEWORKER",
            Self::RegionalCenterAdmin => "REGIONAL_CENTER_ADMIN",
            Self::Judge => "JUDGE",
            Self::FtaUser => "FTA_USER",
            Self::Superuser => "SUPERUSER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CtscAdmin => "ctsc-admin",
            Self::TribunalCaseworker => "tribunal-caseworker",
            Self::RegionalCenterAdmin => "regional-center-admin",
            Self::Judge => "judge",
            Self::FtaUser => "fta-user",
            Self::Superuser => "superuser",
        };
        write!(f, "{name}")
    }
}

/// A test user's sign-in record, immutable for the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// IDAM username (email)
    pub username: String,
    /// IDAM password
    pub password: String,
}

impl Credentials {
    /// Create a credentials record
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Suite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the case-management web application
    pub app_base_url: String,
    /// Base URI of the tribunals case API used for seeding
    pub tribunals_api_uri: String,
    /// Base URL of the IDAM service issuing tokens
    pub idam_api_url: String,
    /// Per-role sign-in records
    pub credentials: HashMap<UserRole, Credentials>,
    /// Browser launch configuration
    #[serde(skip)]
    pub browser: BrowserConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        let mut credentials = HashMap::new();
        for role in UserRole::all() {
            credentials.insert(
                role,
                Credentials::new(format!("{role}@example.net"), "Pa55word11"),
            );
        }
        Self {
            app_base_url: "http://localhost:3455".to_string(),
            tribunals_api_uri: "http://localhost:8008".to_string(),
            idam_api_url: "http://localhost:5000".to_string(),
            credentials,
            browser: BrowserConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Build a configuration from the environment, falling back to local
    /// defaults for anything unset.
    ///
    /// Recognized variables: `SSCS_E2E_BASE_URL`, `SSCS_TRIBUNALS_API_URI`,
    /// `SSCS_IDAM_API_URL`, `SSCS_HEADLESS`, and per role
    /// `SSCS_<ROLE>_USERNAME` / `SSCS_<ROLE>_PASSWORD`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SSCS_E2E_BASE_URL") {
            config.app_base_url = url;
        }
        if let Ok(uri) = std::env::var("SSCS_TRIBUNALS_API_URI") {
            config.tribunals_api_uri = uri;
        }
        if let Ok(url) = std::env::var("SSCS_IDAM_API_URL") {
            config.idam_api_url = url;
        }
        if let Ok(headless) = std::env::var("SSCS_HEADLESS") {
            config.browser.headless = headless != "false";
        }

        for role in UserRole::all() {
            let infix = role.env_infix();
            if let Ok(username) = std::env::var(format!("SSCS_{infix}_USERNAME")) {
                if let Some(creds) = config.credentials.get_mut(&role) {
                    creds.username = username;
                }
            }
            if let Ok(password) = std::env::var(format!("SSCS_{infix}_PASSWORD")) {
                if let Some(creds) = config.credentials.get_mut(&role) {
                    creds.password = password;
                }
            }
        }

        config
    }

    /// Credentials for a role
    pub fn credentials_for(&self, role: UserRole) -> SuiteResult<&Credentials> {
        self.credentials.get(&role).ok_or_else(|| SuiteError::Config {
            message: format!("no credentials configured for role {role}"),
        })
    }

    /// Case-details URL for a case id
    #[must_use]
    pub fn case_details_url(&self, case_id: &str) -> String {
        format!(
            "{}/cases/case-details/{case_id}",
            self.app_base_url.trim_end_matches('/')
        )
    }

    /// Set the application base URL
    #[must_use]
    pub fn with_app_base_url(mut self, url: impl Into<String>) -> Self {
        self.app_base_url = url.into();
        self
    }

    /// Set the tribunals API URI
    #[must_use]
    pub fn with_tribunals_api_uri(mut self, uri: impl Into<String>) -> Self {
        self.tribunals_api_uri = uri.into();
        self
    }

    /// Replace a role's credentials
    #[must_use]
    pub fn with_credentials(mut self, role: UserRole, credentials: Credentials) -> Self {
        self.credentials.insert(role, credentials);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_all_roles() {
        let config = SuiteConfig::default();
        for role in UserRole::all() {
            assert!(config.credentials_for(role).is_ok(), "missing {role}");
        }
    }

    #[test]
    fn case_details_url_strips_trailing_slash() {
        let config = SuiteConfig::default().with_app_base_url("https://manage-case.example.net/");
        assert_eq!(
            config.case_details_url("1234567890123456"),
            "https://manage-case.example.net/cases/case-details/1234567890123456"
        );
    }

    #[test]
    fn with_credentials_replaces_role_entry() {
        let config = SuiteConfig::default().with_credentials(
            UserRole::Judge,
            Credentials::new("judge@bench.example.net", "secret"),
        );
        assert_eq!(
            config.credentials_for(UserRole::Judge).unwrap().username,
            "judge@bench.example.net"
        );
    }

    #[test]
    fn role_display_and_env_infix_are_consistent() {
        assert_eq!(UserRole::CtscAdmin.to_string(), "ctsc-admin");
        assert_eq!(UserRole::CtscAdmin.env_infix(), "CTSC_ADMIN");
        assert_eq!(UserRole::FtaUser.env_infix(), "FTA_USER");
    }
}
