//! IDAM token acquisition.
//!
//! Every direct call to the case API needs a user bearer token plus a
//! service-to-service token; both come from the IDAM stack configured in
//! [`SuiteConfig`](crate::config::SuiteConfig).

use crate::config::Credentials;
use crate::result::{SuiteError, SuiteResult};
use serde::Deserialize;
use tracing::debug;

/// Bearer and service tokens for one user
#[derive(Debug, Clone)]
pub struct TokenBundle {
    /// User bearer token
    pub access_token: String,
    /// Service-to-service token
    pub service_token: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Client for the IDAM service
#[derive(Debug, Clone)]
pub struct IdamClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdamClient {
    /// Create a client against an IDAM base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Obtain bearer and service tokens for a test user
    pub async fn sign_in(&self, credentials: &Credentials) -> SuiteResult<TokenBundle> {
        debug!(user = %credentials.username, "requesting IDAM tokens");

        let login: LoginResponse = self
            .http
            .post(format!("{}/loginUser", self.base_url))
            .query(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| SuiteError::Auth {
                user: credentials.username.clone(),
                message: e.to_string(),
            })?
            .json()
            .await
            .map_err(|e| SuiteError::Auth {
                user: credentials.username.clone(),
                message: format!("malformed token response: {e}"),
            })?;

        let service_token = self
            .http
            .post(format!("{}/testing-support/lease", self.base_url))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| SuiteError::Auth {
                user: credentials.username.clone(),
                message: format!("service token lease failed: {e}"),
            })?
            .text()
            .await?;

        Ok(TokenBundle {
            access_token: login.access_token,
            service_token,
        })
    }
}
