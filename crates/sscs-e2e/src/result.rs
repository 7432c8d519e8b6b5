//! Result and error types for the suite.

use thiserror::Error;

/// Result type for suite operations
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors that can occur while driving the application under test
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level error from the browser session
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// An element interaction failed. Carries the operation and selector
    /// so the failure surfaces at its true origin rather than as a later
    /// unrelated assertion.
    #[error("{operation} on `{selector}` failed: {message}")]
    Interaction {
        /// Operation that was attempted (click, fill, select, ...)
        operation: &'static str,
        /// Selector the operation targeted
        selector: String,
        /// Underlying error message
        message: String,
    },

    /// No element matched the selector
    #[error("No element matched `{selector}`")]
    ElementNotFound {
        /// Selector that matched nothing
        selector: String,
    },

    /// A bounded wait ran out of time
    #[error("Timed out after {ms}ms waiting for {waiting_for}")]
    Timeout {
        /// Timeout bound in milliseconds
        ms: u64,
        /// Description of the awaited condition
        waiting_for: String,
    },

    /// A page-content assertion failed
    #[error("Assertion failed: {message}")]
    Assertion {
        /// Error message
        message: String,
    },

    /// The case-seeding API rejected a request
    #[error("Case API error: {message}")]
    CaseApi {
        /// Error message
        message: String,
    },

    /// Requested case type has no payload template
    #[error("Unknown case type `{case_type}`")]
    UnknownCaseType {
        /// The unrecognized case-type string
        case_type: String,
    },

    /// The case-creation response had no usable Location header
    #[error("Case creation response carried no Location header")]
    MissingLocationHeader,

    /// IDAM token acquisition failed
    #[error("IDAM authentication failed for {user}: {message}")]
    Auth {
        /// User the token was requested for
        user: String,
        /// Error message
        message: String,
    },

    /// Suite configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SuiteError {
    /// Build an interaction error from an operation, selector and cause.
    pub fn interaction(
        operation: &'static str,
        selector: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Interaction {
            operation,
            selector: selector.into(),
            message: message.into(),
        }
    }
}
