//! The IDAM sign-in screen.

use crate::action::WebAction;
use crate::config::Credentials;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Sign-in page
#[derive(Debug, Clone)]
pub struct SignInPage {
    action: WebAction,
}

impl SignInPage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn username_input() -> Selector {
        Selector::css("input#username")
    }

    fn password_input() -> Selector {
        Selector::css("input#password")
    }

    fn submit_button() -> Selector {
        Selector::css("input[type='submit']")
    }

    /// The "Sign out" link rendered on every authenticated screen. Its
    /// visibility is the suite's definition of "logged in"; a failed login
    /// surfaces as a visibility-wait timeout here.
    #[must_use]
    pub fn sign_out_link() -> Selector {
        Selector::role("link", "Sign out")
    }

    /// Submit the sign-in form
    pub async fn sign_in(&self, credentials: &Credentials) -> SuiteResult<()> {
        self.action
            .fill(&Self::username_input(), &credentials.username)
            .await?;
        self.action
            .fill(&Self::password_input(), &credentials.password)
            .await?;
        self.action.click(&Self::submit_button()).await
    }

    /// Wait until the authenticated chrome is rendered
    pub async fn verify_signed_in(&self) -> SuiteResult<()> {
        self.action.wait_for_visible(&Self::sign_out_link()).await
    }
}
