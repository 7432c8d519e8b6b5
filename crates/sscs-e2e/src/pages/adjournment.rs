//! The adjournment event pages a judge walks through after a hearing
//! cannot proceed.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Adjournment event page
#[derive(Debug, Clone)]
pub struct AdjournmentPage {
    action: WebAction,
}

impl AdjournmentPage {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn generate_notice_radio(answer: bool) -> Selector {
        if answer {
            Selector::css("input#generateNotice_Yes")
        } else {
            Selector::css("input#generateNotice_No")
        }
    }

    fn next_hearing_type_dropdown() -> Selector {
        Selector::css("select#adjournCaseTypeOfNextHearing")
    }

    fn panel_members_excluded_radio(answer: bool) -> Selector {
        if answer {
            Selector::css("input#panelMembersExcluded_Yes")
        } else {
            Selector::css("input#panelMembersExcluded_No")
        }
    }

    fn continue_button() -> Selector {
        Selector::role("button", "Continue")
    }

    /// Choose whether the adjournment notice is generated by the system
    pub async fn select_generate_notice(&self, answer: bool) -> SuiteResult<()> {
        self.action
            .set_checked(&Self::generate_notice_radio(answer), true)
            .await?;
        self.action.click(&Self::continue_button()).await
    }

    /// Pick the type of the next hearing
    pub async fn select_next_hearing_type(&self, hearing_type: &str) -> SuiteResult<()> {
        self.action
            .select_option(&Self::next_hearing_type_dropdown(), hearing_type)
            .await?;
        self.action.click(&Self::continue_button()).await
    }

    /// Answer whether the previous panel members are excluded
    pub async fn select_panel_members_excluded(&self, answer: bool) -> SuiteResult<()> {
        self.action
            .set_checked(&Self::panel_members_excluded_radio(answer), true)
            .await?;
        self.action.click(&Self::continue_button()).await
    }
}
