//! Shared scaffolding for every scenario: the page-object set, role
//! logins, and the History-tab assertion almost every journey ends on.

use crate::action::WebAction;
use crate::api::CaseRef;
use crate::config::{SuiteConfig, UserRole};
use crate::pages::{
    AdjournmentPage, BundlesTab, CaseHomePage, EventSummaryPage, HistoryTab, LinkCasePage,
    ReferralPage, RelatedAppealsTab, ResponseReviewedPage, SignInPage, SummaryTab, TasksTab,
    UploadResponsePage, UrgentHearingPage, WithdrawalPage,
};
use crate::result::SuiteResult;
use tracing::info;

/// Base of every scenario step class
#[derive(Debug, Clone)]
pub struct BaseSteps {
    /// Suite configuration
    pub config: SuiteConfig,
    /// Shared page handle
    pub action: WebAction,
    /// Sign-in screen
    pub sign_in: SignInPage,
    /// Case-details home
    pub case_home: CaseHomePage,
    /// History tab
    pub history: HistoryTab,
    /// Summary tab
    pub summary: SummaryTab,
    /// Related Appeals tab
    pub related_appeals: RelatedAppealsTab,
    /// Tasks tab
    pub tasks: TasksTab,
    /// Bundles tab
    pub bundles: BundlesTab,
    /// Upload response event page
    pub upload_response: UploadResponsePage,
    /// Response reviewed event page
    pub response_reviewed: ResponseReviewedPage,
    /// Link a case event page
    pub link_case: LinkCasePage,
    /// Urgent hearing pages
    pub urgent_hearing: UrgentHearingPage,
    /// Adjournment event page
    pub adjournment: AdjournmentPage,
    /// Interlocutory referral page
    pub referral: ReferralPage,
    /// Withdrawal event page
    pub withdrawal: WithdrawalPage,
    /// Check-your-answers / confirmation page
    pub event_summary: EventSummaryPage,
}

impl BaseSteps {
    /// Build the page-object set over one shared page handle
    #[must_use]
    pub fn new(action: WebAction, config: SuiteConfig) -> Self {
        Self {
            config,
            sign_in: SignInPage::new(action.clone()),
            case_home: CaseHomePage::new(action.clone()),
            history: HistoryTab::new(action.clone()),
            summary: SummaryTab::new(action.clone()),
            related_appeals: RelatedAppealsTab::new(action.clone()),
            tasks: TasksTab::new(action.clone()),
            bundles: BundlesTab::new(action.clone()),
            upload_response: UploadResponsePage::new(action.clone()),
            response_reviewed: ResponseReviewedPage::new(action.clone()),
            link_case: LinkCasePage::new(action.clone()),
            urgent_hearing: UrgentHearingPage::new(action.clone()),
            adjournment: AdjournmentPage::new(action.clone()),
            referral: ReferralPage::new(action.clone()),
            withdrawal: WithdrawalPage::new(action.clone()),
            event_summary: EventSummaryPage::new(action.clone()),
            action,
        }
    }

    /// Sign in as a role and land on a case's details page.
    ///
    /// Cookies are cleared first so role switches within one scenario
    /// never inherit the previous session.
    pub async fn login_user_with_case_id(
        &self,
        role: UserRole,
        case: &CaseRef,
    ) -> SuiteResult<()> {
        info!(%role, case_id = %case.id, "signing in");
        let credentials = self.config.credentials_for(role)?;
        self.action.clear_cookies().await?;
        self.action
            .goto(&self.config.case_details_url(&case.id))
            .await?;
        self.sign_in.sign_in(credentials).await?;
        self.sign_in.verify_signed_in().await?;
        self.case_home.verify_case_reference(&case.hyphenated()).await
    }

    /// Sign in as a role on the case-list landing page
    pub async fn login_user_without_case_id(&self, role: UserRole) -> SuiteResult<()> {
        info!(%role, "signing in");
        let credentials = self.config.credentials_for(role)?;
        self.action.clear_cookies().await?;
        self.action.goto(&self.config.app_base_url).await?;
        self.sign_in.sign_in(credentials).await?;
        self.sign_in.verify_signed_in().await
    }

    /// Open the History tab and assert its newest row
    pub async fn verify_history_tab_details(
        &self,
        event: &str,
        end_state: &str,
    ) -> SuiteResult<()> {
        self.case_home.open_tab("History").await?;
        self.history.verify_latest_event(event).await?;
        self.history.verify_end_state(end_state).await
    }
}
