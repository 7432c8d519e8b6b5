//! Page objects: one struct per application screen or tab.
//!
//! A page object translates one screen's semantics into named operations
//! over [`WebAction`](crate::action::WebAction). It never sequences
//! business flows; that is the scenario steps' job.

pub mod adjournment;
pub mod bundles_tab;
pub mod case_home;
pub mod history_tab;
pub mod link_case;
pub mod referral;
pub mod related_appeals_tab;
pub mod response_reviewed;
pub mod sign_in;
pub mod submission;
pub mod summary_tab;
pub mod tasks_tab;
pub mod upload_response;
pub mod urgent_hearing;
pub mod withdrawal;

pub use adjournment::AdjournmentPage;
pub use bundles_tab::BundlesTab;
pub use case_home::CaseHomePage;
pub use history_tab::HistoryTab;
pub use link_case::LinkCasePage;
pub use referral::ReferralPage;
pub use related_appeals_tab::RelatedAppealsTab;
pub use response_reviewed::ResponseReviewedPage;
pub use sign_in::SignInPage;
pub use submission::EventSummaryPage;
pub use summary_tab::SummaryTab;
pub use tasks_tab::TasksTab;
pub use upload_response::UploadResponsePage;
pub use urgent_hearing::UrgentHearingPage;
pub use withdrawal::WithdrawalPage;
