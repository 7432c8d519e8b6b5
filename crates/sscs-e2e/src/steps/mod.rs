//! Scenario steps: one module per business journey, all built on
//! [`BaseSteps`](base::BaseSteps).

pub mod adjournment;
pub mod base;
pub mod bundle;
pub mod helper;
pub mod link_case;
pub mod referred_by_judge;
pub mod upload_response;
pub mod urgent_hearing;
pub mod withdrawal;
pub mod work_allocation;

pub use adjournment::AdjournmentSteps;
pub use base::BaseSteps;
pub use bundle::BundleSteps;
pub use helper::{ResponseDocs, StepsHelper};
pub use link_case::LinkCaseSteps;
pub use referred_by_judge::ReferredByJudgeSteps;
pub use upload_response::UploadResponseSteps;
pub use urgent_hearing::UrgentHearingSteps;
pub use withdrawal::WithdrawalSteps;
pub use work_allocation::WorkAllocationSteps;
