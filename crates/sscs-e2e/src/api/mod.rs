//! Direct API access to the case-management stack, bypassing the UI.

pub mod case_factory;
pub mod idam;
pub mod nino;

pub use case_factory::{
    build_payload, case_id_from_location, CaseApiClient, CaseRef, CaseType, TOKEN_SETTLE_DELAY,
};
pub use idam::{IdamClient, TokenBundle};
