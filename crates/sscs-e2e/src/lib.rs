//! End-to-end browser suite for the SSCS tribunal case-management
//! application.
//!
//! # Architecture
//!
//! ```text
//! spec files (tests/*.rs)
//!     └── StepsFactory ── scenario steps (steps::*)
//!             ├── page objects (pages::*) ── WebAction ── Browser/Page (CDP)
//!             └── CaseApiClient ── IDAM + tribunals API (case seeding)
//! ```
//!
//! Scenarios seed a case through the REST API, sign in as a role-specific
//! user, drive page objects through a business event, and assert on the
//! rendered tab content. With the `browser` feature the suite drives a
//! real Chromium; without it a scripted page backs the unit tests.

#![warn(missing_docs)]

mod action;
mod browser;
mod locator;
mod result;
mod wait;

pub mod api;
pub mod config;
pub mod content;
pub mod factory;
pub mod fixture;
pub mod pages;
pub mod steps;

pub use action::WebAction;
#[cfg(not(feature = "browser"))]
pub use browser::MockAction;
pub use browser::{Browser, BrowserConfig, Page};
pub use factory::{ScenarioTag, StepsFactory};
pub use locator::{LocatorOptions, Selector};
pub use result::{SuiteError, SuiteResult};
pub use wait::{poll_until, WaitOptions, WaitOutcome};

/// Install the suite's tracing subscriber, honouring `RUST_LOG`.
/// Safe to call from every spec file; only the first call wins.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
