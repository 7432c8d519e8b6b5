//! Expected page content, loaded from JSON data tables.
//!
//! These mirror the label text the application renders; the suite compares
//! against them and nothing else, so a relabel in the application is a
//! one-line fixture change here.

use serde::Deserialize;
use std::sync::OnceLock;

/// Labels on the Upload response event page
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponseContent {
    /// Page heading
    pub title: String,
    /// Static field labels that must be present
    pub labels: Vec<String>,
    /// Confirmation banner shown after submission
    pub success_banner: String,
}

/// Labels on the History tab
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryTabContent {
    /// Tab strip label
    pub tab_label: String,
    /// Event table column headings
    pub columns: Vec<String>,
}

/// Labels on the Link a case event page
#[derive(Debug, Clone, Deserialize)]
pub struct LinkCaseContent {
    /// Page heading
    pub title: String,
    /// Validation error for linking a case to itself
    pub self_link_error: String,
    /// Event name shown in the History tab
    pub event_label: String,
    /// End state shown in the History tab after linking
    pub end_state: String,
}

/// Upload response page content
pub fn upload_response() -> &'static UploadResponseContent {
    static CONTENT: OnceLock<UploadResponseContent> = OnceLock::new();
    CONTENT.get_or_init(|| {
        serde_json::from_str(include_str!("../fixtures/content/upload-response.json"))
            .expect("upload-response content fixture is valid JSON")
    })
}

/// History tab content
pub fn history_tab() -> &'static HistoryTabContent {
    static CONTENT: OnceLock<HistoryTabContent> = OnceLock::new();
    CONTENT.get_or_init(|| {
        serde_json::from_str(include_str!("../fixtures/content/history-tab.json"))
            .expect("history-tab content fixture is valid JSON")
    })
}

/// Link a case page content
pub fn link_case() -> &'static LinkCaseContent {
    static CONTENT: OnceLock<LinkCaseContent> = OnceLock::new();
    CONTENT.get_or_init(|| {
        serde_json::from_str(include_str!("../fixtures/content/link-case.json"))
            .expect("link-case content fixture is valid JSON")
    })
}
