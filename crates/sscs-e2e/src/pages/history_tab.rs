//! The History tab: event log rows and the details panel.

use crate::action::WebAction;
use crate::content;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// History tab
#[derive(Debug, Clone)]
pub struct HistoryTab {
    action: WebAction,
}

impl HistoryTab {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn latest_event_cell(event: &str) -> Selector {
        Selector::css_with_text("table.EventLogTable tbody tr:first-child td", event)
    }

    fn details_cell(value: &str) -> Selector {
        Selector::css_with_text("table.EventLogDetails td", value)
    }

    fn column_heading(label: &str) -> Selector {
        Selector::css_with_text("table.EventLogTable th", label)
    }

    /// Assert the tab's static column headings are rendered
    pub async fn verify_page_content(&self) -> SuiteResult<()> {
        for column in &content::history_tab().columns {
            self.action
                .wait_for_visible(&Self::column_heading(column))
                .await?;
        }
        Ok(())
    }

    /// Assert the newest event row names the given event
    pub async fn verify_latest_event(&self, event: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::latest_event_cell(event))
            .await
    }

    /// Assert the details panel shows the given end state
    pub async fn verify_end_state(&self, end_state: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::details_cell(end_state))
            .await
    }
}
