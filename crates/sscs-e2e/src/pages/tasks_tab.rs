//! The Tasks tab: work-allocation task visibility and assignment.
//!
//! The work-allocation subsystem itself lives in the external
//! application; only the rendered task list is asserted on here.

use crate::action::WebAction;
use crate::locator::Selector;
use crate::result::SuiteResult;

/// Tasks tab
#[derive(Debug, Clone)]
pub struct TasksTab {
    action: WebAction,
}

impl TasksTab {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(action: WebAction) -> Self {
        Self { action }
    }

    fn task_heading(name: &str) -> Selector {
        Selector::css_with_text("exui-case-task .task-list-row h3", name)
    }

    fn assign_to_me_link(task: &str) -> Selector {
        Selector::css_with_text("exui-case-task .task-list-row", task)
    }

    fn assigned_owner_label() -> Selector {
        Selector::css_with_text("exui-case-task .assignee", "Assigned to me")
    }

    fn mark_done_button() -> Selector {
        Selector::role("button", "Mark as done")
    }

    /// Assert a task with the given name is listed
    pub async fn verify_task_listed(&self, name: &str) -> SuiteResult<()> {
        self.action
            .wait_for_visible(&Self::task_heading(name))
            .await
    }

    /// Assert no task with the given name is listed right now
    pub async fn verify_task_absent(&self, name: &str) -> SuiteResult<()> {
        let count = self
            .action
            .element_count(&Self::task_heading(name))
            .await?;
        if count == 0 {
            Ok(())
        } else {
            Err(crate::result::SuiteError::Assertion {
                message: format!("task \"{name}\" still listed ({count} match(es))"),
            })
        }
    }

    /// Self-assign a task via its "Assign to me" action link
    pub async fn assign_to_self(&self, task: &str) -> SuiteResult<()> {
        self.action
            .click(&Selector::css_with_text(
                "exui-case-task .task-action a",
                "Assign to me",
            ))
            .await?;
        self.action
            .wait_for_visible(&Self::assign_to_me_link(task))
            .await?;
        self.action
            .wait_for_visible(&Self::assigned_owner_label())
            .await
    }

    /// Complete the currently assigned task
    pub async fn mark_done(&self) -> SuiteResult<()> {
        self.action.click(&Self::mark_done_button()).await
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::Page;
    use crate::locator::LocatorOptions;
    use std::time::Duration;

    fn tab_under_test() -> TasksTab {
        let action = WebAction::new(Page::new()).with_options(
            LocatorOptions::default()
                .with_timeout(Duration::from_millis(100))
                .with_poll_interval(Duration::from_millis(5)),
        );
        TasksTab::new(action)
    }

    #[tokio::test]
    async fn listed_task_is_found_by_heading() {
        let tab = tab_under_test();
        tab.action
            .page()
            .await
            .stub_visible(&TasksTab::task_heading("Review FTA response"));
        tab.verify_task_listed("Review FTA response").await.unwrap();
    }

    #[tokio::test]
    async fn absent_task_passes_when_count_is_zero() {
        let tab = tab_under_test();
        tab.verify_task_absent("Review FTA response").await.unwrap();
    }

    #[tokio::test]
    async fn absent_task_fails_when_still_listed() {
        let tab = tab_under_test();
        tab.action
            .page()
            .await
            .stub_visible(&TasksTab::task_heading("Review FTA response"));
        let err = tab
            .verify_task_absent("Review FTA response")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("still listed"));
    }
}
