//! Uniform wrapper over low-level browser interactions.
//!
//! Every operation auto-waits for its target to become visible, then acts,
//! and propagates failures as [`SuiteError::Interaction`] values carrying
//! the operation and selector. Nothing is logged-and-swallowed: a missing
//! element fails at the call that needed it.

use crate::browser::Page;
use crate::locator::{LocatorOptions, Selector};
use crate::result::{SuiteError, SuiteResult};
use crate::wait::{poll_until, WaitOptions};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared handle for driving the browser page.
///
/// Page objects hold clones of one `WebAction`; all clones address the
/// same underlying browser tab.
#[derive(Debug, Clone)]
pub struct WebAction {
    page: Arc<Mutex<Page>>,
    options: LocatorOptions,
}

impl WebAction {
    /// Wrap a page with default auto-wait options
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page: Arc::new(Mutex::new(page)),
            options: LocatorOptions::default(),
        }
    }

    /// Override the auto-wait options
    #[must_use]
    pub fn with_options(mut self, options: LocatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Access the underlying page (for scripted stubbing in tests)
    pub async fn page(&self) -> tokio::sync::MutexGuard<'_, Page> {
        self.page.lock().await
    }

    /// Navigate to a URL
    pub async fn goto(&self, url: &str) -> SuiteResult<()> {
        debug!(url, "navigate");
        self.page.lock().await.goto(url).await
    }

    /// URL of the last navigation
    pub async fn current_url(&self) -> String {
        self.page.lock().await.current_url()
    }

    /// Click an element once it is visible
    pub async fn click(&self, selector: &Selector) -> SuiteResult<()> {
        debug!(%selector, "click");
        self.wait_for_visible(selector).await?;
        self.page.lock().await.click(selector).await
    }

    /// Fill an input with text once it is visible
    pub async fn fill(&self, selector: &Selector, text: &str) -> SuiteResult<()> {
        debug!(%selector, "fill");
        self.wait_for_visible(selector).await?;
        self.page.lock().await.type_text(selector, text).await
    }

    /// Select a dropdown option by value or label once the select is visible
    pub async fn select_option(&self, selector: &Selector, option: &str) -> SuiteResult<()> {
        debug!(%selector, option, "select");
        self.wait_for_visible(selector).await?;
        self.page.lock().await.select_option(selector, option).await
    }

    /// Set a checkbox or radio state once it is visible
    pub async fn set_checked(&self, selector: &Selector, checked: bool) -> SuiteResult<()> {
        debug!(%selector, checked, "set_checked");
        self.wait_for_visible(selector).await?;
        self.page.lock().await.set_checked(selector, checked).await
    }

    /// Attach a file to a file input once it is visible
    pub async fn upload_file(&self, selector: &Selector, file: &Path) -> SuiteResult<()> {
        debug!(%selector, file = %file.display(), "upload");
        self.wait_for_visible(selector).await?;
        self.page.lock().await.upload_file(selector, file).await
    }

    /// Trimmed text content of an element; errors if nothing matches
    pub async fn inner_text(&self, selector: &Selector) -> SuiteResult<String> {
        self.wait_for_visible(selector).await?;
        let text = self.page.lock().await.inner_text(selector).await?;
        text.map(|t| t.trim().to_string())
            .ok_or_else(|| SuiteError::ElementNotFound {
                selector: selector.to_string(),
            })
    }

    /// Number of elements matching the selector right now (no waiting)
    pub async fn element_count(&self, selector: &Selector) -> SuiteResult<usize> {
        self.page.lock().await.count(selector).await
    }

    /// Whether the selector is currently visible (no waiting)
    pub async fn is_visible(&self, selector: &Selector) -> SuiteResult<bool> {
        self.page.lock().await.is_visible(selector).await
    }

    /// Wait until the selector is visible, bounded by the auto-wait timeout
    pub async fn wait_for_visible(&self, selector: &Selector) -> SuiteResult<()> {
        let options = WaitOptions::new()
            .with_timeout(self.options.timeout.as_millis() as u64)
            .with_poll_interval(self.options.poll_interval.as_millis() as u64);
        let page = self.page.clone();
        let target = selector.clone();
        poll_until(format!("`{selector}` visible"), &options, move || {
            let page = page.clone();
            let target = target.clone();
            async move { page.lock().await.is_visible(&target).await }
        })
        .await?;
        Ok(())
    }

    /// Wait until the element's text contains the expected fragment
    pub async fn wait_for_text(&self, selector: &Selector, expected: &str) -> SuiteResult<()> {
        let options = WaitOptions::new()
            .with_timeout(self.options.timeout.as_millis() as u64)
            .with_poll_interval(self.options.poll_interval.as_millis() as u64);
        let page = self.page.clone();
        let target = selector.clone();
        let fragment = expected.to_string();
        poll_until(
            format!("`{selector}` to contain \"{expected}\""),
            &options,
            move || {
                let page = page.clone();
                let target = target.clone();
                let fragment = fragment.clone();
                async move {
                    let text = page.lock().await.inner_text(&target).await?;
                    Ok(text.is_some_and(|t| t.contains(&fragment)))
                }
            },
        )
        .await?;
        Ok(())
    }

    /// Assert that the given text is rendered somewhere on the page
    pub async fn verify_text_visible(&self, text: &str) -> SuiteResult<()> {
        self.wait_for_visible(&Selector::text(text))
            .await
            .map_err(|e| match e {
                SuiteError::Timeout { ms, .. } => SuiteError::Assertion {
                    message: format!("expected page text \"{text}\" within {ms}ms"),
                },
                other => other,
            })
    }

    /// Assert that the element's text equals the expected value exactly
    pub async fn verify_text_equals(&self, selector: &Selector, expected: &str) -> SuiteResult<()> {
        let actual = self.inner_text(selector).await?;
        if actual == expected {
            Ok(())
        } else {
            Err(SuiteError::Assertion {
                message: format!("`{selector}`: expected \"{expected}\", got \"{actual}\""),
            })
        }
    }

    /// Clear browser cookies (used before role-switching logins)
    pub async fn clear_cookies(&self) -> SuiteResult<()> {
        debug!("clear cookies");
        self.page.lock().await.clear_cookies().await
    }

    /// Capture a screenshot of the current page
    pub async fn screenshot(&self) -> SuiteResult<Vec<u8>> {
        self.page.lock().await.screenshot().await
    }
}
