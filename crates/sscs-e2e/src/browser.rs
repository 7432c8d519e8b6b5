//! Browser control for the suite.
//!
//! With the `browser` feature the suite drives a real Chromium over the
//! Chrome DevTools Protocol via chromiumoxide. Without the feature a
//! scripted in-memory page stands in, so page objects and scenario steps
//! stay unit-testable on machines with no browser installed.

use crate::locator::Selector;
use crate::result::{SuiteError, SuiteResult};

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
            chromium_path: std::env::var("CHROMIUM_PATH").ok(),
            sandbox: true,
        }
    }
}

impl BrowserConfig {
    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

// ============================================================================
// Real CDP implementation (when `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::{BrowserConfig, Selector, SuiteError, SuiteResult};
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::dom::{
        GetDocumentParams, QuerySelectorParams, SetFileInputFilesParams,
    };
    use chromiumoxide::cdp::browser_protocol::network::ClearBrowserCookiesParams;
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams,
    };
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::path::Path;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Browser instance with a live CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a new browser instance
        pub async fn launch(config: BrowserConfig) -> SuiteResult<Self> {
            let mut builder = CdpConfig::builder()
                .window_size(config.viewport_width, config.viewport_height);

            if !config.headless {
                builder = builder.with_head();
            }

            if !config.sandbox {
                builder = builder.no_sandbox();
            }

            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(|e| SuiteError::BrowserLaunch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| SuiteError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            // CDP event pump; the session dies when this stops.
            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                config,
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Create a new page
        pub async fn new_page(&self) -> SuiteResult<Page> {
            let browser = self.inner.lock().await;
            let cdp_page =
                browser
                    .new_page("about:blank")
                    .await
                    .map_err(|e| SuiteError::Page {
                        message: e.to_string(),
                    })?;

            Ok(Page {
                url: String::from("about:blank"),
                inner: Arc::new(Mutex::new(cdp_page)),
            })
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> SuiteResult<()> {
            let mut browser = self.inner.lock().await;
            browser
                .close()
                .await
                .map_err(|e| SuiteError::BrowserLaunch {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    /// A browser tab driven over CDP
    #[derive(Debug, Clone)]
    pub struct Page {
        url: String,
        inner: Arc<Mutex<CdpPage>>,
    }

    impl Page {
        /// Navigate to a URL
        pub async fn goto(&mut self, url: &str) -> SuiteResult<()> {
            let page = self.inner.lock().await;
            page.goto(url).await.map_err(|e| SuiteError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            drop(page);
            self.url = url.to_string();
            Ok(())
        }

        /// URL of the last navigation
        #[must_use]
        pub fn current_url(&self) -> String {
            self.url.clone()
        }

        /// Evaluate a JavaScript expression and deserialize its value
        pub async fn evaluate<T: serde::de::DeserializeOwned>(
            &self,
            expr: &str,
        ) -> SuiteResult<T> {
            let page = self.inner.lock().await;
            let result = page.evaluate(expr).await.map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;
            result.into_value().map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })
        }

        /// Text content of the first match, `None` if nothing matched
        pub async fn inner_text(&self, selector: &Selector) -> SuiteResult<Option<String>> {
            let expr = format!(
                "(() => {{ const el = {q}; return el ? el.textContent : null; }})()",
                q = selector.to_query(),
            );
            self.evaluate(&expr).await
        }

        /// Number of elements matching the selector
        pub async fn count(&self, selector: &Selector) -> SuiteResult<usize> {
            self.evaluate(&selector.to_count_query()).await
        }

        /// Whether the first match exists and takes up layout space
        pub async fn is_visible(&self, selector: &Selector) -> SuiteResult<bool> {
            self.evaluate(&selector.to_visible_query()).await
        }

        /// Click the first match
        pub async fn click(&self, selector: &Selector) -> SuiteResult<()> {
            let expr = format!(
                "(() => {{ const el = {q}; if (!el) return false; el.click(); return true; }})()",
                q = selector.to_query(),
            );
            self.interact("click", selector, &expr).await
        }

        /// Replace the value of the first matching input and fire the
        /// input/change events the application listens for.
        pub async fn type_text(&self, selector: &Selector, text: &str) -> SuiteResult<()> {
            let expr = format!(
                "(() => {{ const el = {q}; if (!el) return false; \
                 el.focus(); el.value = {text:?}; \
                 el.dispatchEvent(new Event('input', {{bubbles: true}})); \
                 el.dispatchEvent(new Event('change', {{bubbles: true}})); \
                 return true; }})()",
                q = selector.to_query(),
            );
            self.interact("fill", selector, &expr).await
        }

        /// Select a dropdown option by value or visible label
        pub async fn select_option(&self, selector: &Selector, option: &str) -> SuiteResult<()> {
            let expr = format!(
                "(() => {{ const el = {q}; if (!el) return false; \
                 const opt = Array.from(el.options).find(o => o.value === {option:?} || o.textContent.trim() === {option:?}); \
                 if (!opt) return false; \
                 el.value = opt.value; \
                 el.dispatchEvent(new Event('change', {{bubbles: true}})); \
                 return true; }})()",
                q = selector.to_query(),
            );
            self.interact("select", selector, &expr).await
        }

        /// Set the checked state of a checkbox or radio button
        pub async fn set_checked(&self, selector: &Selector, checked: bool) -> SuiteResult<()> {
            let expr = format!(
                "(() => {{ const el = {q}; if (!el) return false; \
                 if (el.checked !== {checked}) {{ el.click(); }} \
                 return true; }})()",
                q = selector.to_query(),
            );
            self.interact("check", selector, &expr).await
        }

        /// Attach a file to a file input. Only CSS selectors are supported
        /// because the DOM query runs over CDP, not in page JavaScript.
        pub async fn upload_file(&self, selector: &Selector, file: &Path) -> SuiteResult<()> {
            let Selector::Css(css) = selector else {
                return Err(SuiteError::interaction(
                    "upload",
                    selector.to_string(),
                    "file upload requires a CSS selector",
                ));
            };

            let page = self.inner.lock().await;

            let doc = page
                .execute(GetDocumentParams::default())
                .await
                .map_err(|e| SuiteError::interaction("upload", css.clone(), e.to_string()))?;

            let query = QuerySelectorParams::builder()
                .node_id(doc.root.node_id.clone())
                .selector(css.clone())
                .build()
                .map_err(|e| SuiteError::interaction("upload", css.clone(), e))?;

            let node = page
                .execute(query)
                .await
                .map_err(|e| SuiteError::interaction("upload", css.clone(), e.to_string()))?;

            let params = SetFileInputFilesParams::builder()
                .files(vec![file.to_string_lossy().to_string()])
                .node_id(node.node_id.clone())
                .build()
                .map_err(|e| SuiteError::interaction("upload", css.clone(), e))?;

            page.execute(params)
                .await
                .map_err(|e| SuiteError::interaction("upload", css.clone(), e.to_string()))?;

            Ok(())
        }

        /// Clear all browser cookies (used before role-switching logins)
        pub async fn clear_cookies(&self) -> SuiteResult<()> {
            let page = self.inner.lock().await;
            page.execute(ClearBrowserCookiesParams::default())
                .await
                .map_err(|e| SuiteError::Page {
                    message: e.to_string(),
                })?;
            Ok(())
        }

        /// Capture a PNG screenshot of the page
        pub async fn screenshot(&self) -> SuiteResult<Vec<u8>> {
            let page = self.inner.lock().await;
            let params = CaptureScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build();

            let screenshot = page.execute(params).await.map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;

            use base64::Engine;
            base64::engine::general_purpose::STANDARD
                .decode(&screenshot.data)
                .map_err(|e| SuiteError::Page {
                    message: e.to_string(),
                })
        }

        /// Run an interaction expression that resolves to `false` when the
        /// target element is missing.
        async fn interact(
            &self,
            operation: &'static str,
            selector: &Selector,
            expr: &str,
        ) -> SuiteResult<()> {
            let found: bool = self
                .evaluate(expr)
                .await
                .map_err(|e| SuiteError::interaction(operation, selector.to_string(), e.to_string()))?;
            if found {
                Ok(())
            } else {
                Err(SuiteError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }
    }
}

// ============================================================================
// Scripted mock (when `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
mod mock {
    use super::{BrowserConfig, Selector, SuiteError, SuiteResult};
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    /// A recorded interaction against the mock page
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MockAction {
        /// Navigation to a URL
        Navigate(String),
        /// Click on a selector
        Click(String),
        /// Text typed into a selector
        Type {
            /// Target selector
            selector: String,
            /// Typed text
            text: String,
        },
        /// Option selected in a dropdown
        Select {
            /// Target selector
            selector: String,
            /// Chosen option
            option: String,
        },
        /// Checkbox/radio state change
        SetChecked {
            /// Target selector
            selector: String,
            /// New state
            checked: bool,
        },
        /// File attached to an input
        Upload {
            /// Target selector
            selector: String,
            /// Attached file
            file: PathBuf,
        },
        /// Cookies cleared
        ClearCookies,
    }

    #[derive(Debug, Default)]
    struct MockState {
        url: String,
        texts: HashMap<String, String>,
        visible: HashSet<String>,
        counts: HashMap<String, usize>,
        actions: Vec<MockAction>,
    }

    /// Browser stand-in for unit testing
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
    }

    impl Browser {
        /// "Launch" the scripted browser
        pub async fn launch(config: BrowserConfig) -> SuiteResult<Self> {
            Ok(Self { config })
        }

        /// Create a new scripted page
        pub async fn new_page(&self) -> SuiteResult<Page> {
            Ok(Page::new())
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> SuiteResult<()> {
            Ok(())
        }
    }

    /// Scripted in-memory page. Tests stub element text/visibility and
    /// assert on the recorded interaction log.
    #[derive(Debug, Clone, Default)]
    pub struct Page {
        state: Arc<Mutex<MockState>>,
    }

    impl Page {
        /// Create an empty scripted page
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Stub the text content (and visibility) of a selector
        pub fn stub_text(&self, selector: &Selector, text: impl Into<String>) {
            let mut state = self.state.lock().unwrap();
            let key = selector.to_string();
            state.texts.insert(key.clone(), text.into());
            state.visible.insert(key);
        }

        /// Stub a selector as present and visible
        pub fn stub_visible(&self, selector: &Selector) {
            self.state
                .lock()
                .unwrap()
                .visible
                .insert(selector.to_string());
        }

        /// Stub the match count of a selector
        pub fn stub_count(&self, selector: &Selector, count: usize) {
            self.state
                .lock()
                .unwrap()
                .counts
                .insert(selector.to_string(), count);
        }

        /// Remove a stub, making the selector unmatched again
        pub fn clear_stub(&self, selector: &Selector) {
            let mut state = self.state.lock().unwrap();
            let key = selector.to_string();
            state.texts.remove(&key);
            state.visible.remove(&key);
            state.counts.remove(&key);
        }

        /// Interactions recorded so far
        #[must_use]
        pub fn actions(&self) -> Vec<MockAction> {
            self.state.lock().unwrap().actions.clone()
        }

        /// Navigate to a URL
        pub async fn goto(&mut self, url: &str) -> SuiteResult<()> {
            let mut state = self.state.lock().unwrap();
            state.url = url.to_string();
            state.actions.push(MockAction::Navigate(url.to_string()));
            Ok(())
        }

        /// URL of the last navigation
        #[must_use]
        pub fn current_url(&self) -> String {
            self.state.lock().unwrap().url.clone()
        }

        /// Text content of the first match, `None` if nothing matched
        pub async fn inner_text(&self, selector: &Selector) -> SuiteResult<Option<String>> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .texts
                .get(&selector.to_string())
                .cloned())
        }

        /// Number of elements matching the selector
        pub async fn count(&self, selector: &Selector) -> SuiteResult<usize> {
            let state = self.state.lock().unwrap();
            let key = selector.to_string();
            Ok(state
                .counts
                .get(&key)
                .copied()
                .unwrap_or_else(|| usize::from(state.visible.contains(&key))))
        }

        /// Whether the selector is stubbed as visible
        pub async fn is_visible(&self, selector: &Selector) -> SuiteResult<bool> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .visible
                .contains(&selector.to_string()))
        }

        /// Click the first match
        pub async fn click(&self, selector: &Selector) -> SuiteResult<()> {
            self.record_present(selector, MockAction::Click(selector.to_string()))
        }

        /// Type into the first match
        pub async fn type_text(&self, selector: &Selector, text: &str) -> SuiteResult<()> {
            self.record_present(
                selector,
                MockAction::Type {
                    selector: selector.to_string(),
                    text: text.to_string(),
                },
            )
        }

        /// Select a dropdown option
        pub async fn select_option(&self, selector: &Selector, option: &str) -> SuiteResult<()> {
            self.record_present(
                selector,
                MockAction::Select {
                    selector: selector.to_string(),
                    option: option.to_string(),
                },
            )
        }

        /// Set a checkbox/radio state
        pub async fn set_checked(&self, selector: &Selector, checked: bool) -> SuiteResult<()> {
            self.record_present(
                selector,
                MockAction::SetChecked {
                    selector: selector.to_string(),
                    checked,
                },
            )
        }

        /// Attach a file to an input
        pub async fn upload_file(&self, selector: &Selector, file: &Path) -> SuiteResult<()> {
            self.record_present(
                selector,
                MockAction::Upload {
                    selector: selector.to_string(),
                    file: file.to_path_buf(),
                },
            )
        }

        /// Clear all cookies
        pub async fn clear_cookies(&self) -> SuiteResult<()> {
            self.state
                .lock()
                .unwrap()
                .actions
                .push(MockAction::ClearCookies);
            Ok(())
        }

        /// Screenshot (empty in the scripted page)
        pub async fn screenshot(&self) -> SuiteResult<Vec<u8>> {
            Ok(vec![])
        }

        fn record_present(&self, selector: &Selector, action: MockAction) -> SuiteResult<()> {
            let mut state = self.state.lock().unwrap();
            if state.visible.contains(&selector.to_string()) {
                state.actions.push(action);
                Ok(())
            } else {
                Err(SuiteError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, MockAction, Page};
