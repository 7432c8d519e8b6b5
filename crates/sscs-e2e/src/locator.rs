//! Selector abstraction for locating elements on the application's pages.
//!
//! The application under test is addressed through CSS/XPath selectors and
//! ARIA roles, so the selector types mirror those addressing modes. Each
//! variant renders to a JavaScript query expression evaluated in the page,
//! which keeps one interaction path for every selector kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default timeout for element auto-waiting (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default polling interval for element auto-waiting (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g. `button.button-primary`)
    Css(String),
    /// XPath selector
    XPath(String),
    /// Element whose text content contains the given string
    Text(String),
    /// ARIA role with accessible name (e.g. `button` named "Submit")
    Role {
        /// ARIA role
        role: String,
        /// Accessible name
        name: String,
    },
    /// CSS selector filtered by contained text
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::XPath(selector.into())
    }

    /// Create a text selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create an ARIA role selector
    #[must_use]
    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    /// Create a CSS selector filtered by contained text
    #[must_use]
    pub fn css_with_text(css: impl Into<String>, text: impl Into<String>) -> Self {
        Self::CssWithText {
            css: css.into(),
            text: text.into(),
        }
    }

    /// Convert to a JavaScript expression resolving to the first matching
    /// element (or `null`).
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue")
            }
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).find(el => el.textContent.includes({t:?}))")
            }
            Self::Role { role, name } => {
                format!(
                    "Array.from(document.querySelectorAll('[role={role:?}], {tag}')).find(el => (el.textContent || el.getAttribute('aria-label') || '').includes({name:?}))",
                    tag = role_fallback_tag(role),
                )
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))")
            }
        }
    }

    /// Convert to a JavaScript expression resolving to the number of
    /// matching elements.
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null).snapshotLength")
            }
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).filter(el => el.textContent.includes({t:?})).length")
            }
            Self::Role { role, name } => {
                format!(
                    "Array.from(document.querySelectorAll('[role={role:?}], {tag}')).filter(el => (el.textContent || el.getAttribute('aria-label') || '').includes({name:?})).length",
                    tag = role_fallback_tag(role),
                )
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length")
            }
        }
    }

    /// Convert to a JavaScript expression resolving to `true` when the
    /// first match exists and takes up layout space.
    #[must_use]
    pub fn to_visible_query(&self) -> String {
        format!(
            "(() => {{ const el = {q}; return !!el && el.getClientRects().length > 0; }})()",
            q = self.to_query(),
        )
    }
}

/// HTML tag implied by an ARIA role, for pages that rely on native
/// semantics rather than explicit `role` attributes.
fn role_fallback_tag(role: &str) -> &str {
    match role {
        "button" => "button, input[type=submit]",
        "link" => "a",
        "heading" => "h1, h2, h3, h4",
        "tab" => "div.mat-tab-label",
        _ => "*",
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css={s}"),
            Self::XPath(s) => write!(f, "xpath={s}"),
            Self::Text(t) => write!(f, "text={t}"),
            Self::Role { role, name } => write!(f, "role={role}[name={name}]"),
            Self::CssWithText { css, text } => write!(f, "css={css}[text={text}]"),
        }
    }
}

/// Options controlling auto-waiting before an interaction
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Timeout for auto-waiting
    pub timeout: Duration,
    /// Polling interval for auto-waiting
    pub poll_interval: Duration,
    /// Whether the element must be visible before interacting
    pub visible: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            visible: true,
        }
    }
}

impl LocatorOptions {
    /// Set the auto-wait timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
