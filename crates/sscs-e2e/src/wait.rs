//! Wait mechanisms.
//!
//! Every synchronization point in the suite is a bounded poll over an
//! observable condition. Fixed-duration sleeps are not a synchronization
//! mechanism here; the single exception is the case API's post-token
//! settle delay, which that contract pins at three seconds.

use crate::result::{SuiteError, SuiteResult};
use std::future::Future;
use std::time::{Duration, Instant};

/// Default timeout for wait operations (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for wait operations
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Result of a successful wait
#[derive(Debug, Clone)]
pub struct WaitOutcome {
    /// Time spent waiting
    pub elapsed: Duration,
    /// Description of what was waited for
    pub waited_for: String,
}

/// Poll an async predicate until it reports true or the bound elapses.
///
/// The predicate re-observes page or API state on every call; its error
/// aborts the wait immediately rather than being retried, so a broken
/// session fails fast instead of burning the whole timeout.
pub async fn poll_until<F, Fut>(
    description: impl Into<String>,
    options: &WaitOptions,
    mut condition: F,
) -> SuiteResult<WaitOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SuiteResult<bool>>,
{
    let description = description.into();
    let start = Instant::now();
    let timeout = options.timeout();
    let poll_interval = options.poll_interval();

    loop {
        if condition().await? {
            return Ok(WaitOutcome {
                elapsed: start.elapsed(),
                waited_for: description,
            });
        }
        if start.elapsed() >= timeout {
            return Err(SuiteError::Timeout {
                ms: options.timeout_ms,
                waiting_for: description,
            });
        }
        tokio::time::sleep(poll_interval).await;
    }
}
