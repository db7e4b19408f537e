//! Polling until a layout assertion holds.
//!
//! The assertion runs once immediately. While it keeps failing it is retried
//! every poll interval; when the timeout has elapsed after a failed attempt,
//! the last failure is returned wrapped in [`LayoutError::WaitTimeout`].

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::result::{LayoutError, LayoutResult};

/// Default timeout for wait operations (500ms)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 500;

/// Default polling interval (10ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

/// Interval used when polling "once per frame" (~60 fps)
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Options for wait operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds; 0 polls once per frame
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

    /// Get the effective poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        if self.poll_interval_ms == 0 {
            Duration::from_millis(FRAME_INTERVAL_MS)
        } else {
            Duration::from_millis(self.poll_interval_ms)
        }
    }
}

/// Outcome of a successful wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitReport {
    /// Number of times the assertion ran, including the passing one
    pub attempts: usize,
    /// Time from the first attempt to the passing one
    pub elapsed: Duration,
}

/// Run `assertion` until it passes or `options.timeout_ms` elapses.
///
/// # Errors
///
/// [`LayoutError::WaitTimeout`] carrying the last failure once the timeout
/// has elapsed.
pub fn wait_for<F>(mut assertion: F, options: &WaitOptions) -> LayoutResult<WaitReport>
where
    F: FnMut() -> LayoutResult<()>,
{
    let start = Instant::now();
    let mut attempts = 0;

    loop {
        attempts += 1;
        let failure = match assertion() {
            Ok(()) => {
                return Ok(WaitReport {
                    attempts,
                    elapsed: start.elapsed(),
                })
            }
            Err(failure) => failure,
        };
        tracing::trace!(attempts, error = %failure, "assertion not met yet");

        if start.elapsed() >= options.timeout() {
            tracing::warn!(
                timeout_ms = options.timeout_ms,
                attempts,
                "wait timed out"
            );
            return Err(LayoutError::WaitTimeout {
                ms: options.timeout_ms,
                attempts,
                last: Box::new(failure),
            });
        }

        std::thread::sleep(options.poll_interval());
    }
}

/// Run `assertion` against `root` once per frame until it passes.
///
/// # Errors
///
/// See [`wait_for`].
pub fn wait_for_dom<R, F>(root: &R, mut assertion: F, timeout_ms: u64) -> LayoutResult<WaitReport>
where
    R: ?Sized,
    F: FnMut(&R) -> LayoutResult<()>,
{
    let options = WaitOptions::new()
        .with_timeout(timeout_ms)
        .with_poll_interval(0);
    wait_for(|| assertion(root), &options)
}
