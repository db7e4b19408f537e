//! Result and error types for probar-layout.

use thiserror::Error;

use crate::matchers::MatchDetail;

/// Result type for probar-layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur in probar-layout
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Matcher invoked with input it cannot judge (empty list, wrong operand)
    #[error("{message}")]
    InvalidUsage {
        /// Error message
        message: String,
    },

    /// Matcher predicate did not hold for the active polarity
    #[error("{message}")]
    AssertionFailed {
        /// Message for the active polarity
        message: String,
        /// Actual/expected payload for diff reporting
        detail: MatchDetail,
    },

    /// Attribute selector matched more than one element
    #[error("Selector \"{selector}\" ambiguous ({matches} matches)")]
    AmbiguousSelector {
        /// Selector token that matched ambiguously
        selector: String,
        /// Number of matching elements
        matches: usize,
    },

    /// Synthetic event aimed at a missing element
    #[error("Trying to trigger \"{event}\" on \"null\" element.")]
    NullTarget {
        /// Event type
        event: String,
    },

    /// Value change requested on an element without a value
    #[error("Trying to trigger \"{event}\" event on non-input element <{tag}>")]
    NonInputElement {
        /// Event type
        event: String,
        /// Upper-cased tag name
        tag: String,
    },

    /// ASCII layout fixture could not be parsed
    #[error("Invalid layout fixture: {message}")]
    InvalidFixture {
        /// Error message
        message: String,
    },

    /// Condition still failing when the wait timed out
    #[error("Condition not met after {ms}ms ({attempts} attempts): {last}")]
    WaitTimeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Number of attempts made
        attempts: usize,
        /// Last failure reported by the condition
        #[source]
        last: Box<LayoutError>,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    /// Create an invalid usage error
    #[must_use]
    pub fn invalid_usage(message: impl Into<String>) -> Self {
        Self::InvalidUsage {
            message: message.into(),
        }
    }

    /// Create an assertion failure
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>, detail: MatchDetail) -> Self {
        Self::AssertionFailed {
            message: message.into(),
            detail,
        }
    }

    /// Create an invalid fixture error
    #[must_use]
    pub fn invalid_fixture(message: impl Into<String>) -> Self {
        Self::InvalidFixture {
            message: message.into(),
        }
    }

    /// Check if this is an assertion failure (as opposed to misuse)
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }

    /// Diff payload of an assertion failure
    #[must_use]
    pub const fn detail(&self) -> Option<&MatchDetail> {
        match self {
            Self::AssertionFailed { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
