//! Layout matchers.
//!
//! Every matcher evaluates to a [`MatchOutcome`] carrying the predicate
//! value and one message per polarity. [`MatchOutcome::check`] applies the
//! polarity and turns a mismatch into [`LayoutError::AssertionFailed`].

mod alignment;
mod compare;
mod placement;
mod presence;
mod sequence;

pub use alignment::{
    assert_alignment, horizontally_aligned, vertically_aligned, AlignmentOptions,
    DEFAULT_ALIGNMENT_TOLERANCE,
};
pub use compare::{
    bigger_than, compare_numbers, higher_than, wider_than, NumericComparison,
};
pub use placement::{inside_of, outside_of};
pub use presence::{absent, is_present, present};
pub use sequence::{
    assert_sequence, find_sequence_run, in_horizontal_sequence, in_vertical_sequence,
    SequenceOptions, DEFAULT_SEQUENCE_DISTANCE, DEFAULT_SEQUENCE_TOLERANCE,
};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::result::{LayoutError, LayoutResult};

/// Machine-inspectable payload of a matcher evaluation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum MatchDetail {
    /// Nothing beyond the message
    #[default]
    None,
    /// Indices of misaligned elements, in input order
    Misaligned(Vec<usize>),
    /// Length of the valid sequence run against the list length
    Sequence {
        /// Elements that formed a valid run
        run: usize,
        /// Elements in the list
        expected: usize,
    },
    /// Numeric comparison operands
    Values {
        /// Subject value
        actual: f64,
        /// Compared-to value
        expected: f64,
    },
}

/// Result of evaluating a matcher, before polarity is applied
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Whether the predicate holds
    pub passed: bool,
    /// Message when the predicate was expected to hold but didn't
    pub message: String,
    /// Message when the predicate was expected not to hold but did
    pub negated_message: String,
    /// Diff payload
    pub detail: MatchDetail,
}

impl MatchOutcome {
    /// Create an outcome with both polarity messages
    #[must_use]
    pub fn new(
        passed: bool,
        message: impl Into<String>,
        negated_message: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            message: message.into(),
            negated_message: negated_message.into(),
            detail: MatchDetail::None,
        }
    }

    /// Attach a diff payload
    #[must_use]
    pub fn with_detail(mut self, detail: MatchDetail) -> Self {
        self.detail = detail;
        self
    }

    /// Apply polarity
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::AssertionFailed`] when the predicate value does
    /// not match the expected polarity.
    pub fn check(self, negated: bool) -> LayoutResult<()> {
        if self.passed != negated {
            return Ok(());
        }
        let message = if negated {
            self.negated_message
        } else {
            self.message
        };
        tracing::debug!(negated, detail = ?self.detail, "{message}");
        Err(LayoutError::assertion_failed(message, self.detail))
    }
}

/// Reject lists that are too short for a relational matcher.
///
/// `describe` renders the start of the message, e.g. `Expected elements to
/// form horizontal sequence,`.
pub(crate) fn require_pair(len: usize, describe: &str) -> LayoutResult<()> {
    match len {
        0 => Err(LayoutError::invalid_usage(format!(
            "{describe} but element list was empty"
        ))),
        1 => Err(LayoutError::invalid_usage(format!(
            "{describe} but element list had only one element"
        ))),
        _ => Ok(()),
    }
}

/// `vertically` / `horizontally`
pub(crate) fn adverb(direction: Direction) -> String {
    format!("{direction}ly")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod outcome_tests {
        use super::*;

        fn outcome(passed: bool) -> MatchOutcome {
            MatchOutcome::new(passed, "positive", "negative")
        }

        #[test]
        fn test_pass_positive() {
            assert!(outcome(true).check(false).is_ok());
        }

        #[test]
        fn test_fail_negated() {
            assert!(outcome(false).check(true).is_ok());
        }

        #[test]
        fn test_fail_positive_uses_message() {
            let err = outcome(false).check(false).unwrap_err();
            assert_eq!(err.to_string(), "positive");
        }

        #[test]
        fn test_pass_negated_uses_negated_message() {
            let err = outcome(true).check(true).unwrap_err();
            assert_eq!(err.to_string(), "negative");
        }

        #[test]
        fn test_detail_travels_with_error() {
            let err = outcome(false)
                .with_detail(MatchDetail::Sequence {
                    run: 3,
                    expected: 4,
                })
                .check(false)
                .unwrap_err();
            assert_eq!(
                err.detail(),
                Some(&MatchDetail::Sequence {
                    run: 3,
                    expected: 4
                })
            );
        }
    }

    mod usage_tests {
        use super::*;

        #[test]
        fn test_require_pair() {
            let empty = require_pair(0, "Expected things,").unwrap_err();
            assert_eq!(empty.to_string(), "Expected things, but element list was empty");
            let single = require_pair(1, "Expected things,").unwrap_err();
            assert_eq!(
                single.to_string(),
                "Expected things, but element list had only one element"
            );
            assert!(require_pair(2, "Expected things,").is_ok());
        }

        #[test]
        fn test_adverb() {
            assert_eq!(adverb(Direction::Vertical), "vertically");
            assert_eq!(adverb(Direction::Horizontal), "horizontally");
        }
    }

    mod repeat_tests {
        use super::*;
        use crate::direction::VerticalAlignment;
        use crate::geometry::Rect;

        fn row() -> Vec<Rect> {
            vec![
                Rect::new(0.0, 0.0, 10.0, 10.0),
                Rect::new(10.0, 0.0, 10.0, 10.0),
                Rect::new(25.0, 3.0, 10.0, 10.0),
            ]
        }

        #[test]
        fn test_matchers_repeat_on_unchanged_boxes() {
            let boxes = row();
            let alignment = VerticalAlignment::Top.into();
            let options = AlignmentOptions::new();
            let first = assert_alignment(&boxes, alignment, &options).unwrap();
            let second = assert_alignment(&boxes, alignment, &options).unwrap();
            assert!(!first.passed);
            assert_eq!(first, second);

            let options = SequenceOptions::new();
            let first = assert_sequence(&boxes, Direction::Horizontal, &options).unwrap();
            let second = assert_sequence(&boxes, Direction::Horizontal, &options).unwrap();
            assert!(!first.passed);
            assert_eq!(first, second);

            let frame = Rect::new(0.0, 0.0, 40.0, 20.0);
            assert!(inside_of(&boxes[2], &frame).passed);
            assert_eq!(inside_of(&boxes[2], &frame), inside_of(&boxes[2], &frame));
        }

        #[test]
        fn test_check_repeats_verdict() {
            let boxes = row();
            let options = SequenceOptions::new();
            let verdict = || {
                assert_sequence(&boxes, Direction::Horizontal, &options)
                    .and_then(|outcome| outcome.check(false))
                    .map_err(|err| err.to_string())
            };
            assert_eq!(verdict(), verdict());
            assert!(verdict().is_err());
        }
    }
}
