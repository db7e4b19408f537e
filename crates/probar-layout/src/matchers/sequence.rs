//! Sequence matcher.

use serde::{Deserialize, Serialize};

use super::{require_pair, MatchDetail, MatchOutcome};
use crate::direction::Direction;
use crate::element::{get_boundaries, LayoutElement};
use crate::geometry::Rect;
use crate::result::LayoutResult;

/// Default gap tolerance between consecutive elements
pub const DEFAULT_SEQUENCE_TOLERANCE: f64 = 1.0;

/// Default expected gap between consecutive elements (touching)
pub const DEFAULT_SEQUENCE_DISTANCE: f64 = 0.0;

/// Options for sequence matchers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceOptions {
    /// Maximum deviation of a gap from `distance`
    pub tolerance: f64,
    /// Expected gap between consecutive elements
    pub distance: f64,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SEQUENCE_TOLERANCE,
            distance: DEFAULT_SEQUENCE_DISTANCE,
        }
    }
}

impl SequenceOptions {
    /// Create options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tolerance
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set expected distance
    #[must_use]
    pub const fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Whether a gap satisfies these options
    #[must_use]
    pub fn accepts_gap(&self, gap: f64) -> bool {
        (gap - self.distance).abs() <= self.tolerance
    }
}

/// Number of leading elements that form a valid sequence.
///
/// Equals `elements.len()` when every consecutive pair holds.
#[must_use]
pub fn find_sequence_run<E: LayoutElement>(
    elements: &[E],
    direction: Direction,
    options: &SequenceOptions,
) -> usize {
    let bounds: Vec<Rect> = elements.iter().map(|e| get_boundaries(e)).collect();
    bounds
        .windows(2)
        .position(|pair| {
            let gap = direction.near_edge(&pair[1]) - direction.far_edge(&pair[0]);
            !options.accepts_gap(gap)
        })
        .map_or(elements.len(), |broken_at| broken_at + 1)
}

/// Evaluate whether `elements` follow each other along `direction`.
///
/// # Errors
///
/// Returns [`crate::LayoutError::InvalidUsage`] for fewer than two elements,
/// whatever the polarity of the assertion.
pub fn assert_sequence<E: LayoutElement>(
    elements: &[E],
    direction: Direction,
    options: &SequenceOptions,
) -> LayoutResult<MatchOutcome> {
    require_pair(
        elements.len(),
        &format!("Expected elements to form {direction} sequence,"),
    )?;

    let run = find_sequence_run(elements, direction, options);
    Ok(MatchOutcome::new(
        run == elements.len(),
        format!("Expected elements to form {direction} sequence, but they didn't. ({run})"),
        format!("Expected elements not to form {direction} sequence, but they did."),
    )
    .with_detail(MatchDetail::Sequence {
        run,
        expected: elements.len(),
    }))
}

/// Left-to-right sequence
///
/// # Errors
///
/// See [`assert_sequence`].
pub fn in_horizontal_sequence<E: LayoutElement>(
    elements: &[E],
    options: &SequenceOptions,
) -> LayoutResult<MatchOutcome> {
    assert_sequence(elements, Direction::Horizontal, options)
}

/// Top-to-bottom sequence
///
/// # Errors
///
/// See [`assert_sequence`].
pub fn in_vertical_sequence<E: LayoutElement>(
    elements: &[E],
    options: &SequenceOptions,
) -> LayoutResult<MatchOutcome> {
    assert_sequence(elements, Direction::Vertical, options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Boxes of width 10 on one row, starting at the given lefts
    fn row(lefts: &[f64]) -> Vec<Rect> {
        lefts.iter().map(|&left| Rect::new(left, 0.0, 10.0, 10.0)).collect()
    }

    /// Boxes of height 10 in one column, starting at the given tops
    fn column(tops: &[f64]) -> Vec<Rect> {
        tops.iter().map(|&top| Rect::new(0.0, top, 10.0, 10.0)).collect()
    }

    mod run_tests {
        use super::*;

        #[test]
        fn test_touching_row_is_full_run() {
            let boxes = row(&[0.0, 10.0, 20.0]);
            let run = find_sequence_run(&boxes, Direction::Horizontal, &SequenceOptions::new());
            assert_eq!(run, 3);
        }

        #[test]
        fn test_gap_within_default_tolerance() {
            let boxes = row(&[0.0, 11.0, 22.0]);
            let run = find_sequence_run(&boxes, Direction::Horizontal, &SequenceOptions::new());
            assert_eq!(run, 3);
        }

        #[test]
        fn test_far_element_breaks_run() {
            let boxes = row(&[0.0, 10.0, 20.0, 34.0]);
            let run = find_sequence_run(&boxes, Direction::Horizontal, &SequenceOptions::new());
            assert_eq!(run, 3);
        }

        #[test]
        fn test_first_pair_broken() {
            let boxes = row(&[0.0, 50.0, 60.0]);
            let run = find_sequence_run(&boxes, Direction::Horizontal, &SequenceOptions::new());
            assert_eq!(run, 1);
        }

        #[test]
        fn test_overlap_beyond_tolerance_breaks_run() {
            let boxes = row(&[0.0, 5.0]);
            let run = find_sequence_run(&boxes, Direction::Horizontal, &SequenceOptions::new());
            assert_eq!(run, 1);
        }

        #[test]
        fn test_reverse_order_is_not_a_sequence() {
            let boxes = row(&[20.0, 10.0, 0.0]);
            let run = find_sequence_run(&boxes, Direction::Horizontal, &SequenceOptions::new());
            assert_eq!(run, 1);
        }

        #[test]
        fn test_vertical_uses_bottom_and_top() {
            let boxes = column(&[0.0, 10.0, 21.0]);
            let run = find_sequence_run(&boxes, Direction::Vertical, &SequenceOptions::new());
            assert_eq!(run, 3);
            let run = find_sequence_run(&boxes, Direction::Horizontal, &SequenceOptions::new());
            assert_eq!(run, 1);
        }

        #[test]
        fn test_distance_between() {
            let boxes = row(&[0.0, 13.0, 26.0]);
            let exact = SequenceOptions::new().with_tolerance(0.0).with_distance(3.0);
            assert_eq!(find_sequence_run(&boxes, Direction::Horizontal, &exact), 3);
            let too_small = SequenceOptions::new().with_tolerance(0.0).with_distance(1.0);
            assert_eq!(find_sequence_run(&boxes, Direction::Horizontal, &too_small), 1);
            let too_large = SequenceOptions::new().with_tolerance(0.0).with_distance(5.0);
            assert_eq!(find_sequence_run(&boxes, Direction::Horizontal, &too_large), 1);
        }
    }

    mod matcher_tests {
        use super::*;

        #[test]
        fn test_failure_message_reports_run() {
            let boxes = row(&[0.0, 10.0, 20.0, 34.0]);
            let outcome = in_horizontal_sequence(&boxes, &SequenceOptions::new()).unwrap();
            assert!(!outcome.passed);
            assert_eq!(
                outcome.message,
                "Expected elements to form horizontal sequence, but they didn't. (3)"
            );
            assert_eq!(
                outcome.detail,
                MatchDetail::Sequence {
                    run: 3,
                    expected: 4
                }
            );
        }

        #[test]
        fn test_tolerance_covers_far_gap() {
            let boxes = row(&[0.0, 10.0, 20.0, 34.0]);
            let options = SequenceOptions::new().with_tolerance(4.0);
            assert!(in_horizontal_sequence(&boxes, &options).unwrap().passed);
        }

        #[test]
        fn test_negated_message() {
            let boxes = column(&[0.0, 10.0]);
            let outcome = in_vertical_sequence(&boxes, &SequenceOptions::new()).unwrap();
            assert!(outcome.passed);
            assert_eq!(
                outcome.negated_message,
                "Expected elements not to form vertical sequence, but they did."
            );
        }

        #[test]
        fn test_usage_errors() {
            let empty: Vec<Rect> = vec![];
            let err = in_horizontal_sequence(&empty, &SequenceOptions::new()).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Expected elements to form horizontal sequence, but element list was empty"
            );
            let single = row(&[0.0]);
            let err = in_vertical_sequence(&single, &SequenceOptions::new()).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Expected elements to form vertical sequence, but element list had only one element"
            );
        }
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: SequenceOptions = serde_json::from_str(r#"{"tolerance": 4.0}"#).unwrap();
        assert_eq!(options.tolerance, 4.0);
        assert_eq!(options.distance, DEFAULT_SEQUENCE_DISTANCE);
        let options: SequenceOptions =
            serde_json::from_str(r#"{"tolerance": 0, "distance": 3}"#).unwrap();
        assert_eq!(options, SequenceOptions::new().with_tolerance(0.0).with_distance(3.0));
    }
}
