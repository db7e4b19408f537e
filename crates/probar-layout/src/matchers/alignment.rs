//! Alignment matcher.

use serde::{Deserialize, Serialize};

use super::{adverb, require_pair, MatchDetail, MatchOutcome};
use crate::direction::{Alignment, HorizontalAlignment, VerticalAlignment};
use crate::element::{get_boundaries, LayoutElement};
use crate::misalignment::detect_misalignment;
use crate::result::LayoutResult;

/// Default alignment tolerance (exact match)
pub const DEFAULT_ALIGNMENT_TOLERANCE: f64 = 0.0;

/// Options for alignment matchers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentOptions {
    /// Maximum deviation between edges still considered aligned
    pub tolerance: f64,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_ALIGNMENT_TOLERANCE,
        }
    }
}

impl AlignmentOptions {
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
}

/// Evaluate whether `elements` line up on the edge chosen by `alignment`.
///
/// # Errors
///
/// Returns [`crate::LayoutError::InvalidUsage`] for fewer than two elements,
/// whatever the polarity of the assertion.
pub fn assert_alignment<E: LayoutElement>(
    elements: &[E],
    alignment: Alignment,
    options: &AlignmentOptions,
) -> LayoutResult<MatchOutcome> {
    let describe = format!(
        "Expected elements to be {} aligned to \"{alignment}\"",
        adverb(alignment.direction())
    );
    require_pair(elements.len(), &describe)?;

    let edges: Vec<f64> = elements
        .iter()
        .map(|element| alignment.edge(&get_boundaries(element)))
        .collect();
    let misaligned = detect_misalignment(&edges, options.tolerance);
    let listed = misaligned
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    Ok(MatchOutcome::new(
        misaligned.is_empty(),
        format!("{describe} but some weren't. ([{listed}])"),
        format!(
            "Expected elements not to be {} aligned to \"{alignment}\" but they were.",
            adverb(alignment.direction())
        ),
    )
    .with_detail(MatchDetail::Misaligned(misaligned)))
}

/// Vertical alignment (`top`, `center`, `bottom`)
///
/// # Errors
///
/// See [`assert_alignment`].
pub fn vertically_aligned<E: LayoutElement>(
    elements: &[E],
    kind: VerticalAlignment,
    tolerance: f64,
) -> LayoutResult<MatchOutcome> {
    assert_alignment(
        elements,
        kind.into(),
        &AlignmentOptions::new().with_tolerance(tolerance),
    )
}

/// Horizontal alignment (`left`, `center`, `right`)
///
/// # Errors
///
/// See [`assert_alignment`].
pub fn horizontally_aligned<E: LayoutElement>(
    elements: &[E],
    kind: HorizontalAlignment,
    tolerance: f64,
) -> LayoutResult<MatchOutcome> {
    assert_alignment(
        elements,
        kind.into(),
        &AlignmentOptions::new().with_tolerance(tolerance),
    )
}
