//! Containment matchers.

use super::MatchOutcome;
use crate::element::{get_boundaries, LayoutElement};
use crate::geometry::{is_inside, is_outside};

/// `element` lies fully within `boundary`
#[must_use]
pub fn inside_of<A, B>(element: &A, boundary: &B) -> MatchOutcome
where
    A: LayoutElement + ?Sized,
    B: LayoutElement + ?Sized,
{
    MatchOutcome::new(
        is_inside(&get_boundaries(element), &get_boundaries(boundary)),
        "Expected element to be inside of the other, but it wasn't.",
        "Expected element not to be inside of the other, but it was.",
    )
}

/// No corner of `element` lies within `boundary`
#[must_use]
pub fn outside_of<A, B>(element: &A, boundary: &B) -> MatchOutcome
where
    A: LayoutElement + ?Sized,
    B: LayoutElement + ?Sized,
{
    MatchOutcome::new(
        is_outside(&get_boundaries(element), &get_boundaries(boundary)),
        "Expected element to be outside of the other, but it wasn't.",
        "Expected element not to be outside of the other, but it was.",
    )
}
