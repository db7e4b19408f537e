//! Presence matchers.

use super::MatchOutcome;
use crate::element::LayoutElement;

/// An element is present when one of its client rects covers any pixels.
///
/// A missing element is never present.
#[must_use]
pub fn is_present<E: LayoutElement + ?Sized>(element: Option<&E>) -> bool {
    element.is_some_and(|element| element.client_rects().iter().any(|rect| rect.has_area()))
}

/// Element exists and is rendered
#[must_use]
pub fn present<E: LayoutElement + ?Sized>(element: Option<&E>) -> MatchOutcome {
    MatchOutcome::new(
        is_present(element),
        "Element expected to be present.",
        "Element expected to be absent.",
    )
}

/// Element is missing or not rendered
#[must_use]
pub fn absent<E: LayoutElement + ?Sized>(element: Option<&E>) -> MatchOutcome {
    MatchOutcome::new(
        !is_present(element),
        "Element expected to be absent.",
        "Element expected to be present.",
    )
}
