//! Comparative matchers and the shared numeric comparison.

use serde::{Deserialize, Serialize};

use super::{MatchDetail, MatchOutcome};
use crate::element::{get_boundaries, LayoutElement};
use crate::geometry::Rect;

/// Numeric comparison applied once both operands are plain numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericComparison {
    /// `actual > expected` (also `greaterThan`)
    Above,
    /// `actual >= expected`
    AtLeast,
    /// `actual < expected` (also `lessThan`)
    Below,
    /// `actual <= expected`
    AtMost,
    /// `actual == expected`
    Equal,
}

impl NumericComparison {
    /// Whether the comparison holds
    #[must_use]
    pub fn holds(&self, actual: f64, expected: f64) -> bool {
        match self {
            Self::Above => actual > expected,
            Self::AtLeast => actual >= expected,
            Self::Below => actual < expected,
            Self::AtMost => actual <= expected,
            Self::Equal => actual == expected,
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            Self::Above => "to be above",
            Self::AtLeast => "to be at least",
            Self::Below => "to be below",
            Self::AtMost => "to be at most",
            Self::Equal => "to equal",
        }
    }

    fn negated_phrase(&self) -> &'static str {
        match self {
            Self::Above => "to be at most",
            Self::AtLeast => "to be below",
            Self::Below => "to be at least",
            Self::AtMost => "to be above",
            Self::Equal => "to not equal",
        }
    }

    /// Evaluate against two plain numbers
    #[must_use]
    pub fn evaluate(&self, actual: f64, expected: f64) -> MatchOutcome {
        MatchOutcome::new(
            self.holds(actual, expected),
            format!("expected {actual} {} {expected}", self.phrase()),
            format!("expected {actual} {} {expected}", self.negated_phrase()),
        )
        .with_detail(MatchDetail::Values { actual, expected })
    }
}

/// Shared numeric comparison primitive
#[must_use]
pub fn compare_numbers(comparison: NumericComparison, actual: f64, expected: f64) -> MatchOutcome {
    comparison.evaluate(actual, expected)
}

fn relate<A, B>(
    element: &A,
    compared_to: &B,
    measure: fn(&Rect) -> f64,
    adjective: &str,
) -> MatchOutcome
where
    A: LayoutElement + ?Sized,
    B: LayoutElement + ?Sized,
{
    let actual = measure(&get_boundaries(element));
    let expected = measure(&get_boundaries(compared_to));
    MatchOutcome::new(
        actual > expected,
        format!("Expected element to be {adjective} than the other, but it wasn't."),
        format!("Expected element not to be {adjective} than the other, but it was."),
    )
    .with_detail(MatchDetail::Values { actual, expected })
}

/// Strictly wider
#[must_use]
pub fn wider_than<A, B>(element: &A, compared_to: &B) -> MatchOutcome
where
    A: LayoutElement + ?Sized,
    B: LayoutElement + ?Sized,
{
    relate(element, compared_to, |rect| rect.width, "wider")
}

/// Strictly taller
#[must_use]
pub fn higher_than<A, B>(element: &A, compared_to: &B) -> MatchOutcome
where
    A: LayoutElement + ?Sized,
    B: LayoutElement + ?Sized,
{
    relate(element, compared_to, |rect| rect.height, "higher")
}

/// Strictly larger area
#[must_use]
pub fn bigger_than<A, B>(element: &A, compared_to: &B) -> MatchOutcome
where
    A: LayoutElement + ?Sized,
    B: LayoutElement + ?Sized,
{
    relate(element, compared_to, Rect::area, "bigger")
}
