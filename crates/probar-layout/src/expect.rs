//! Fluent expectations over elements, element lists and box values.
//!
//! ```ignore
//! expect(&a).to_be_inside_of(&frame)?;
//! expect(&a).not().to_be_outside_of(&frame)?;
//! expect(&a).width().to_be_greater_than(&b)?;
//! expect_all(&[&a, &b, &d]).to_be_vertically_aligned(VerticalAlignment::Top, 0.0)?;
//! expect_all(&[&a, &b, &c]).to_be_in_horizontal_sequence(&SequenceOptions::new())?;
//! ```
//!
//! Each expectation is a plain value: the subject, plus a polarity flag that
//! [`not`](ElementExpectation::not) flips. Nothing is registered globally.

use std::marker::PhantomData;

use crate::direction::{Alignment, Direction, HorizontalAlignment, VerticalAlignment};
use crate::element::{get_boundaries, LayoutElement, Operand};
use crate::geometry::{BoxProperty, Rect};
use crate::matchers::{
    absent, assert_alignment, assert_sequence, bigger_than, compare_numbers, higher_than,
    inside_of, outside_of, present, wider_than, AlignmentOptions, NumericComparison,
    SequenceOptions,
};
use crate::result::{LayoutError, LayoutResult};

/// Start an expectation about one element
#[must_use]
pub fn expect<E: LayoutElement + ?Sized>(element: &E) -> ElementExpectation<'_, E> {
    ElementExpectation {
        element,
        negated: false,
    }
}

/// Start an expectation about an element that may not exist
#[must_use]
pub fn expect_optional<E: LayoutElement + ?Sized>(
    element: Option<&E>,
) -> PresenceExpectation<'_, E> {
    PresenceExpectation {
        element,
        negated: false,
    }
}

/// Start an expectation about an ordered list of elements
#[must_use]
pub fn expect_all<E: LayoutElement>(elements: &[E]) -> ElementListExpectation<'_, E> {
    ElementListExpectation {
        elements,
        negated: false,
    }
}

/// Start an expectation about a plain number
#[must_use]
pub fn expect_value(value: f64) -> ValueExpectation<'static, Rect> {
    ValueExpectation::new(Subject::Number(value), false)
}

/// Numeric subject of a [`ValueExpectation`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subject {
    /// Value read from an element's box, remembering which property it was
    TaggedNumber {
        /// Property value
        value: f64,
        /// Property it was read from
        property: BoxProperty,
    },
    /// Plain number
    Number(f64),
}

impl Subject {
    /// The numeric value
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::TaggedNumber { value, .. } | Self::Number(value) => *value,
        }
    }

    /// The box property tag, if any
    #[must_use]
    pub const fn property(&self) -> Option<BoxProperty> {
        match self {
            Self::TaggedNumber { property, .. } => Some(*property),
            Self::Number(_) => None,
        }
    }
}

/// Expectation about a single element
#[derive(Debug, Clone, Copy)]
pub struct ElementExpectation<'a, E: ?Sized> {
    element: &'a E,
    negated: bool,
}

impl<'a, E: LayoutElement + ?Sized> ElementExpectation<'a, E> {
    /// Flip the polarity of the next matcher
    #[must_use]
    pub const fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Whether the expectation is negated
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Element lies fully within `boundary`
    pub fn to_be_inside_of<B: LayoutElement + ?Sized>(&self, boundary: &B) -> LayoutResult<()> {
        inside_of(self.element, boundary).check(self.negated)
    }

    /// No corner of the element lies within `boundary`
    pub fn to_be_outside_of<B: LayoutElement + ?Sized>(&self, boundary: &B) -> LayoutResult<()> {
        outside_of(self.element, boundary).check(self.negated)
    }

    /// Element is strictly wider than `other`
    pub fn to_be_wider_than<B: LayoutElement + ?Sized>(&self, other: &B) -> LayoutResult<()> {
        wider_than(self.element, other).check(self.negated)
    }

    /// Element is strictly taller than `other`
    pub fn to_be_higher_than<B: LayoutElement + ?Sized>(&self, other: &B) -> LayoutResult<()> {
        higher_than(self.element, other).check(self.negated)
    }

    /// Element covers a strictly larger area than `other`
    pub fn to_be_bigger_than<B: LayoutElement + ?Sized>(&self, other: &B) -> LayoutResult<()> {
        bigger_than(self.element, other).check(self.negated)
    }

    /// Element is rendered
    pub fn to_be_present(&self) -> LayoutResult<()> {
        present(Some(self.element)).check(self.negated)
    }

    /// Element is not rendered
    pub fn to_be_absent(&self) -> LayoutResult<()> {
        absent(Some(self.element)).check(self.negated)
    }

    /// Rebind the subject to one property of the element's box
    #[must_use]
    pub fn property(self, property: BoxProperty) -> ValueExpectation<'a, E> {
        let value = get_boundaries(self.element).property(property);
        ValueExpectation::new(Subject::TaggedNumber { value, property }, self.negated)
    }

    /// Rebind to the box width
    #[must_use]
    pub fn width(self) -> ValueExpectation<'a, E> {
        self.property(BoxProperty::Width)
    }

    /// Rebind to the box height
    #[must_use]
    pub fn height(self) -> ValueExpectation<'a, E> {
        self.property(BoxProperty::Height)
    }

    /// Rebind to the top edge
    #[must_use]
    pub fn top(self) -> ValueExpectation<'a, E> {
        self.property(BoxProperty::Top)
    }

    /// Rebind to the bottom edge
    #[must_use]
    pub fn bottom(self) -> ValueExpectation<'a, E> {
        self.property(BoxProperty::Bottom)
    }

    /// Rebind to the left edge
    #[must_use]
    pub fn left(self) -> ValueExpectation<'a, E> {
        self.property(BoxProperty::Left)
    }

    /// Rebind to the right edge
    #[must_use]
    pub fn right(self) -> ValueExpectation<'a, E> {
        self.property(BoxProperty::Right)
    }
}

/// Expectation about an element that may be missing
#[derive(Debug, Clone, Copy)]
pub struct PresenceExpectation<'a, E: ?Sized> {
    element: Option<&'a E>,
    negated: bool,
}

impl<E: LayoutElement + ?Sized> PresenceExpectation<'_, E> {
    /// Flip the polarity of the next matcher
    #[must_use]
    pub const fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Element exists and is rendered
    pub fn to_be_present(&self) -> LayoutResult<()> {
        present(self.element).check(self.negated)
    }

    /// Element is missing or not rendered
    pub fn to_be_absent(&self) -> LayoutResult<()> {
        absent(self.element).check(self.negated)
    }
}

/// Expectation about an ordered list of elements
#[derive(Debug, Clone, Copy)]
pub struct ElementListExpectation<'a, E> {
    elements: &'a [E],
    negated: bool,
}

impl<E: LayoutElement> ElementListExpectation<'_, E> {
    /// Flip the polarity of the next matcher
    #[must_use]
    pub const fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Elements share a top edge, vertical center or bottom edge
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidUsage`] for fewer than two elements, in either
    /// polarity; [`LayoutError::AssertionFailed`] when the check fails.
    pub fn to_be_vertically_aligned(
        &self,
        kind: VerticalAlignment,
        tolerance: f64,
    ) -> LayoutResult<()> {
        self.aligned(kind.into(), tolerance)
    }

    /// Elements share a left edge, horizontal center or right edge
    ///
    /// # Errors
    ///
    /// See [`Self::to_be_vertically_aligned`].
    pub fn to_be_horizontally_aligned(
        &self,
        kind: HorizontalAlignment,
        tolerance: f64,
    ) -> LayoutResult<()> {
        self.aligned(kind.into(), tolerance)
    }

    /// Elements follow each other left to right
    ///
    /// # Errors
    ///
    /// See [`Self::to_be_vertically_aligned`].
    pub fn to_be_in_horizontal_sequence(&self, options: &SequenceOptions) -> LayoutResult<()> {
        assert_sequence(self.elements, Direction::Horizontal, options)?.check(self.negated)
    }

    /// Elements follow each other top to bottom
    ///
    /// # Errors
    ///
    /// See [`Self::to_be_vertically_aligned`].
    pub fn to_be_in_vertical_sequence(&self, options: &SequenceOptions) -> LayoutResult<()> {
        assert_sequence(self.elements, Direction::Vertical, options)?.check(self.negated)
    }

    fn aligned(&self, alignment: Alignment, tolerance: f64) -> LayoutResult<()> {
        let options = AlignmentOptions::new().with_tolerance(tolerance);
        assert_alignment(self.elements, alignment, &options)?.check(self.negated)
    }
}

/// Expectation about a number, possibly read from an element's box
#[derive(Debug, Clone, Copy)]
pub struct ValueExpectation<'a, E: ?Sized> {
    subject: Subject,
    negated: bool,
    element: PhantomData<&'a E>,
}

impl<E: LayoutElement + ?Sized> ValueExpectation<'_, E> {
    fn new(subject: Subject, negated: bool) -> Self {
        Self {
            subject,
            negated,
            element: PhantomData,
        }
    }

    /// Flip the polarity of the next matcher
    #[must_use]
    pub const fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Current subject
    #[must_use]
    pub const fn subject(&self) -> Subject {
        self.subject
    }

    /// Resolve the operand against the subject's tag, then compare numbers
    fn compare<'b>(
        &self,
        comparison: NumericComparison,
        operand: Operand<'b, E>,
    ) -> LayoutResult<()>
    where
        E: 'b,
    {
        let expected = operand.resolve(self.subject.property()).ok_or_else(|| {
            LayoutError::invalid_usage(format!(
                "Cannot compare {} against an element without selecting a box property",
                self.subject.value()
            ))
        })?;
        compare_numbers(comparison, self.subject.value(), expected).check(self.negated)
    }

    /// Strictly greater than a number, or than the same property of an element
    pub fn to_be_greater_than<'b>(&self, operand: impl Into<Operand<'b, E>>) -> LayoutResult<()>
    where
        E: 'b,
    {
        self.compare(NumericComparison::Above, operand.into())
    }

    /// Strictly less than a number, or than the same property of an element
    pub fn to_be_less_than<'b>(&self, operand: impl Into<Operand<'b, E>>) -> LayoutResult<()>
    where
        E: 'b,
    {
        self.compare(NumericComparison::Below, operand.into())
    }

    /// Greater than or equal
    pub fn to_be_at_least<'b>(&self, operand: impl Into<Operand<'b, E>>) -> LayoutResult<()>
    where
        E: 'b,
    {
        self.compare(NumericComparison::AtLeast, operand.into())
    }

    /// Less than or equal
    pub fn to_be_at_most<'b>(&self, operand: impl Into<Operand<'b, E>>) -> LayoutResult<()>
    where
        E: 'b,
    {
        self.compare(NumericComparison::AtMost, operand.into())
    }

    /// Same as [`Self::to_be_greater_than`]
    pub fn to_be_above<'b>(&self, operand: impl Into<Operand<'b, E>>) -> LayoutResult<()>
    where
        E: 'b,
    {
        self.compare(NumericComparison::Above, operand.into())
    }

    /// Same as [`Self::to_be_less_than`]
    pub fn to_be_below<'b>(&self, operand: impl Into<Operand<'b, E>>) -> LayoutResult<()>
    where
        E: 'b,
    {
        self.compare(NumericComparison::Below, operand.into())
    }

    /// Exactly equal
    pub fn to_equal<'b>(&self, operand: impl Into<Operand<'b, E>>) -> LayoutResult<()>
    where
        E: 'b,
    {
        self.compare(NumericComparison::Equal, operand.into())
    }
}
