//! Bounding-box provider seam between the matchers and the host.

use crate::geometry::{BoxProperty, Rect};

/// Anything the host can report rendered geometry for.
///
/// Implementations must query the host on every call; matchers never cache
/// boxes, so each assertion sees the layout at the moment it runs.
pub trait LayoutElement {
    /// Equivalent of `getBoundingClientRect()`
    fn bounding_client_rect(&self) -> Rect;

    /// Equivalent of `getClientRects()`; one rect per line box / fragment.
    ///
    /// Defaults to the bounding rect alone.
    fn client_rects(&self) -> Vec<Rect> {
        vec![self.bounding_client_rect()]
    }
}

impl LayoutElement for Rect {
    fn bounding_client_rect(&self) -> Rect {
        *self
    }
}

impl<T: LayoutElement + ?Sized> LayoutElement for &T {
    fn bounding_client_rect(&self) -> Rect {
        (**self).bounding_client_rect()
    }

    fn client_rects(&self) -> Vec<Rect> {
        (**self).client_rects()
    }
}

/// Fetch the bounding box of an element
#[must_use]
pub fn get_boundaries<E: LayoutElement + ?Sized>(element: &E) -> Rect {
    element.bounding_client_rect()
}

/// Right-hand side of a numeric comparison.
///
/// Stands in for a runtime "is this an element?" check: a literal number is
/// used as-is, an element is resolved against the subject's box property.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, E: ?Sized> {
    /// Literal value
    Number(f64),
    /// Another element
    Element(&'a E),
}

impl<E: LayoutElement + ?Sized> Operand<'_, E> {
    /// Resolve to a number, reading `property` from element operands
    ///
    /// Returns `None` for an element operand when no property is given.
    #[must_use]
    pub fn resolve(&self, property: Option<BoxProperty>) -> Option<f64> {
        match (self, property) {
            (Self::Number(value), _) => Some(*value),
            (Self::Element(element), Some(property)) => {
                Some(get_boundaries(*element).property(property))
            }
            (Self::Element(_), None) => None,
        }
    }
}

impl<E: ?Sized> From<f64> for Operand<'_, E> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<E: ?Sized> From<i32> for Operand<'_, E> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<'a, E: LayoutElement> From<&'a E> for Operand<'a, E> {
    fn from(element: &'a E) -> Self {
        Self::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_its_own_boundary() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(get_boundaries(&rect), rect);
        assert_eq!(rect.client_rects(), vec![rect]);
    }

    #[test]
    fn test_reference_forwards() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let by_ref: &Rect = &rect;
        assert_eq!(get_boundaries(&by_ref), rect);
    }

    #[test]
    fn test_operand_number_ignores_property() {
        let operand: Operand<'_, Rect> = 5.0.into();
        assert_eq!(operand.resolve(None), Some(5.0));
        assert_eq!(operand.resolve(Some(BoxProperty::Width)), Some(5.0));
    }

    #[test]
    fn test_operand_element_resolves_property() {
        let other = Rect::new(28.0, 2.0, 6.0, 7.0);
        let operand = Operand::from(&other);
        assert_eq!(operand.resolve(Some(BoxProperty::Height)), Some(7.0));
        assert_eq!(operand.resolve(Some(BoxProperty::Right)), Some(34.0));
        assert_eq!(operand.resolve(None), None);
    }

    #[test]
    fn test_operand_from_int() {
        let operand: Operand<'_, Rect> = 7.into();
        assert_eq!(operand.resolve(None), Some(7.0));
    }
}
