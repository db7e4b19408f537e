//! Rectangle geometry primitives.
//!
//! Boxes are axis-aligned, in client coordinates (y grows downwards), and
//! always derived from an element at query time.

use serde::{Deserialize, Serialize};

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of an element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Right edge
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Surface area
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get the center point
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right()) / 2.0,
            (self.top + self.bottom()) / 2.0,
        )
    }

    /// The four corners, clockwise from top-left
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right(), self.top),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left, self.bottom()),
        ]
    }

    /// Read one box property
    #[must_use]
    pub fn property(&self, property: BoxProperty) -> f64 {
        match property {
            BoxProperty::Width => self.width,
            BoxProperty::Height => self.height,
            BoxProperty::Top => self.top,
            BoxProperty::Bottom => self.bottom(),
            BoxProperty::Left => self.left,
            BoxProperty::Right => self.right(),
        }
    }

    /// Whether the rectangle covers any pixels
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check if a point is inside this rectangle (edges inclusive)
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        is_point_inside(point, self)
    }
}

/// Numeric property of a bounding box that a subject can be rebound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxProperty {
    /// Box width
    Width,
    /// Box height
    Height,
    /// Top edge
    Top,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
    /// Right edge
    Right,
}

impl BoxProperty {
    /// All box properties
    pub const ALL: [Self; 6] = [
        Self::Width,
        Self::Height,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Property name as used in messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for BoxProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point lies within `boundary`, edges inclusive.
#[must_use]
pub fn is_point_inside(point: &Point, boundary: &Rect) -> bool {
    point.x >= boundary.left
        && point.x <= boundary.right()
        && point.y >= boundary.top
        && point.y <= boundary.bottom()
}

/// `rect` is fully contained in `boundary`.
#[must_use]
pub fn is_inside(rect: &Rect, boundary: &Rect) -> bool {
    rect.left >= boundary.left
        && rect.top >= boundary.top
        && rect.right() <= boundary.right()
        && rect.bottom() <= boundary.bottom()
}

/// No corner of `rect` lies inside `boundary`.
///
/// This is a visual test, not set disjointness: a rectangle that surrounds
/// `boundary` completely has no corner inside it and counts as outside.
#[must_use]
pub fn is_outside(rect: &Rect, boundary: &Rect) -> bool {
    !rect
        .corners()
        .iter()
        .any(|corner| is_point_inside(corner, boundary))
}
