//! Axes and alignment kinds.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Top to bottom
    Vertical,
    /// Left to right
    Horizontal,
}

impl Direction {
    /// Axis name as used in messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }

    /// Trailing side of a box along this axis (right / bottom)
    #[must_use]
    pub fn far_edge(&self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical => rect.bottom(),
            Self::Horizontal => rect.right(),
        }
    }

    /// Leading side of a box along this axis (left / top)
    #[must_use]
    pub fn near_edge(&self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical => rect.top,
            Self::Horizontal => rect.left,
        }
    }

    /// Center line of a box along this axis
    #[must_use]
    pub fn center(&self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical => (rect.top + rect.bottom()) / 2.0,
            Self::Horizontal => (rect.left + rect.right()) / 2.0,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment kinds along the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top edges
    Top,
    /// Vertical centers
    Center,
    /// Bottom edges
    Bottom,
}

/// Alignment kinds along the horizontal axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// Left edges
    Left,
    /// Horizontal centers
    Center,
    /// Right edges
    Right,
}

/// An alignment kind together with its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Aligned along the vertical axis
    Vertical(VerticalAlignment),
    /// Aligned along the horizontal axis
    Horizontal(HorizontalAlignment),
}

impl Alignment {
    /// Axis of this alignment
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Vertical(_) => Direction::Vertical,
            Self::Horizontal(_) => Direction::Horizontal,
        }
    }

    /// Alignment kind name as used in messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical(VerticalAlignment::Top) => "top",
            Self::Vertical(VerticalAlignment::Bottom) => "bottom",
            Self::Horizontal(HorizontalAlignment::Left) => "left",
            Self::Horizontal(HorizontalAlignment::Right) => "right",
            Self::Vertical(VerticalAlignment::Center)
            | Self::Horizontal(HorizontalAlignment::Center) => "center",
        }
    }

    /// Edge coordinate this alignment compares
    #[must_use]
    pub fn edge(&self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical(VerticalAlignment::Top) => rect.top,
            Self::Vertical(VerticalAlignment::Bottom) => rect.bottom(),
            Self::Horizontal(HorizontalAlignment::Left) => rect.left,
            Self::Horizontal(HorizontalAlignment::Right) => rect.right(),
            Self::Vertical(VerticalAlignment::Center)
            | Self::Horizontal(HorizontalAlignment::Center) => self.direction().center(rect),
        }
    }
}

impl From<VerticalAlignment> for Alignment {
    fn from(kind: VerticalAlignment) -> Self {
        Self::Vertical(kind)
    }
}

impl From<HorizontalAlignment> for Alignment {
    fn from(kind: HorizontalAlignment) -> Self {
        Self::Horizontal(kind)
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Alignment::from(*self).as_str())
    }
}

impl std::fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Alignment::from(*self).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(10.0, 20.0, 30.0, 40.0)
    }

    #[test]
    fn test_direction_edges() {
        assert_eq!(Direction::Horizontal.far_edge(&rect()), 40.0);
        assert_eq!(Direction::Horizontal.near_edge(&rect()), 10.0);
        assert_eq!(Direction::Vertical.far_edge(&rect()), 60.0);
        assert_eq!(Direction::Vertical.near_edge(&rect()), 20.0);
    }

    #[test]
    fn test_centers() {
        assert_eq!(Direction::Horizontal.center(&rect()), 25.0);
        assert_eq!(Direction::Vertical.center(&rect()), 40.0);
    }

    #[test]
    fn test_alignment_edges() {
        let r = rect();
        assert_eq!(Alignment::from(VerticalAlignment::Top).edge(&r), 20.0);
        assert_eq!(Alignment::from(VerticalAlignment::Center).edge(&r), 40.0);
        assert_eq!(Alignment::from(VerticalAlignment::Bottom).edge(&r), 60.0);
        assert_eq!(Alignment::from(HorizontalAlignment::Left).edge(&r), 10.0);
        assert_eq!(Alignment::from(HorizontalAlignment::Center).edge(&r), 25.0);
        assert_eq!(Alignment::from(HorizontalAlignment::Right).edge(&r), 40.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(Direction::Vertical.to_string(), "vertical");
        assert_eq!(Alignment::from(HorizontalAlignment::Center).to_string(), "center");
        assert_eq!(VerticalAlignment::Top.to_string(), "top");
        assert_eq!(HorizontalAlignment::Right.to_string(), "right");
        assert_eq!(
            Alignment::from(VerticalAlignment::Bottom).direction(),
            Direction::Vertical
        );
    }

    #[test]
    fn test_serde_names() {
        let kind: VerticalAlignment = serde_json::from_str("\"top\"").unwrap();
        assert_eq!(kind, VerticalAlignment::Top);
        let dir: Direction = serde_json::from_str("\"horizontal\"").unwrap();
        assert_eq!(dir, Direction::Horizontal);
    }
}
