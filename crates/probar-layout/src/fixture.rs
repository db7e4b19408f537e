//! ASCII layout fixtures.
//!
//! Draw boxes with a letter in each corner:
//!
//! ```text
//!     a-----a
//!     |     |   b--b
//!     a-----a   b--b
//! ```
//!
//! Each character is one pixel. A letter's first occurrence is its top-left
//! corner and its fourth occurrence its bottom-right corner; anything else
//! on the lines is decoration.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::dom::DomNode;
use crate::geometry::Rect;
use crate::result::{LayoutError, LayoutResult};

/// `[x, y, width, height]`
pub type Geometry = [f64; 4];

/// Geometry per element letter
pub type LayoutMap = BTreeMap<char, Geometry>;

/// Corners a letter needs before it forms a box
const CORNERS: usize = 4;

/// Scan `source` and compute the geometry of every lettered box.
///
/// Columns count from 1; a newline moves to the next row.
///
/// # Errors
///
/// [`LayoutError::InvalidFixture`] when a letter occurs fewer than four
/// times.
pub fn generate_map(source: &str) -> LayoutResult<LayoutMap> {
    let mut corners: BTreeMap<char, Vec<(usize, usize)>> = BTreeMap::new();
    let (mut col, mut row) = (0_usize, 0_usize);
    for ch in source.chars() {
        col += 1;
        if ch == '\n' {
            row += 1;
            col = 0;
        }
        if ch.is_ascii_lowercase() {
            corners.entry(ch).or_default().push((col, row));
        }
    }

    corners
        .into_iter()
        .map(|(id, found)| {
            let (Some(&(x, y)), Some(&(x4, y4))) = (found.first(), found.get(CORNERS - 1)) else {
                return Err(LayoutError::invalid_fixture(format!(
                    "element '{id}' has {} corner(s), expected {CORNERS}",
                    found.len()
                )));
            };
            #[allow(clippy::cast_precision_loss)]
            let geometry = [
                x as f64,
                y as f64,
                (x4 + 1).saturating_sub(x) as f64,
                (y4 + 1).saturating_sub(y) as f64,
            ];
            Ok((id, geometry))
        })
        .collect()
}

/// Container with one absolutely positioned `div` per lettered box
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFixture {
    container: DomNode,
}

impl LayoutFixture {
    /// Build a fixture from ASCII art
    ///
    /// # Errors
    ///
    /// See [`generate_map`].
    pub fn parse(source: &str) -> LayoutResult<Self> {
        Ok(Self::from_map(&generate_map(source)?))
    }

    /// Build a fixture from a precomputed map
    #[must_use]
    pub fn from_map(map: &LayoutMap) -> Self {
        let mut container = DomNode::div();
        let mut extent = Rect::default();
        for (id, &[x, y, width, height]) in map {
            let rect = Rect::new(x, y, width, height);
            extent = Rect::from_edges(
                0.0,
                0.0,
                extent.right().max(rect.right()),
                extent.bottom().max(rect.bottom()),
            );
            let style = format!(
                "position: absolute; left: {x}px; top: {y}px; width: {width}px; height: {height}px"
            );
            container.append_child(
                DomNode::div()
                    .with_id(id.to_string())
                    .with_attribute("style", style)
                    .with_rect(rect),
            );
        }
        container.set_rect(extent);
        tracing::trace!(elements = map.len(), "layout fixture built");
        Self { container }
    }

    /// The element drawn with `id`
    #[must_use]
    pub fn get(&self, id: char) -> Option<&DomNode> {
        let mut buf = [0_u8; 4];
        self.container.find_by_id(id.encode_utf8(&mut buf))
    }

    /// Mutable access to the element drawn with `id`
    pub fn get_mut(&mut self, id: char) -> Option<&mut DomNode> {
        let key = id.to_string();
        self.container
            .children_mut()
            .iter_mut()
            .find(|node| node.id() == Some(key.as_str()))
    }

    /// Elements in letter order
    #[must_use]
    pub fn elements(&self) -> &[DomNode] {
        self.container.children()
    }

    /// Letters drawn in the fixture
    #[must_use]
    pub fn ids(&self) -> Vec<char> {
        self.elements()
            .iter()
            .filter_map(|node| node.id().and_then(|id| id.chars().next()))
            .collect()
    }

    /// The container holding every element
    #[must_use]
    pub const fn container(&self) -> &DomNode {
        &self.container
    }

    /// Mutable container
    pub fn container_mut(&mut self) -> &mut DomNode {
        &mut self.container
    }

    /// Consume the fixture
    #[must_use]
    pub fn into_container(self) -> DomNode {
        self.container
    }
}

impl FromStr for LayoutFixture {
    type Err = LayoutError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}
