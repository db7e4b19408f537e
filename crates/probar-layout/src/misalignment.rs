//! Misalignment detection over edge coordinates.
//!
//! Every edge is tried as the anchor of a tolerance window, once extended
//! upwards and once downwards. The window that leaves out the fewest other
//! edges wins and the edges it leaves out are reported as misaligned. With a
//! zero tolerance this degenerates to "the most common value wins".

use serde::{Deserialize, Serialize};

/// Candidate window anchored at one edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMapItem {
    /// Anchor edge and its tolerance-extended end, in that order
    pub range: (f64, f64),
    /// Indices of edges falling outside the window
    pub excluded_edges: Vec<usize>,
}

impl EdgeMapItem {
    /// Build the window `[anchor, end]` and collect what it excludes
    #[must_use]
    pub fn new(edges: &[f64], anchor: f64, end: f64) -> Self {
        let range = (anchor, end);
        Self {
            range,
            excluded_edges: find_excluded_edges(edges, range),
        }
    }

    /// Whether `edge` lies within the window, regardless of range order
    #[must_use]
    pub fn contains(&self, edge: f64) -> bool {
        in_range(edge, self.range)
    }
}

fn in_range(edge: f64, (a, b): (f64, f64)) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    edge >= lo && edge <= hi
}

fn find_excluded_edges(edges: &[f64], range: (f64, f64)) -> Vec<usize> {
    edges
        .iter()
        .enumerate()
        .filter(|(_, &edge)| !in_range(edge, range))
        .map(|(index, _)| index)
        .collect()
}

/// All candidate windows: for each edge in order, `+tolerance` then `-tolerance`.
#[must_use]
pub fn edge_map(edges: &[f64], tolerance: f64) -> Vec<EdgeMapItem> {
    edges
        .iter()
        .flat_map(|&edge| {
            [
                EdgeMapItem::new(edges, edge, edge + tolerance),
                EdgeMapItem::new(edges, edge, edge - tolerance),
            ]
        })
        .collect()
}

// min_by_key keeps the first of equally small candidates
fn pick_least_excluded(edge_map: Vec<EdgeMapItem>) -> Vec<usize> {
    edge_map
        .into_iter()
        .min_by_key(|item| item.excluded_edges.len())
        .map(|item| {
            tracing::trace!(
                lo = item.range.0,
                hi = item.range.1,
                excluded = item.excluded_edges.len(),
                "picked alignment window"
            );
            item.excluded_edges
        })
        .unwrap_or_default()
}

/// Indices of the edges that do not line up with the majority.
///
/// Returns an empty vector for empty or single-edge input.
#[must_use]
pub fn detect_misalignment(edges: &[f64], tolerance: f64) -> Vec<usize> {
    pick_least_excluded(edge_map(edges, tolerance))
}
