//! Edge filtering and boundary identification.
//!
//! An alpha edge is a triangulation edge no longer than the cut-off; a
//! triangle is retained when all three of its edges are alpha edges. An alpha
//! edge lies on the boundary when at most one retained triangle uses it, which
//! also covers isolated alpha edges in sparse regions.

use std::collections::BTreeMap;

use crate::geometry::Point;
use crate::graph::Graph;
use crate::triangulation::Triangle;

use super::threshold::is_usable_length;

/// Graphs produced by filtering one triangulation.
#[derive(Clone, Debug, Default)]
pub(crate) struct EdgeSelection {
    /// Every alpha edge, weighted by its length.
    pub alpha: Graph,
    /// Alpha edges used by at most one retained triangle.
    pub boundary: Graph,
    pub retained_triangles: usize,
}

pub(crate) fn select_edges(
    triangles: &[Triangle],
    lengths: &BTreeMap<(Point, Point), f64>,
    threshold: f64,
) -> EdgeSelection {
    let is_alpha = |edge: &(Point, Point)| {
        lengths
            .get(edge)
            .is_some_and(|&l| is_usable_length(l) && l <= threshold)
    };

    let mut uses: BTreeMap<(Point, Point), usize> = BTreeMap::new();
    let mut retained_triangles = 0;
    for t in triangles {
        let edges = t.edges();
        if edges.iter().all(is_alpha) {
            retained_triangles += 1;
            for e in edges {
                *uses.entry(e).or_default() += 1;
            }
        }
    }

    let mut sel = EdgeSelection {
        retained_triangles,
        ..EdgeSelection::default()
    };
    for (edge, &len) in lengths {
        if !is_alpha(edge) {
            continue;
        }
        let (a, b) = *edge;
        let on_boundary = uses.get(edge).copied().unwrap_or(0) <= 1;
        // keys are unique and lengths validated, so neither insert can fail
        let added = sel.alpha.add_edge(a, b, len);
        debug_assert!(added.is_ok(), "alpha edge rejected: {added:?}");
        if added.is_ok() && on_boundary {
            let added = sel.boundary.add_edge(a, b, len);
            debug_assert!(added.is_ok(), "boundary edge rejected: {added:?}");
        }
    }
    sel
}
