//! Alpha-shape (concave hull) extraction with a data-derived cut-off.
//!
//! Purpose
//! - Describe the outline of a scattered point set by one or more closed
//!   polygons, including concavities, holes and disjoint regions, without an
//!   externally tuned alpha.
//!
//! Pipeline (one call, no state kept between calls)
//! 1. Delaunay triangulation of the input (`InsufficientPoints` below three
//!    distinct points).
//! 2. Cut-off from the unique edge lengths under the caller's metric,
//!    `mean + 3·stddev` by default (`ThresholdRule`).
//! 3. Alpha edges (length ≤ cut-off) and retained triangles (all three edges
//!    are alpha edges).
//! 4. Boundary edges (alpha edges in at most one retained triangle) split into
//!    connected components.
//! 5. Each component traced into closed simple rings; unclosable fragments are
//!    dropped silently.
//! 6. Rings sorted by descending area.
//!
//! Layout
//! - `types.rs` (config and results), `threshold.rs` (cut-off),
//!   `boundary.rs` (edge filtering), `trace.rs` (ring tracing).

mod boundary;
mod threshold;
mod trace;
mod types;

pub use types::{AlphaShape, AlphaShapeCfg, Polygon, ThresholdRule, DEFAULT_STD_MULTIPLIER};

use crate::geometry::Point;
use crate::triangulation::{delaunay_triangulation, ShapeError};

use boundary::select_edges;
use threshold::edge_lengths;
use trace::trace_rings;

/// Alpha-shape polygons of `points`, largest area first, with the default
/// configuration.
///
/// `distance` measures edges for the cut-off and weights the boundary graphs
/// (e.g. `euclidean_distance`, or `haversine_distance` for lon/lat input).
/// Areas are always planar shoelace areas in coordinate units.
pub fn alpha_shape_polygons<F>(points: &[Point], distance: F) -> Result<Vec<Polygon>, ShapeError>
where
    F: Fn(Point, Point) -> f64,
{
    alpha_shape_polygons_with_cfg(points, distance, &AlphaShapeCfg::default())
}

/// As [`alpha_shape_polygons`] with an explicit configuration.
pub fn alpha_shape_polygons_with_cfg<F>(
    points: &[Point],
    distance: F,
    cfg: &AlphaShapeCfg,
) -> Result<Vec<Polygon>, ShapeError>
where
    F: Fn(Point, Point) -> f64,
{
    AlphaShape::extract(points, distance, cfg).map(|shape| shape.polygons)
}

impl AlphaShape {
    /// Run the full pipeline and keep the intermediate counts.
    pub fn extract<F>(points: &[Point], distance: F, cfg: &AlphaShapeCfg) -> Result<Self, ShapeError>
    where
        F: Fn(Point, Point) -> f64,
    {
        let triangles = delaunay_triangulation(points)?;
        let lengths = edge_lengths(&triangles, &distance);
        let all: Vec<f64> = lengths.values().copied().collect();
        let threshold = cfg.threshold.resolve(&all);
        tracing::debug!(
            triangles = triangles.len(),
            edges = lengths.len(),
            threshold,
            rule = ?cfg.threshold,
            "alpha_threshold"
        );

        let mut sel = select_edges(&triangles, &lengths, threshold);
        let rings = trace_rings(&sel.boundary, &mut sel.alpha, cfg.min_ring_points);

        let mut polygons: Vec<Polygon> = rings
            .into_iter()
            .map(|r| Polygon::new(r).normalized())
            .collect();
        polygons.sort_by(|a, b| {
            b.area()
                .total_cmp(&a.area())
                .then_with(|| a.vertices().cmp(b.vertices()))
        });
        tracing::debug!(
            retained_triangles = sel.retained_triangles,
            alpha_edges = sel.alpha.edge_count(),
            boundary_edges = sel.boundary.edge_count(),
            polygons = polygons.len(),
            largest_area = polygons.first().map(Polygon::area),
            "alpha_shape"
        );

        Ok(Self {
            threshold,
            triangles: triangles.len(),
            retained_triangles: sel.retained_triangles,
            alpha_edges: sel.alpha.edge_count(),
            boundary_edges: sel.boundary.edge_count(),
            polygons,
        })
    }
}
