//! Concave hulls (alpha shapes) of planar point sets.
//!
//! Modules, leaf first:
//! - `geometry`: points, Euclidean/haversine distance, shoelace area.
//! - `triangulation`: Delaunay triangles with degenerate ones filtered out.
//! - `graph`: undirected weighted graph with Dijkstra shortest paths.
//! - `alpha_shape`: the extraction pipeline on top of the three above.
//!
//! Everything is synchronous and owns its data per call; no global state.

pub mod alpha_shape;
pub mod api;
pub mod geometry;
pub mod graph;
pub mod triangulation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use alpha_shape::{
    alpha_shape_polygons, alpha_shape_polygons_with_cfg, AlphaShape, AlphaShapeCfg, Polygon,
    ThresholdRule,
};
pub use geometry::{area_of_polygon, euclidean_distance, haversine_distance, Point};
pub use graph::{Graph, GraphError, ShortestPathTree};
pub use triangulation::{delaunay_triangulation, ShapeError, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::alpha_shape::{
        alpha_shape_polygons, alpha_shape_polygons_with_cfg, AlphaShapeCfg, Polygon,
        ThresholdRule,
    };
    pub use crate::geometry::{area_of_polygon, euclidean_distance, haversine_distance, Point};
    pub use crate::graph::{Graph, GraphError};
    pub use crate::triangulation::{delaunay_triangulation, ShapeError};
}
