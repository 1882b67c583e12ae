//! Curated import surface grouped by pipeline stage.
//!
//! Mirrors the crate root re-exports plus the lower-level pieces (tolerances,
//! constants, result types) that advanced callers reach for when tuning the
//! extraction or reusing the graph engine on their own.

// Primitives
pub use crate::geometry::{
    area_of_polygon, euclidean_distance, haversine_distance, parallelogram_area, signed_area,
    Point, EARTH_RADIUS_KM,
};
// Triangulation
pub use crate::triangulation::{delaunay_triangulation, ShapeError, Triangle, DEGENERATE_AREA_EPS};
// Graph engine
pub use crate::graph::{Graph, GraphError, ShortestPathTree};
// Extraction
pub use crate::alpha_shape::{
    alpha_shape_polygons, alpha_shape_polygons_with_cfg, AlphaShape, AlphaShapeCfg, Polygon,
    ThresholdRule, DEFAULT_STD_MULTIPLIER,
};
