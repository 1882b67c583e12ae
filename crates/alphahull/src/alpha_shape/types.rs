//! Configuration and result types for alpha-shape extraction.

use crate::geometry::{area_of_polygon, signed_area, Point};

/// Default multiplier `k` in `mean + k·stddev`.
///
/// Separates a uniform square fill (one polygon) from an annulus (outer and
/// inner ring) without per-input tuning.
pub const DEFAULT_STD_MULTIPLIER: f64 = 3.0;

/// How the edge-length cut-off is obtained from the triangulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThresholdRule {
    /// `mean + k · stddev` of the unique triangulation edge lengths
    /// (population standard deviation).
    MeanPlusStd { k: f64 },
    /// The `q`-quantile of the edge lengths, `q` clamped to `[0, 1]`.
    Quantile(f64),
    /// Fixed cut-off, bypassing the data (classic alpha parameter).
    Fixed(f64),
}

impl Default for ThresholdRule {
    fn default() -> Self {
        Self::MeanPlusStd {
            k: DEFAULT_STD_MULTIPLIER,
        }
    }
}

/// Extraction configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaShapeCfg {
    pub threshold: ThresholdRule,
    /// Rings with fewer vertices are dropped. Values below 3 act as 3.
    pub min_ring_points: usize,
}

impl Default for AlphaShapeCfg {
    fn default() -> Self {
        Self {
            threshold: ThresholdRule::default(),
            min_ring_points: 3,
        }
    }
}

/// Closed ring of points; the closing point is not repeated.
///
/// Rings produced by the extractor are counterclockwise and start at their
/// smallest vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    area: f64,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        let area = area_of_polygon(&vertices);
        Self { vertices, area }
    }

    /// Counterclockwise, rotated to start at the smallest vertex.
    pub(crate) fn normalized(mut self) -> Self {
        if signed_area(&self.vertices) < 0.0 {
            self.vertices.reverse();
        }
        if let Some(start) = self
            .vertices
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.cmp(b.1))
            .map(|(i, _)| i)
        {
            self.vertices.rotate_left(start);
        }
        self
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Enclosed area (shoelace).
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices with the first one repeated at the end.
    pub fn closed(&self) -> Vec<Point> {
        let mut ring = self.vertices.clone();
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        ring
    }

    /// Boundary length under `distance`.
    pub fn perimeter_by<F>(&self, distance: F) -> f64
    where
        F: Fn(Point, Point) -> f64,
    {
        self.closed().windows(2).map(|w| distance(w[0], w[1])).sum()
    }
}

impl AsRef<[Point]> for Polygon {
    fn as_ref(&self) -> &[Point] {
        &self.vertices
    }
}

/// Full extraction result with the intermediate counts.
#[derive(Clone, Debug)]
pub struct AlphaShape {
    /// Edge-length cut-off used for this input.
    pub threshold: f64,
    pub triangles: usize,
    pub retained_triangles: usize,
    pub alpha_edges: usize,
    pub boundary_edges: usize,
    /// Polygons by descending area.
    pub polygons: Vec<Polygon>,
}
