//! Delaunay triangulation of planar point sets.
//!
//! Purpose
//! - Turn an unordered point cloud into triangles with the empty-circumcircle
//!   property; the alpha-shape extractor only ever looks at these triangles.
//!
//! Behaviour
//! - Input is deduplicated and non-finite points are ignored before
//!   triangulating; fewer than three distinct usable points is an error.
//! - Degenerate (near-zero area) triangles are dropped instead of failing the
//!   whole computation. Fully collinear input therefore yields no triangles.
//! - Output order is deterministic for a given input set.

use std::collections::BTreeSet;
use std::fmt;

use crate::geometry::{euclidean_distance, parallelogram_area, Point};

/// Triangles with `area <= DEGENERATE_AREA_EPS * longest_edge²` are dropped.
pub const DEGENERATE_AREA_EPS: f64 = 1e-12;

/// Errors raised by triangulation and shape extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Fewer than three distinct finite points were supplied.
    InsufficientPoints { found: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { found } => {
                write!(f, "insufficient points: need at least 3 distinct points, got {found}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Unordered triple of distinct points.
///
/// Vertices are stored sorted so two triangles over the same points compare
/// equal regardless of construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    /// Build a triangle; `None` if two of the points coincide.
    pub fn new(a: Point, b: Point, c: Point) -> Option<Self> {
        let mut vertices = [a, b, c];
        vertices.sort();
        if vertices[0] == vertices[1] || vertices[1] == vertices[2] {
            return None;
        }
        Some(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// The three edges, each with its endpoints in ascending order.
    pub fn edges(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (a, c)]
    }

    pub fn contains_vertex(&self, p: Point) -> bool {
        self.vertices.contains(&p)
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (parallelogram_area(b.to_vector() - a.to_vector(), c.to_vector() - a.to_vector()) / 2.0)
            .abs()
    }

    /// Radius of the circumscribed circle, `abc / 4A`. Infinite when degenerate.
    pub fn circumradius(&self) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return f64::INFINITY;
        }
        let [ab, bc, ac] = self.edge_lengths_by(euclidean_distance);
        ab * bc * ac / (4.0 * area)
    }

    #[inline]
    pub fn longest_edge(&self) -> f64 {
        self.longest_edge_by(euclidean_distance)
    }

    /// Longest edge measured with a caller-supplied metric.
    pub fn longest_edge_by<F>(&self, distance: F) -> f64
    where
        F: Fn(Point, Point) -> f64,
    {
        self.edge_lengths_by(distance)
            .into_iter()
            .fold(0.0, f64::max)
    }

    fn edge_lengths_by<F>(&self, distance: F) -> [f64; 3]
    where
        F: Fn(Point, Point) -> f64,
    {
        self.edges().map(|(p, q)| distance(p, q))
    }

    fn is_degenerate(&self) -> bool {
        let longest = self.longest_edge();
        self.area() <= DEGENERATE_AREA_EPS * longest * longest
    }
}

/// Distinct finite points in ascending order.
pub(crate) fn usable_points(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(Point::is_finite)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Delaunay triangulation of `points`.
///
/// Returns `ShapeError::InsufficientPoints` for fewer than three distinct
/// finite points. Degenerate triangles are excluded from the result.
pub fn delaunay_triangulation(points: &[Point]) -> Result<Vec<Triangle>, ShapeError> {
    let unique = usable_points(points);
    if unique.len() < 3 {
        return Err(ShapeError::InsufficientPoints {
            found: unique.len(),
        });
    }
    let input: Vec<delaunator::Point> = unique
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();
    let raw = delaunator::triangulate(&input);

    let mut triangles = Vec::with_capacity(raw.triangles.len() / 3);
    let mut dropped = 0usize;
    for idx in raw.triangles.chunks_exact(3) {
        match Triangle::new(unique[idx[0]], unique[idx[1]], unique[idx[2]]) {
            Some(t) if !t.is_degenerate() => triangles.push(t),
            _ => dropped += 1,
        }
    }
    tracing::debug!(
        points = unique.len(),
        triangles = triangles.len(),
        dropped,
        "delaunay_triangulation"
    );
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn unit_square_gives_two_triangles() {
        let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let tris = delaunay_triangulation(&square).unwrap();
        assert_eq!(tris.len(), 2);
        let total: f64 = tris.iter().map(Triangle::area).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn convex_quadrilateral_picks_delaunay_diagonal() {
        // Flat rhombus: the short diagonal (0,-1)-(0,1) violates nothing,
        // the long one would put the other vertices inside the circumcircle.
        let quad = pts(&[(-3.0, 0.0), (0.0, -1.0), (3.0, 0.0), (0.0, 1.0)]);
        let tris = delaunay_triangulation(&quad).unwrap();
        assert_eq!(tris.len(), 2);
        let top = Point::new(0.0, 1.0);
        let bottom = Point::new(0.0, -1.0);
        assert!(tris
            .iter()
            .all(|t| t.contains_vertex(top) && t.contains_vertex(bottom)));
    }

    #[test]
    fn too_few_points_is_an_error() {
        let two = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            delaunay_triangulation(&two),
            Err(ShapeError::InsufficientPoints { found: 2 })
        );
        // duplicates do not count
        let dup = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
        assert!(matches!(
            delaunay_triangulation(&dup),
            Err(ShapeError::InsufficientPoints { found: 2 })
        ));
    }

    #[test]
    fn collinear_points_degrade_to_nothing() {
        let line = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let tris = delaunay_triangulation(&line).unwrap();
        assert!(tris.is_empty());
    }

    #[test]
    fn duplicates_are_ignored() {
        let square = pts(&[
            (0.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 0.0),
        ]);
        assert_eq!(delaunay_triangulation(&square).unwrap().len(), 2);
    }

    #[test]
    fn triangle_is_an_unordered_set() {
        let (a, b, c) = (
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        );
        assert_eq!(Triangle::new(a, b, c), Triangle::new(c, a, b));
        assert!(Triangle::new(a, a, b).is_none());
    }

    #[test]
    fn right_triangle_measures() {
        let t = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        )
        .unwrap();
        assert!((t.area() - 6.0).abs() < 1e-12);
        assert!((t.longest_edge() - 5.0).abs() < 1e-12);
        // hypotenuse is a diameter of the circumcircle
        assert!((t.circumradius() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn empty_circumcircle_on_random_cloud() {
        let mut rng = StdRng::seed_from_u64(7);
        let cloud: Vec<Point> = (0..200)
            .map(|_| Point::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0)))
            .collect();
        let tris = delaunay_triangulation(&cloud).unwrap();
        assert!(!tris.is_empty());
        for t in &tris {
            let [a, b, c] = t.vertices();
            let center = circumcenter(a, b, c);
            let r = euclidean_distance(center, a);
            for p in &cloud {
                if t.contains_vertex(*p) {
                    continue;
                }
                assert!(euclidean_distance(center, *p) >= r - 1e-9);
            }
        }
    }

    fn circumcenter(a: Point, b: Point, c: Point) -> Point {
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let (a2, b2, c2) = (
            a.x * a.x + a.y * a.y,
            b.x * b.x + b.y * b.y,
            c.x * c.x + c.y * c.y,
        );
        Point::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        )
    }
}
