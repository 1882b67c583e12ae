//! Planar points, distances and polygon area.
//!
//! Pure functions with no state. Everything else in the crate measures through
//! these, so they stay total: no panics, no `Result`.
//!
//! Conventions
//! - `Point` equality is exact on both coordinates; `-0.0` and `0.0` compare
//!   equal and hash alike. `Ord` is lexicographic on `(x, y)` via `total_cmp`.
//! - Geographic points are `(longitude, latitude)` in degrees.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use nalgebra::{Matrix2, Vector2};

/// Mean Earth radius used by [`haversine_distance`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Point in the plane; usable directly as a map or set key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    // `+ 0.0` folds -0.0 into 0.0 so Eq, Ord and Hash agree.
    #[inline]
    fn key(&self) -> (f64, f64) {
        (self.x + 0.0, self.y + 0.0)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        let (ax, ay) = self.key();
        let (bx, by) = other.key();
        ax.total_cmp(&bx).then_with(|| ay.total_cmp(&by))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.key();
        x.to_bits().hash(state);
        y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Straight-line distance in the plane.
#[inline]
pub fn euclidean_distance(p: Point, q: Point) -> f64 {
    (p.to_vector() - q.to_vector()).norm()
}

/// Great-circle distance in kilometres between `(longitude, latitude)` pairs
/// given in degrees.
pub fn haversine_distance(p: Point, q: Point) -> f64 {
    let (lon1, lat1) = (p.x.to_radians(), p.y.to_radians());
    let (lon2, lat2) = (q.x.to_radians(), q.y.to_radians());
    let h = ((lat2 - lat1) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lon2 - lon1) / 2.0).sin().powi(2);
    // clamp: rounding can push h a hair above 1 for antipodes
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Signed area of the parallelogram spanned by vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    Matrix2::from_columns(&[a, b]).determinant()
}

/// Shoelace sum over the ring, halved. Positive for counterclockwise rings.
///
/// The ring may or may not repeat its first point at the end; the closing
/// term of a repeated point is zero, so both conventions give the same value.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..n {
        let p = vertices[k];
        let q = vertices[(k + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    twice / 2.0
}

/// Area enclosed by a simple polygon given as an ordered vertex ring.
///
/// Fewer than three vertices enclose nothing and give `0.0`.
#[inline]
pub fn area_of_polygon(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}
