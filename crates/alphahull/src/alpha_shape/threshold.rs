//! Edge-length statistics and the data-derived cut-off.

use std::collections::BTreeMap;

use crate::geometry::Point;
use crate::triangulation::Triangle;

use super::types::ThresholdRule;

/// Unique triangulation edges `(smaller, larger)` with their length under
/// `distance`.
pub(crate) fn edge_lengths<F>(triangles: &[Triangle], distance: F) -> BTreeMap<(Point, Point), f64>
where
    F: Fn(Point, Point) -> f64,
{
    let mut out = BTreeMap::new();
    for t in triangles {
        for (a, b) in t.edges() {
            out.entry((a, b)).or_insert_with(|| distance(a, b));
        }
    }
    out
}

/// Lengths a metric can meaningfully report: finite and non-negative.
#[inline]
pub(crate) fn is_usable_length(len: f64) -> bool {
    len.is_finite() && len >= 0.0
}

impl ThresholdRule {
    /// Cut-off for the given edge lengths. Unusable lengths are ignored;
    /// with nothing left the data-driven rules return `0.0`.
    pub fn resolve(&self, lengths: &[f64]) -> f64 {
        let usable: Vec<f64> = lengths
            .iter()
            .copied()
            .filter(|l| is_usable_length(*l))
            .collect();
        match *self {
            Self::Fixed(cut) => cut,
            _ if usable.is_empty() => 0.0,
            Self::MeanPlusStd { k } => {
                let (mean, std) = mean_std(&usable);
                mean + k * std
            }
            Self::Quantile(q) => quantile(usable, q),
        }
    }
}

fn mean_std(xs: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Nearest-rank quantile.
fn quantile(mut xs: Vec<f64>, q: f64) -> f64 {
    xs.sort_by(f64::total_cmp);
    let q = if q.is_nan() { 1.0 } else { q.clamp(0.0, 1.0) };
    let idx = ((xs.len() - 1) as f64 * q).round() as usize;
    xs[idx.min(xs.len() - 1)]
}
