//! Ring tracing: turn boundary components into closed, simple rings.
//!
//! A component whose nodes all have degree 2 already is a cycle and is walked
//! directly. Anything else (pinch vertices, spurs) is peeled: take the
//! smallest node `u` that still has edges, cut one of its edges `(u, v)` and
//! close it with the shortest path `v → u` inside the component. When the
//! component cannot close it, the gap is bridged through the full alpha-edge
//! graph instead. Used edges are removed and peeling repeats until the
//! component is exhausted.
//!
//! Shortest paths never repeat a node and every edge comes from one planar
//! triangulation, so each ring is a simple polygon.

use std::collections::BTreeSet;

use crate::geometry::{area_of_polygon, Point};
use crate::graph::{Graph, GraphError};

/// Closed rings (closing point not repeated) for every boundary component.
///
/// `alpha` is borrowed mutably to cut the bridged edge temporarily; it is
/// restored before returning.
pub(crate) fn trace_rings(boundary: &Graph, alpha: &mut Graph, min_points: usize) -> Vec<Vec<Point>> {
    let min_points = min_points.max(3);
    let mut rings = Vec::new();
    for comp in boundary.connected_components() {
        if comp.len() < 3 {
            tracing::trace!(nodes = comp.len(), "drop_fragment");
            continue;
        }
        let sub = boundary.subgraph(&comp);
        if comp.iter().all(|&n| sub.degree(n) == 2) {
            rings.extend(walk_cycle(&sub, comp[0]));
        } else {
            rings.extend(peel_rings(sub, alpha));
        }
    }
    // bridged gaps can close the same ring more than once
    let mut seen = BTreeSet::new();
    rings.retain(|r| {
        if r.len() < min_points || area_of_polygon(r) <= 0.0 {
            return false;
        }
        let mut key = r.clone();
        key.sort();
        seen.insert(key)
    });
    rings
}

/// Walk a connected 2-regular graph once around from `start`.
fn walk_cycle(g: &Graph, start: Point) -> Option<Vec<Point>> {
    let mut ring = vec![start];
    let mut prev = start;
    let mut cur = g.neighbors(start).next()?;
    while cur != start {
        if ring.len() >= g.len() {
            return None;
        }
        ring.push(cur);
        let next = g.neighbors(cur).find(|&q| q != prev)?;
        prev = cur;
        cur = next;
    }
    Some(ring)
}

fn peel_rings(mut work: Graph, alpha: &mut Graph) -> Vec<Vec<Point>> {
    let mut rings = Vec::new();
    loop {
        let Some(u) = work.nodes().find(|&n| work.degree(n) > 0) else {
            break;
        };
        let Some(v) = work.neighbors(u).next() else {
            break;
        };
        if work.remove_edge(u, v).is_err() {
            break;
        }
        match work.shortest_path(v, u) {
            Ok(path) => {
                for w in path.windows(2) {
                    let removed = work.remove_edge(w[0], w[1]);
                    debug_assert!(removed.is_ok(), "path edge missing: {removed:?}");
                }
                rings.push(path);
            }
            Err(err) => match bridge(alpha, u, v) {
                Ok(path) => rings.push(path),
                Err(bridge_err) => {
                    tracing::trace!(?u, ?v, %err, %bridge_err, "drop_open_chain");
                }
            },
        }
    }
    rings
}

/// Shortest `v → u` path through `alpha` that avoids the edge `(u, v)` itself.
fn bridge(alpha: &mut Graph, u: Point, v: Point) -> Result<Vec<Point>, GraphError> {
    let weight = alpha.remove_edge(u, v)?;
    let path = alpha.shortest_path(v, u);
    alpha.add_edge(u, v, weight)?;
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::euclidean_distance;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn graph(edges: &[((f64, f64), (f64, f64))]) -> Graph {
        Graph::from_edges(
            edges.iter().map(|&(a, b)| (Point::from(a), Point::from(b))),
            euclidean_distance,
        )
        .unwrap()
    }

    #[test]
    fn simple_cycle_is_walked() {
        let g = graph(&[
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (0.0, 1.0)),
            ((0.0, 1.0), (0.0, 0.0)),
        ]);
        let mut alpha = g.clone();
        let rings = trace_rings(&g, &mut alpha, 3);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
        assert_eq!(area_of_polygon(&rings[0]), 1.0);
    }

    #[test]
    fn pinched_figure_eight_gives_two_rings() {
        // two unit squares touching at (1,1)
        let g = graph(&[
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (0.0, 1.0)),
            ((0.0, 1.0), (0.0, 0.0)),
            ((1.0, 1.0), (2.0, 1.0)),
            ((2.0, 1.0), (2.0, 2.0)),
            ((2.0, 2.0), (1.0, 2.0)),
            ((1.0, 2.0), (1.0, 1.0)),
        ]);
        let mut alpha = g.clone();
        let rings = trace_rings(&g, &mut alpha, 3);
        assert_eq!(rings.len(), 2);
        for r in &rings {
            assert_eq!(r.len(), 4);
            assert_eq!(area_of_polygon(r), 1.0);
        }
    }

    #[test]
    fn spur_is_not_part_of_the_ring() {
        let g = graph(&[
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (0.0, 1.0)),
            ((0.0, 1.0), (0.0, 0.0)),
            ((1.0, 1.0), (1.5, 1.5)),
        ]);
        let mut alpha = g.clone();
        let rings = trace_rings(&g, &mut alpha, 3);
        assert_eq!(rings.len(), 1);
        assert!(!rings[0].contains(&p(1.5, 1.5)));
        // alpha graph is restored after the failed bridge
        assert!(alpha.contains_edge(p(1.0, 1.0), p(1.5, 1.5)));
        assert_eq!(alpha.edge_count(), 5);
    }

    #[test]
    fn open_chain_is_bridged_through_alpha_graph() {
        // boundary is an open chain; the alpha graph holds the closing edges
        let boundary = graph(&[((0.0, 0.0), (1.0, 0.0)), ((1.0, 0.0), (1.0, 1.0))]);
        let mut alpha = graph(&[
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (0.0, 1.0)),
            ((0.0, 1.0), (0.0, 0.0)),
        ]);
        let rings = trace_rings(&boundary, &mut alpha, 3);
        assert_eq!(rings.len(), 1);
        assert_eq!(area_of_polygon(&rings[0]), 1.0);
        assert_eq!(alpha.edge_count(), 4);
    }

    #[test]
    fn min_points_drops_short_rings_and_is_clamped_to_three() {
        let square = graph(&[
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (0.0, 1.0)),
            ((0.0, 1.0), (0.0, 0.0)),
        ]);
        let mut alpha = square.clone();
        assert!(trace_rings(&square, &mut alpha, 5).is_empty());
        assert_eq!(trace_rings(&square, &mut alpha, 4).len(), 1);

        let triangle = graph(&[
            ((0.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (0.0, 1.0)),
            ((0.0, 1.0), (0.0, 0.0)),
        ]);
        let mut alpha = triangle.clone();
        for min_points in [0, 1, 2, 3] {
            let rings = trace_rings(&triangle, &mut alpha, min_points);
            assert_eq!(rings.len(), 1);
            assert_eq!(rings[0].len(), 3);
        }
    }

    #[test]
    fn tiny_components_are_dropped() {
        let g = graph(&[((0.0, 0.0), (1.0, 0.0))]);
        let mut alpha = g.clone();
        assert!(trace_rings(&g, &mut alpha, 3).is_empty());
        // clamping keeps two-point fragments out even when asked for fewer
        assert!(trace_rings(&g, &mut alpha, 0).is_empty());
    }
}
