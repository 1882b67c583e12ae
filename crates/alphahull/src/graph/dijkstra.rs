//! Dijkstra shortest-path trees and path reconstruction.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::geometry::Point;

use super::types::{Graph, GraphError};

/// Distances from one source to every node plus the predecessor links that
/// realise them.
///
/// Unreachable nodes have distance `f64::INFINITY` and no predecessor; the
/// source has distance `0.0` and no predecessor.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    pub source: Point,
    pub distances: BTreeMap<Point, f64>,
    pub predecessors: BTreeMap<Point, Point>,
}

impl ShortestPathTree {
    /// Distance to `node`; infinite for unreachable or unknown nodes.
    #[inline]
    pub fn distance(&self, node: Point) -> f64 {
        self.distances.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    #[inline]
    pub fn predecessor(&self, node: Point) -> Option<Point> {
        self.predecessors.get(&node).copied()
    }

    #[inline]
    pub fn is_reachable(&self, node: Point) -> bool {
        self.distance(node).is_finite()
    }

    /// Path `source → … → target` by walking predecessors back from `target`.
    pub fn path_to(&self, target: Point) -> Option<Vec<Point>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.predecessor(cur)?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

/// Heap entry; reversed so `BinaryHeap` pops the smallest distance first.
/// Equal distances pop the smaller point first.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    dist: f64,
    node: Point,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Frontier {}
impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl Graph {
    /// Full shortest-path tree from `source` over the non-negative weights.
    ///
    /// Fails with `UnknownNode` when `source` is not in the graph. Among
    /// equal-length alternatives the first one settled (smaller point first)
    /// keeps the predecessor slot.
    pub fn dijkstra(&self, source: Point) -> Result<ShortestPathTree, GraphError> {
        if !self.contains_node(source) {
            return Err(GraphError::UnknownNode(source));
        }
        let mut tree = self.search(source, None);
        for node in self.nodes() {
            tree.distances.entry(node).or_insert(f64::INFINITY);
        }
        Ok(tree)
    }

    /// Minimal-weight node sequence from `source` to `target`, both included.
    ///
    /// `UnknownNode` if either endpoint is missing from the graph (malformed
    /// query), `NoPath` if both exist but lie in different components.
    pub fn shortest_path(&self, source: Point, target: Point) -> Result<Vec<Point>, GraphError> {
        for node in [source, target] {
            if !self.contains_node(node) {
                return Err(GraphError::UnknownNode(node));
            }
        }
        if !self.reachable(source, target) {
            return Err(GraphError::NoPath { source, target });
        }
        self.search(source, Some(target))
            .path_to(target)
            .ok_or(GraphError::NoPath { source, target })
    }

    /// Dijkstra from `source`, stopping once `target` is settled.
    ///
    /// Only reached nodes get a distance entry.
    fn search(&self, source: Point, target: Option<Point>) -> ShortestPathTree {
        let mut distances = BTreeMap::from([(source, 0.0)]);
        let mut predecessors = BTreeMap::new();

        let mut heap = BinaryHeap::new();
        heap.push(Frontier {
            dist: 0.0,
            node: source,
        });
        while let Some(Frontier { dist, node }) = heap.pop() {
            // stale entry
            if distances.get(&node).is_some_and(|&d| dist > d) {
                continue;
            }
            if Some(node) == target {
                break;
            }
            for next in self.neighbors(node) {
                let Some(w) = self.weight(node, next) else {
                    continue;
                };
                let cand = dist + w;
                if cand < distances.get(&next).copied().unwrap_or(f64::INFINITY) {
                    distances.insert(next, cand);
                    predecessors.insert(next, node);
                    heap.push(Frontier {
                        dist: cand,
                        node: next,
                    });
                }
            }
        }
        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }
}
