//! Graph storage, mutation and structural queries.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::geometry::Point;

/// Error type shared by graph mutation and search.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The edge already exists (in either direction).
    DuplicateEdge { source: Point, target: Point },
    /// No edge between the two nodes.
    MissingEdge { source: Point, target: Point },
    /// A queried node is not part of the graph.
    UnknownNode(Point),
    /// Both nodes are in the graph but no path connects them.
    NoPath { source: Point, target: Point },
    /// Edges must join two distinct nodes.
    SelfLoop(Point),
    /// Weights must be finite and non-negative.
    InvalidWeight { source: Point, target: Point, weight: f64 },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEdge { source, target } => {
                write!(f, "edge {source:?} - {target:?} already exists")
            }
            Self::MissingEdge { source, target } => {
                write!(f, "no edge {source:?} - {target:?} in the graph")
            }
            Self::UnknownNode(p) => write!(f, "node {p:?} is not in the graph"),
            Self::NoPath { source, target } => {
                write!(f, "there is no path from {source:?} to {target:?}")
            }
            Self::SelfLoop(p) => write!(f, "self-loop at {p:?} is not allowed"),
            Self::InvalidWeight {
                source,
                target,
                weight,
            } => write!(
                f,
                "invalid weight {weight} for edge {source:?} - {target:?} (must be finite and >= 0)"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Undirected weighted graph with points as nodes.
///
/// Invariants:
/// - `v ∈ adj[u]` iff `u ∈ adj[v]` iff `weights` holds both `(u, v)` and `(v, u)`
///   with the same value.
/// - Every endpoint of an edge is a key of `adj`; isolated nodes map to an
///   empty set.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub(super) adj: BTreeMap<Point, BTreeSet<Point>>,
    pub(super) weights: BTreeMap<(Point, Point), f64>,
}

impl Graph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an edge list, weighting each edge with `weight_fn(source, target)`.
    ///
    /// A repeated edge (in either direction) fails with `DuplicateEdge`.
    pub fn from_edges<I, F>(edges: I, weight_fn: F) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (Point, Point)>,
        F: Fn(Point, Point) -> f64,
    {
        let mut g = Self::new();
        for (source, target) in edges {
            g.add_edge(source, target, weight_fn(source, target))?;
        }
        Ok(g)
    }

    /// Insert a node without edges. No-op when already present.
    pub fn add_node(&mut self, node: Point) {
        self.adj.entry(node).or_default();
    }

    /// Insert the undirected edge `source - target`; creates missing nodes.
    ///
    /// Not idempotent: an existing edge fails with `DuplicateEdge`.
    pub fn add_edge(&mut self, source: Point, target: Point, weight: f64) -> Result<(), GraphError> {
        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                source,
                target,
                weight,
            });
        }
        if self.contains_edge(source, target) {
            return Err(GraphError::DuplicateEdge { source, target });
        }
        self.adj.entry(source).or_default().insert(target);
        self.adj.entry(target).or_default().insert(source);
        self.weights.insert((source, target), weight);
        self.weights.insert((target, source), weight);
        Ok(())
    }

    /// Delete the undirected edge; both nodes stay in the graph.
    ///
    /// Endpoints created by [`Graph::add_edge`] are not removed again, so an
    /// add/remove round trip restores the edge set but may leave new
    /// isolated nodes behind.
    pub fn remove_edge(&mut self, source: Point, target: Point) -> Result<f64, GraphError> {
        if !self.contains_edge(source, target) {
            return Err(GraphError::MissingEdge { source, target });
        }
        if let Some(n) = self.adj.get_mut(&source) {
            n.remove(&target);
        }
        if let Some(n) = self.adj.get_mut(&target) {
            n.remove(&source);
        }
        self.weights.remove(&(target, source));
        self.weights
            .remove(&(source, target))
            .ok_or(GraphError::MissingEdge { source, target })
    }

    #[inline]
    pub fn contains_node(&self, node: Point) -> bool {
        self.adj.contains_key(&node)
    }

    #[inline]
    pub fn contains_edge(&self, source: Point, target: Point) -> bool {
        self.weights.contains_key(&(source, target))
    }

    /// Weight of the edge, if present. Symmetric.
    #[inline]
    pub fn weight(&self, source: Point, target: Point) -> Option<f64> {
        self.weights.get(&(source, target)).copied()
    }

    /// Neighbours in ascending order; empty for unknown nodes.
    pub fn neighbors(&self, node: Point) -> impl Iterator<Item = Point> + '_ {
        self.adj.get(&node).into_iter().flatten().copied()
    }

    /// Number of incident edges; zero for unknown nodes.
    #[inline]
    pub fn degree(&self, node: Point) -> usize {
        self.adj.get(&node).map_or(0, BTreeSet::len)
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = Point> + '_ {
        self.adj.keys().copied()
    }

    /// Each undirected edge once, as `(smaller, larger, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point, f64)> + '_ {
        self.weights
            .iter()
            .filter(|((a, b), _)| a < b)
            .map(|(&(a, b), &w)| (a, b, w))
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.weights.len() / 2
    }

    /// Connected components, each sorted ascending; components are ordered by
    /// their smallest node. Isolated nodes form singleton components.
    pub fn connected_components(&self) -> Vec<Vec<Point>> {
        let mut seen: BTreeSet<Point> = BTreeSet::new();
        let mut out = Vec::new();
        for start in self.nodes() {
            if !seen.insert(start) {
                continue;
            }
            let mut comp = vec![start];
            let mut stack = vec![start];
            while let Some(u) = stack.pop() {
                for v in self.neighbors(u) {
                    if seen.insert(v) {
                        comp.push(v);
                        stack.push(v);
                    }
                }
            }
            comp.sort();
            out.push(comp);
        }
        out
    }

    /// Induced subgraph on `nodes`; unknown nodes are ignored.
    pub fn subgraph(&self, nodes: &[Point]) -> Graph {
        let keep: BTreeSet<Point> = nodes
            .iter()
            .copied()
            .filter(|p| self.contains_node(*p))
            .collect();
        let mut g = Graph::new();
        for &u in &keep {
            let entry = g.adj.entry(u).or_default();
            for v in self.neighbors(u).filter(|v| keep.contains(v)) {
                entry.insert(v);
                if let Some(w) = self.weight(u, v) {
                    g.weights.insert((u, v), w);
                }
            }
        }
        g
    }

    /// Whether `a` and `b` lie in the same component.
    ///
    /// Both sides are explored in turn, so a small side settles the answer
    /// without walking the large one.
    pub(crate) fn reachable(&self, a: Point, b: Point) -> bool {
        if !self.contains_node(a) || !self.contains_node(b) {
            return false;
        }
        if a == b {
            return true;
        }
        let mut seen = [BTreeSet::from([a]), BTreeSet::from([b])];
        let mut stacks = [vec![a], vec![b]];
        loop {
            for side in 0..2 {
                let Some(u) = stacks[side].pop() else {
                    return false;
                };
                for v in self.neighbors(u) {
                    if seen[1 - side].contains(&v) {
                        return true;
                    }
                    if seen[side].insert(v) {
                        stacks[side].push(v);
                    }
                }
            }
        }
    }
}
