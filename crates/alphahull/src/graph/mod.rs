//! Undirected weighted graph over planar points, with Dijkstra search.
//!
//! Purpose
//! - General-purpose engine for the boundary assembly step: the extractor
//!   builds its alpha-edge and boundary graphs here, splits them into
//!   connected components and closes rings with shortest paths.
//!
//! Design
//! - Two owned containers: adjacency `node → set of nodes` and weights
//!   `(node, node) → f64`, both mirrored. `Graph` is the only writer, so the
//!   mirrored-edge invariant holds after every mutation.
//! - `BTreeMap`/`BTreeSet` everywhere: iteration order, Dijkstra tie-breaking
//!   and component order are deterministic for a given edge set.
//! - Failures are variants of `GraphError`, never panics.
//!
//! Layout
//! - `types.rs` (graph and error types), `dijkstra.rs` (search and path
//!   reconstruction).

mod dijkstra;
mod types;

pub use dijkstra::ShortestPathTree;
pub use types::{Graph, GraphError};
