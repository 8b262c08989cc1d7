//! netgraph core - edge-list graph engine.
//!
//! Maintains a weighted graph built from a flat list of
//! `(source, destination, weight)` records and provides:
//!
//! - **Shortest paths**: Bellman-Ford from a single source, with
//!   negative-cycle detection
//! - **Minimum spanning trees**: Kruskal with a union-find over vertex slots
//! - **Structural mutation**: weight change, edge removal, cascading vertex
//!   removal and vertex addition
//!
//! Vertices are derived from the edges (see [`directory`]). Ids are never
//! renumbered; algorithms map them to dense slots internally.
//!
//! The crate performs no I/O. [`loader`] converts between text and records;
//! reading and writing files is left to the caller.
//!
//! # Usage
//!
//! ```
//! use netgraph_core::{Distance, Graph};
//!
//! let graph = Graph::parse("0 A 1 B 4\n1 B 2 C 3\n0 A 2 C 10\n").unwrap();
//!
//! let paths = graph.bellman_ford(0).unwrap();
//! assert_eq!(paths.distance(2), Some(Distance::Finite(7)));
//! assert!(!paths.negative_cycle);
//!
//! let mst = graph.kruskal_mst();
//! assert_eq!(mst.total_weight, 7);
//! ```

pub mod directory;
pub mod error;
pub mod graph;
pub mod loader;
pub mod mst;
pub mod shortest_path;
pub mod types;

pub use directory::VertexDirectory;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use mst::SpanningForest;
pub use shortest_path::ShortestPaths;
pub use types::{Distance, Edge, RawEdge, VertexId, VertexIdentity, Weight, WeightSum};

/// Get the version of netgraph-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
