//! Command implementations for the netgraph CLI
//!
//! The graph is loaded once in `main` and handed to the command runners.
//! Query commands render a result record; mutation commands emit the updated
//! edge list.

pub mod mst;
pub mod mutate;
pub mod paths;
pub mod query;

use anyhow::{Context, Result};
use netgraph_core::Graph;
use std::path::Path;

/// Read and parse the edge-list file at `path`.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list: {}", path.display()))?;
    let graph = Graph::parse(&content)
        .with_context(|| format!("Failed to load graph from {}", path.display()))?;

    tracing::debug!(
        "Loaded {} ({} vertices, {} edges)",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Display name for `id`, or a dash when it is not in the graph.
pub(crate) fn name_or_dash(graph: &Graph, id: netgraph_core::VertexId) -> String {
    graph.vertex_name(id).unwrap_or("-").to_string()
}
