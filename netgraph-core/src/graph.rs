//! Edge-list graph and its structural mutations.
//!
//! A [`Graph`] owns an ordered list of [`Edge`] records. Vertex and edge
//! counts are derived from that list: `edge_count()` is always the list
//! length and `vertex_count()` is always the size of the Vertex Directory.
//!
//! Vertex ids are never renumbered. Algorithms map ids to dense slots through
//! the [`VertexDirectory`], and [`Graph::add_vertex`] draws fresh ids from a
//! monotonic allocator so removed ids are not handed out again.
//!
//! # Example
//!
//! ```
//! use netgraph_core::Graph;
//!
//! let mut graph = Graph::from_edges(vec![
//!     (0, "A".to_string(), 1, "B".to_string(), 4),
//!     (1, "B".to_string(), 2, "C".to_string(), 3),
//! ])
//! .unwrap();
//!
//! let id = graph.add_vertex("D", 2, 5).unwrap();
//! assert_eq!(id, 3);
//! assert_eq!(graph.vertex_count(), 4);
//! ```

use crate::directory::VertexDirectory;
use crate::error::{GraphError, Result};
use crate::mst::{self, SpanningForest};
use crate::shortest_path::{self, ShortestPaths};
use crate::types::{Edge, RawEdge, VertexId, Weight};
use tracing::{debug, info};

/// Weighted graph stored as an ordered edge list.
#[derive(Clone, Debug)]
pub struct Graph {
    edges: Vec<Edge>,
    vertex_count: usize,
    /// `None` once `VertexId::MAX` has been handed out.
    next_id: Option<VertexId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            vertex_count: 0,
            next_id: Some(0),
        }
    }
}

impl Graph {
    /// Build a graph from raw records, keeping their order.
    ///
    /// Fails with [`GraphError::Construction`] if a display name is empty or
    /// contains whitespace, since such a name cannot be written back to the
    /// edge-list format.
    pub fn from_edges<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawEdge>,
    {
        let mut edges = Vec::new();
        for (i, raw) in records.into_iter().enumerate() {
            let record = i + 1;
            validate_name(&raw.1).map_err(|reason| {
                GraphError::construction(record, format!("source {}", reason))
            })?;
            validate_name(&raw.3).map_err(|reason| {
                GraphError::construction(record, format!("destination {}", reason))
            })?;
            edges.push(Edge::from(raw));
        }

        let directory = VertexDirectory::derive(&edges);
        let next_id = match directory.max_id() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };

        info!(
            "Built graph with {} vertices and {} edges",
            directory.len(),
            edges.len()
        );

        Ok(Self {
            vertex_count: directory.len(),
            edges,
            next_id,
        })
    }

    /// Parse edge-list text and build a graph from it.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_edges(crate::loader::parse_edges(input)?)
    }

    // ==================== Queries ====================

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Derive the current Vertex Directory.
    pub fn directory(&self) -> VertexDirectory {
        VertexDirectory::derive(&self.edges)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.edges.iter().any(|e| e.touches(id))
    }

    /// Display name of `id`, taken from the first edge that mentions it.
    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.edges.iter().find_map(|e| {
            if e.source_id == id {
                Some(e.source_name.as_str())
            } else if e.dest_id == id {
                Some(e.dest_name.as_str())
            } else {
                None
            }
        })
    }

    /// Id that the next [`Graph::add_vertex`] call will allocate, or `None`
    /// when the id space is exhausted.
    pub fn next_vertex_id(&self) -> Option<VertexId> {
        self.next_id
    }

    /// Render the edge list in the textual input format.
    pub fn to_text(&self) -> String {
        crate::loader::write_edges(&self.edges)
    }

    // ==================== Algorithms ====================

    /// Single-source shortest paths with negative-cycle detection.
    pub fn bellman_ford(&self, source: VertexId) -> Result<ShortestPaths> {
        shortest_path::bellman_ford(self, source)
    }

    /// Minimum spanning tree (or forest) by Kruskal's algorithm.
    pub fn kruskal_mst(&self) -> SpanningForest {
        mst::kruskal(self)
    }

    // ==================== Mutations ====================

    /// Replace the weight of the edge at `index`.
    pub fn change_weight(&mut self, index: usize, weight: Weight) -> Result<()> {
        let len = self.edges.len();
        let edge = self
            .edges
            .get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })?;

        debug!(
            "Changing weight of edge {} from {} to {}",
            index, edge.weight, weight
        );
        edge.weight = weight;
        Ok(())
    }

    /// Remove the edge at `index` and return it.
    ///
    /// Endpoints left without any edge disappear from the vertex count.
    pub fn remove_edge(&mut self, index: usize) -> Result<Edge> {
        if index >= self.edges.len() {
            return Err(GraphError::IndexOutOfRange {
                index,
                len: self.edges.len(),
            });
        }

        let removed = self.edges.remove(index);
        self.refresh_vertex_count();
        debug!("Removed edge {}: {}", index, removed);
        Ok(removed)
    }

    /// Remove every edge touching `id`, returning how many were removed.
    ///
    /// The vertex count is recomputed from the surviving edges, so neighbours
    /// that only connected through `id` disappear as well.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<usize> {
        if !self.contains_vertex(id) {
            return Err(GraphError::UnknownVertex { id });
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        let removed = before - self.edges.len();

        self.refresh_vertex_count();
        debug!(
            "Removed vertex {} and {} edges ({} vertices remain)",
            id, removed, self.vertex_count
        );
        Ok(removed)
    }

    /// Add a vertex named `name` with one edge to `target`, returning its id.
    ///
    /// The new id comes from the allocator and never collides with a
    /// current or previously removed id.
    pub fn add_vertex(&mut self, name: &str, target: VertexId, weight: Weight) -> Result<VertexId> {
        let target_name = self
            .vertex_name(target)
            .ok_or(GraphError::UnknownVertex { id: target })?
            .to_string();

        let record = self.edges.len() + 1;
        validate_name(name)
            .map_err(|reason| GraphError::construction(record, format!("vertex {}", reason)))?;

        let Some(id) = self.next_id else {
            return Err(GraphError::construction(record, "vertex id space exhausted"));
        };

        self.edges.push(Edge::new(id, name, target, target_name, weight));
        self.next_id = id.checked_add(1);
        self.refresh_vertex_count();

        debug!("Added vertex {} ({}) -> {} [{}]", id, name, target, weight);
        Ok(id)
    }

    fn refresh_vertex_count(&mut self) {
        self.vertex_count = VertexDirectory::derive(&self.edges).len();
    }
}

/// Names are whitespace-separated tokens in the text format.
fn validate_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        Err("name is empty".to_string())
    } else if name.chars().any(char::is_whitespace) {
        Err(format!("name '{}' contains whitespace", name))
    } else {
        Ok(())
    }
}
