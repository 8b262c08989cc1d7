//! Listing commands
//!
//! - `netgraph vertices` - Vertex Directory (id and display name)
//! - `netgraph edges` - Edge list with positional indexes, as accepted by
//!   `set-weight` and `remove-edge`

use crate::output::{heading, CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use netgraph_core::{Graph, VertexId, VertexIdentity, Weight};
use serde::Serialize;

/// Vertex listing result
#[derive(Debug, Serialize)]
pub struct VertexList {
    pub vertices: Vec<VertexIdentity>,
    pub total: usize,
}

impl VertexList {
    pub fn from_graph(graph: &Graph) -> Self {
        let vertices = graph.directory().into_vec();
        Self {
            total: vertices.len(),
            vertices,
        }
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.vertices
            .iter()
            .map(|v| vec![v.id.to_string(), v.name.clone()])
            .collect()
    }
}

impl Outputter for VertexList {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} ({})\n", heading("Vertices", config), self.total));
        output.push_str(&TableOutput::from_rows(&["Id", "Name"], &self.rows(), config));
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(&["id", "name"], &self.rows())
    }
}

/// One edge together with its position in the edge list
#[derive(Debug, Serialize)]
pub struct IndexedEdge {
    pub index: usize,
    pub source_id: VertexId,
    pub source_name: String,
    pub dest_id: VertexId,
    pub dest_name: String,
    pub weight: Weight,
}

/// Edge listing result
#[derive(Debug, Serialize)]
pub struct EdgeList {
    pub edges: Vec<IndexedEdge>,
    pub total: usize,
}

impl EdgeList {
    pub fn from_graph(graph: &Graph) -> Self {
        let edges: Vec<IndexedEdge> = graph
            .edges()
            .iter()
            .enumerate()
            .map(|(index, e)| IndexedEdge {
                index,
                source_id: e.source_id,
                source_name: e.source_name.clone(),
                dest_id: e.dest_id,
                dest_name: e.dest_name.clone(),
                weight: e.weight,
            })
            .collect();
        Self {
            total: edges.len(),
            edges,
        }
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.edges
            .iter()
            .map(|e| {
                vec![
                    e.index.to_string(),
                    e.source_id.to_string(),
                    e.source_name.clone(),
                    e.dest_id.to_string(),
                    e.dest_name.clone(),
                    e.weight.to_string(),
                ]
            })
            .collect()
    }
}

const EDGE_HEADERS: [&str; 6] = ["Edge", "Source", "Name", "Destination", "Name", "Weight"];

impl Outputter for EdgeList {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} ({})\n", heading("Edges", config), self.total));
        output.push_str(&TableOutput::from_rows(&EDGE_HEADERS, &self.rows(), config));
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &["index", "source_id", "source_name", "dest_id", "dest_name", "weight"],
            &self.rows(),
        )
    }
}

/// Run the vertices command
pub fn run_vertices(graph: &Graph, config: OutputConfig) -> Result<()> {
    Output::new(VertexList::from_graph(graph), config).render()
}

/// Run the edges command
pub fn run_edges(graph: &Graph, config: OutputConfig) -> Result<()> {
    Output::new(EdgeList::from_graph(graph), config).render()
}
