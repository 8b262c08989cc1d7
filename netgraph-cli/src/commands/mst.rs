//! Minimum spanning tree command - `netgraph mst`

use crate::output::{heading, CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use netgraph_core::{Edge, Graph, WeightSum};
use serde::Serialize;

/// Kruskal result as shown to the user
#[derive(Debug, Serialize)]
pub struct SpanningTreeReport {
    pub edges: Vec<Edge>,
    pub total_weight: WeightSum,
    pub trees: usize,
}

impl SpanningTreeReport {
    pub fn from_graph(graph: &Graph) -> Self {
        let forest = graph.kruskal_mst();
        Self {
            edges: forest.edges,
            total_weight: forest.total_weight,
            trees: forest.trees,
        }
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.edges
            .iter()
            .map(|e| {
                vec![
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

impl Outputter for SpanningTreeReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let title = if self.trees > 1 {
            format!("Minimum spanning forest ({} trees)", self.trees)
        } else {
            "Minimum spanning tree".to_string()
        };

        let mut output = String::new();
        output.push_str(&format!("{}\n", heading(&title, config)));
        output.push_str(&TableOutput::from_rows(
            &["Source", "Name", "Destination", "Name", "Weight"],
            &self.rows(),
            config,
        ));
        output.push('\n');
        output.push_str(&TableOutput::format_key_value(
            &[
                ("Total weight", self.total_weight.to_string()),
                ("Trees", self.trees.to_string()),
            ],
            config,
        ));
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &["source_id", "source_name", "dest_id", "dest_name", "weight"],
            &self.rows(),
        )
    }
}

/// Run the mst command
pub fn run(graph: &Graph, config: OutputConfig) -> Result<()> {
    Output::new(SpanningTreeReport::from_graph(graph), config).render()
}
