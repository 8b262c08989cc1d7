//! Shortest-path command - `netgraph shortest-path <SOURCE> [--to <TARGET>]`
//!
//! Runs Bellman-Ford from SOURCE and lists the distance to every vertex.
//! With `--to`, the vertex sequence of one shortest path is reported too.

use super::name_or_dash;
use crate::output::{heading, CsvOutput, Output, OutputConfig, Outputter, TableOutput};
use anyhow::Result;
use colored::Colorize;
use netgraph_core::{Distance, Graph, GraphError, VertexId};
use serde::Serialize;

/// Distance to a single vertex
#[derive(Debug, Serialize)]
pub struct DistanceRow {
    pub id: VertexId,
    pub name: String,
    pub distance: Distance,
}

/// Shortest-path result
#[derive(Debug, Serialize)]
pub struct ShortestPathReport {
    pub source: VertexId,
    pub source_name: String,
    pub distances: Vec<DistanceRow>,
    pub negative_cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<VertexId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<VertexId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<VertexId>>,
}

impl ShortestPathReport {
    pub fn build(graph: &Graph, source: VertexId, target: Option<VertexId>) -> Result<Self> {
        if let Some(id) = target {
            if !graph.contains_vertex(id) {
                return Err(GraphError::UnknownVertex { id }.into());
            }
        }

        let result = graph.bellman_ford(source)?;
        let distances = result
            .distances
            .iter()
            .map(|(&id, &distance)| DistanceRow {
                id,
                name: name_or_dash(graph, id),
                distance,
            })
            .collect();

        Ok(Self {
            source,
            source_name: name_or_dash(graph, source),
            distances,
            negative_cycle: result.negative_cycle,
            path: target.and_then(|id| result.path_to(id)),
            cycle: result.cycle,
            target,
        })
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.distances
            .iter()
            .map(|row| vec![row.id.to_string(), row.name.clone(), row.distance.to_string()])
            .collect()
    }

    fn format_ids(ids: &[VertexId]) -> String {
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl Outputter for ShortestPathReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} from {} ({})\n",
            heading("Shortest paths", config),
            self.source,
            self.source_name
        ));

        if self.negative_cycle {
            let warning = "WARNING: negative-weight cycle reachable from source";
            if config.use_colors() {
                output.push_str(&format!("{}\n", warning.yellow().bold()));
            } else {
                output.push_str(&format!("{}\n", warning));
            }
            if let Some(cycle) = &self.cycle {
                output.push_str(&format!("  cycle: {}\n", Self::format_ids(cycle)));
            }
        }

        output.push_str(&TableOutput::from_rows(
            &["Id", "Name", "Distance"],
            &self.rows(),
            config,
        ));

        if let Some(target) = self.target {
            match &self.path {
                Some(path) => {
                    output.push_str(&format!("\nPath to {}: {}", target, Self::format_ids(path)))
                }
                None => output.push_str(&format!("\nPath to {}: none", target)),
            }
        }
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(&["id", "name", "distance"], &self.rows())
    }
}

/// Run the shortest-path command
pub fn run(
    graph: &Graph,
    source: VertexId,
    target: Option<VertexId>,
    config: OutputConfig,
) -> Result<()> {
    let report = ShortestPathReport::build(graph, source, target)?;
    Output::new(report, config).render()
}
