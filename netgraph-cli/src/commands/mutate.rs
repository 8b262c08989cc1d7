//! Mutation commands
//!
//! - `netgraph set-weight <INDEX> <WEIGHT>`
//! - `netgraph remove-edge <INDEX>`
//! - `netgraph remove-vertex <ID>`
//! - `netgraph add-vertex <NAME> <TARGET> <WEIGHT>`
//!
//! The input file is never modified in place. The updated edge list goes to
//! `--output` when given, otherwise to stdout in the input format so it can
//! be piped into the next command.

use crate::output::{Output, OutputConfig, SuccessMessage};
use anyhow::{Context, Result};
use netgraph_core::{Graph, VertexId, Weight};
use std::path::Path;

/// A single structural change to the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetWeight { index: usize, weight: Weight },
    RemoveEdge { index: usize },
    RemoveVertex { id: VertexId },
    AddVertex {
        name: String,
        target: VertexId,
        weight: Weight,
    },
}

impl Mutation {
    /// Apply to `graph`, returning a one-line summary of what changed.
    pub fn apply(&self, graph: &mut Graph) -> Result<String> {
        let summary = match self {
            Mutation::SetWeight { index, weight } => {
                graph.change_weight(*index, *weight)?;
                format!("Edge {} now has weight {}", index, weight)
            }
            Mutation::RemoveEdge { index } => {
                let removed = graph.remove_edge(*index)?;
                format!("Removed edge {}: {}", index, removed)
            }
            Mutation::RemoveVertex { id } => {
                let removed = graph.remove_vertex(*id)?;
                format!(
                    "Removed vertex {} and {} edges ({} vertices remain)",
                    id,
                    removed,
                    graph.vertex_count()
                )
            }
            Mutation::AddVertex {
                name,
                target,
                weight,
            } => {
                let id = graph.add_vertex(name, *target, *weight)?;
                format!("Added vertex {} ({}) linked to {}", id, name, target)
            }
        };
        Ok(summary)
    }
}

/// Run a mutation command
pub fn run(
    mut graph: Graph,
    mutation: &Mutation,
    output: Option<&Path>,
    config: OutputConfig,
) -> Result<()> {
    let summary = mutation.apply(&mut graph)?;
    tracing::info!("{}", summary);

    match output {
        Some(path) => {
            std::fs::write(path, graph.to_text())
                .with_context(|| format!("Failed to write edge list: {}", path.display()))?;
            let message = format!("{} (written to {})", summary, path.display());
            Output::new(SuccessMessage::new(message), config).render()
        }
        None => {
            print!("{}", graph.to_text());
            Ok(())
        }
    }
}
