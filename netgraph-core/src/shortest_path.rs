//! Single-source shortest paths (Bellman-Ford).
//!
//! Distances are computed over dense slots from the [`VertexDirectory`], so
//! arbitrary (sparse, non-zero-based) vertex ids work without renumbering.
//! Results are keyed by vertex id.
//!
//! After `V - 1` relaxation passes a further pass checks whether any edge can
//! still be relaxed; if so a negative-weight cycle is reachable from the
//! source. That detection pass runs on a scratch copy, so reported distances
//! are the ones after the `V - 1` passes. One offending cycle is recovered
//! from the scratch predecessor table.
//!
//! Sums are accumulated as [`WeightSum`], so no walk of at most `V` edges can
//! overflow and the detection pass always sees the true sums. A reported
//! distance is exact whenever it fits in `Weight`; one that does not (only
//! possible once a negative cycle is reachable) is clamped to the nearest
//! bound.

use crate::directory::VertexDirectory;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::types::{Distance, VertexId, WeightSum};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Result of a Bellman-Ford run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// Vertex the distances are measured from.
    pub source: VertexId,
    /// Distance to every vertex in the graph, keyed by id.
    pub distances: BTreeMap<VertexId, Distance>,
    /// Whether a negative-weight cycle is reachable from the source.
    pub negative_cycle: bool,
    /// One such cycle, in edge order, when it could be recovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<VertexId>>,
    #[serde(skip)]
    predecessors: BTreeMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// Distance to `id`, or `None` if `id` is not in the graph.
    pub fn distance(&self, id: VertexId) -> Option<Distance> {
        self.distances.get(&id).copied()
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Vertices on a shortest path from the source to `target`, inclusive.
    ///
    /// Returns `None` when `target` is unknown or unreachable, and whenever a
    /// negative cycle was detected (shortest paths are then undefined).
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if self.negative_cycle || !self.distance(target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.predecessors.get(&current)?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Run Bellman-Ford from `source`.
///
/// Fails with [`GraphError::InvalidSource`] if `source` is not a vertex of
/// the graph.
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    let directory = graph.directory();
    let source_slot = directory
        .slot(source)
        .ok_or(GraphError::InvalidSource { id: source })?;
    let n = directory.len();

    let arcs: Vec<(usize, usize, WeightSum)> = graph
        .edges()
        .iter()
        .filter_map(|e| {
            Some((
                directory.slot(e.source_id)?,
                directory.slot(e.dest_id)?,
                WeightSum::from(e.weight),
            ))
        })
        .collect();

    // `None` is unreachable.
    let mut dist: Vec<Option<WeightSum>> = vec![None; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[source_slot] = Some(0);

    // A simple path visits at most V - 1 edges.
    for _ in 1..n {
        for &(u, v, w) in &arcs {
            if relax(&mut dist, u, v, w) {
                pred[v] = Some(u);
            }
        }
    }

    let mut check_dist = dist.clone();
    let mut check_pred = pred.clone();
    let mut last_relaxed = None;
    for &(u, v, w) in &arcs {
        if relax(&mut check_dist, u, v, w) {
            check_pred[v] = Some(u);
            last_relaxed = Some(v);
        }
    }

    let negative_cycle = last_relaxed.is_some();
    let cycle = last_relaxed
        .and_then(|v| extract_cycle(&check_pred, v, n))
        .map(|slots| to_ids(&directory, &slots));

    if negative_cycle {
        warn!("Negative-weight cycle reachable from vertex {}", source);
    }

    let distances = directory
        .ids()
        .zip(dist.iter().map(|&d| Distance::from_sum(d)))
        .collect();
    let predecessors = pred
        .iter()
        .enumerate()
        .filter_map(|(slot, p)| Some((directory.id_at(slot)?, directory.id_at((*p)?)?)))
        .collect();

    debug!(
        "Bellman-Ford from {} over {} vertices and {} edges",
        source,
        n,
        arcs.len()
    );

    Ok(ShortestPaths {
        source,
        distances,
        negative_cycle,
        cycle,
        predecessors,
    })
}

/// Lower `dist[v]` through the arc `u -> v` if that is shorter.
fn relax(dist: &mut [Option<WeightSum>], u: usize, v: usize, w: WeightSum) -> bool {
    let Some(du) = dist[u] else {
        return false;
    };
    let candidate = du + w;
    if dist[v].map_or(true, |dv| candidate < dv) {
        dist[v] = Some(candidate);
        true
    } else {
        false
    }
}

/// Walk back far enough to land on the cycle, then collect it.
fn extract_cycle(pred: &[Option<usize>], start: usize, n: usize) -> Option<Vec<usize>> {
    let mut on_cycle = start;
    for _ in 0..n {
        on_cycle = pred[on_cycle]?;
    }

    let mut cycle = vec![on_cycle];
    let mut current = pred[on_cycle]?;
    while current != on_cycle {
        cycle.push(current);
        if cycle.len() > n {
            return None;
        }
        current = pred[current]?;
    }
    cycle.reverse();
    Some(cycle)
}

fn to_ids(directory: &VertexDirectory, slots: &[usize]) -> Vec<VertexId> {
    slots.iter().filter_map(|&s| directory.id_at(s)).collect()
}
