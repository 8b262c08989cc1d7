//! Minimum spanning tree construction (Kruskal).
//!
//! Edges are treated as undirected. They are scanned in ascending weight
//! order, with equal weights kept in edge-list order, and an edge is accepted
//! when its endpoints are still in different components. Component
//! membership is tracked by petgraph's [`UnionFind`] (union by rank with path
//! compression) over directory slots.
//!
//! On a disconnected graph the result is a spanning forest with one tree per
//! connected component.

use crate::graph::Graph;
use crate::types::{Edge, WeightSum};
use petgraph::unionfind::UnionFind;
use serde::Serialize;
use tracing::debug;

/// Edges chosen by Kruskal's algorithm, in acceptance order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    pub edges: Vec<Edge>,
    /// Exact sum of the accepted edge weights.
    pub total_weight: WeightSum,
    /// Number of trees; 1 for a connected, non-empty graph.
    pub trees: usize,
}

impl SpanningForest {
    /// Whether the result connects every vertex into a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.trees == 1
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Compute a minimum spanning tree (or forest) of `graph`.
pub fn kruskal(graph: &Graph) -> SpanningForest {
    let directory = graph.directory();

    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    // Stable: ties keep edge-list order.
    sorted.sort_by_key(|e| e.weight);

    let mut components = UnionFind::<usize>::new(directory.len());
    let mut accepted = Vec::with_capacity(directory.len().saturating_sub(1));

    for edge in sorted {
        let (Some(a), Some(b)) = (directory.slot(edge.source_id), directory.slot(edge.dest_id))
        else {
            continue;
        };
        if components.union(a, b) {
            accepted.push(edge.clone());
        }
    }

    let total_weight: WeightSum = accepted.iter().map(|e| WeightSum::from(e.weight)).sum();
    let trees = directory.len() - accepted.len();

    debug!(
        "Kruskal accepted {} of {} edges ({} trees, total weight {})",
        accepted.len(),
        graph.edge_count(),
        trees,
        total_weight
    );

    SpanningForest {
        edges: accepted,
        total_weight,
        trees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawEdge, VertexId, Weight};

    fn raw(s: VertexId, d: VertexId, w: Weight) -> RawEdge {
        (s, format!("v{}", s), d, format!("v{}", d), w)
    }

    fn graph(edges: Vec<RawEdge>) -> Graph {
        Graph::from_edges(edges).unwrap()
    }

    #[test]
    fn test_example_scenario() {
        let g = Graph::from_edges(vec![
            (0, "A".to_string(), 1, "B".to_string(), 4),
            (1, "B".to_string(), 2, "C".to_string(), 3),
            (0, "A".to_string(), 2, "C".to_string(), 10),
        ])
        .unwrap();

        let mst = g.kruskal_mst();
        // Acceptance order follows ascending weight.
        assert_eq!(
            mst.edges,
            vec![Edge::new(1, "B", 2, "C", 3), Edge::new(0, "A", 1, "B", 4)]
        );
        assert_eq!(mst.total_weight, 7);
        assert!(mst.is_spanning_tree());
    }

    #[test]
    fn test_edge_count_is_vertices_minus_one() {
        let g = graph(vec![
            raw(0, 1, 7),
            raw(0, 3, 5),
            raw(1, 2, 8),
            raw(1, 3, 9),
            raw(1, 4, 7),
            raw(2, 4, 5),
            raw(3, 4, 15),
            raw(3, 5, 6),
            raw(4, 5, 8),
            raw(4, 6, 9),
            raw(5, 6, 11),
        ]);
        let mst = g.kruskal_mst();
        assert_eq!(mst.len(), g.vertex_count() - 1);
        assert_eq!(mst.total_weight, 39);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Triangle with all weights equal: the first two edges win.
        let g = graph(vec![raw(0, 1, 1), raw(1, 2, 1), raw(2, 0, 1)]);
        let mst = g.kruskal_mst();
        assert_eq!(
            mst.edges,
            vec![Edge::new(0, "v0", 1, "v1", 1), Edge::new(1, "v1", 2, "v2", 1)]
        );

        let g = graph(vec![raw(2, 0, 1), raw(1, 2, 1), raw(0, 1, 1)]);
        let mst = g.kruskal_mst();
        assert_eq!(mst.edges[0].source_id, 2);
        assert_eq!(mst.edges[1].source_id, 1);
    }

    #[test]
    fn test_self_loops_and_parallel_edges_skipped() {
        let g = graph(vec![raw(0, 0, -5), raw(0, 1, 3), raw(1, 0, 2)]);
        let mst = g.kruskal_mst();
        assert_eq!(mst.edges, vec![Edge::new(1, "v1", 0, "v0", 2)]);
        assert_eq!(mst.total_weight, 2);
    }

    #[test]
    fn test_negative_weights() {
        let g = graph(vec![raw(0, 1, -2), raw(1, 2, -1), raw(0, 2, -3)]);
        let mst = g.kruskal_mst();
        assert_eq!(mst.total_weight, -5);
    }

    #[test]
    fn test_total_beyond_weight_range_is_exact() {
        let g = graph(vec![raw(0, 1, Weight::MAX), raw(1, 2, Weight::MAX)]);
        let mst = g.kruskal_mst();
        assert_eq!(mst.total_weight, 2 * WeightSum::from(Weight::MAX));

        let g = graph(vec![raw(0, 1, Weight::MIN), raw(1, 2, Weight::MIN)]);
        assert_eq!(g.kruskal_mst().total_weight, 2 * WeightSum::from(Weight::MIN));
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let g = graph(vec![raw(0, 1, 1), raw(10, 11, 2), raw(11, 12, 3)]);
        let mst = g.kruskal_mst();
        assert_eq!(mst.len(), 3);
        assert_eq!(mst.trees, 2);
        assert!(!mst.is_spanning_tree());
    }

    #[test]
    fn test_empty_graph() {
        let mst = Graph::default().kruskal_mst();
        assert!(mst.is_empty());
        assert_eq!(mst.trees, 0);
        assert_eq!(mst.total_weight, 0);
    }
}
