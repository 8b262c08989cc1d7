//! Property checks for the graph algorithms on small generated graphs.
//!
//! Kruskal is compared against brute-force enumeration of every spanning
//! tree; Bellman-Ford is checked against the relaxation conditions it must
//! leave behind.

use netgraph_core::{Distance, Graph, RawEdge, VertexId, Weight, WeightSum};

// ============================================================================
// Test Utilities
// ============================================================================

/// Deterministic weight generator so every run sees the same graphs.
struct WeightGen(u64);

impl WeightGen {
    fn next(&mut self, lo: Weight, hi: Weight) -> Weight {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        lo + ((self.0 >> 33) % (hi - lo + 1) as u64) as Weight
    }
}

fn raw(s: VertexId, d: VertexId, w: Weight) -> RawEdge {
    (s, format!("n{}", s), d, format!("n{}", d), w)
}

/// Complete graph on `n` vertices with generated weights.
fn complete_graph(n: VertexId, gen: &mut WeightGen, lo: Weight, hi: Weight) -> Vec<RawEdge> {
    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            edges.push(raw(a, b, gen.next(lo, hi)));
        }
    }
    edges
}

/// Ring plus chords on `n` vertices, directed both ways around the ring.
fn ring_graph(n: VertexId, gen: &mut WeightGen, lo: Weight, hi: Weight) -> Vec<RawEdge> {
    let mut edges = Vec::new();
    for a in 0..n {
        edges.push(raw(a, (a + 1) % n, gen.next(lo, hi)));
        if a % 2 == 0 {
            edges.push(raw(a, (a + 2) % n, gen.next(lo, hi)));
        }
    }
    edges
}

fn find(parent: &mut [usize], x: usize) -> usize {
    if parent[x] != x {
        parent[x] = find(parent, parent[x]);
    }
    parent[x]
}

/// Minimum spanning-tree weight by trying every (V-1)-edge subset.
fn brute_force_mst_weight(vertices: &[VertexId], edges: &[RawEdge]) -> Option<Weight> {
    let slot = |id: VertexId| vertices.iter().position(|&v| v == id).unwrap();
    let need = vertices.len() - 1;
    let mut best: Option<Weight> = None;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != need {
            continue;
        }
        let mut parent: Vec<usize> = (0..vertices.len()).collect();
        let mut acyclic = true;
        let mut total = 0;
        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let a = find(&mut parent, slot(edge.0));
            let b = find(&mut parent, slot(edge.2));
            if a == b {
                acyclic = false;
                break;
            }
            parent[a] = b;
            total += edge.4;
        }
        if acyclic {
            best = Some(best.map_or(total, |b| b.min(total)));
        }
    }
    best
}

/// Whether any edge out of a reachable vertex could still be relaxed.
fn relaxable_edge_exists(graph: &Graph, distances: &dyn Fn(VertexId) -> Distance) -> bool {
    graph.edges().iter().any(|e| match distances(e.source_id) {
        Distance::Finite(du) => Distance::Finite(du + e.weight) < distances(e.dest_id),
        Distance::Unreachable => false,
    })
}

// ============================================================================
// Kruskal
// ============================================================================

#[test]
fn test_kruskal_matches_brute_force() {
    let mut gen = WeightGen(7);
    for n in 2..=6 {
        for round in 0..4 {
            let edges = if round % 2 == 0 {
                complete_graph(n, &mut gen, -5, 20)
            } else {
                ring_graph(n, &mut gen, 1, 9)
            };
            let graph = Graph::from_edges(edges.clone()).unwrap();
            let vertices: Vec<VertexId> = graph.directory().ids().collect();

            let mst = graph.kruskal_mst();
            assert_eq!(mst.len(), graph.vertex_count() - 1, "n={} round={}", n, round);
            assert!(mst.is_spanning_tree());

            let expected = brute_force_mst_weight(&vertices, &edges).unwrap();
            assert_eq!(mst.total_weight, WeightSum::from(expected), "n={} round={}", n, round);
        }
    }
}

#[test]
fn test_kruskal_is_deterministic() {
    let mut gen = WeightGen(99);
    // Narrow weight range forces many ties.
    let edges = complete_graph(6, &mut gen, 1, 3);
    let graph = Graph::from_edges(edges).unwrap();
    assert_eq!(graph.kruskal_mst(), graph.kruskal_mst());
}

// ============================================================================
// Bellman-Ford
// ============================================================================

#[test]
fn test_bellman_ford_leaves_no_relaxable_edge() {
    let mut gen = WeightGen(3);
    for n in 2..=6 {
        let graph = Graph::from_edges(ring_graph(n, &mut gen, 0, 12)).unwrap();
        for source in 0..n {
            let result = graph.bellman_ford(source).unwrap();
            assert!(!result.negative_cycle);
            assert_eq!(result.distance(source), Some(Distance::Finite(0)));

            let lookup = |id| result.distance(id).unwrap();
            assert!(!relaxable_edge_exists(&graph, &lookup));
        }
    }
}

#[test]
fn test_negative_cycle_flag_matches_relaxability() {
    let mut gen = WeightGen(11);
    let mut flagged = 0;
    for round in 0..40 {
        let n = 3 + (round % 4);
        let graph = Graph::from_edges(ring_graph(n, &mut gen, -6, 8)).unwrap();
        let result = graph.bellman_ford(0).unwrap();

        let lookup = |id| result.distance(id).unwrap();
        assert_eq!(
            result.negative_cycle,
            relaxable_edge_exists(&graph, &lookup),
            "round={}",
            round
        );
        if result.negative_cycle {
            flagged += 1;
            let cycle = result.cycle.clone().unwrap();
            let cycle_weight: Weight = cycle
                .iter()
                .zip(cycle.iter().cycle().skip(1))
                .map(|(&a, &b)| {
                    graph
                        .edges()
                        .iter()
                        .filter(|e| e.source_id == a && e.dest_id == b)
                        .map(|e| e.weight)
                        .min()
                        .unwrap()
                })
                .sum();
            assert!(cycle_weight < 0, "round={} cycle={:?}", round, cycle);
        }
    }
    assert!(flagged > 0, "generator should produce some negative cycles");
}

#[test]
fn test_three_cycle_threshold() {
    let minus_one = Graph::from_edges(vec![raw(0, 1, 2), raw(1, 2, 2), raw(2, 0, -5)]).unwrap();
    assert!(minus_one.bellman_ford(0).unwrap().negative_cycle);

    let plus_one = Graph::from_edges(vec![raw(0, 1, 2), raw(1, 2, 2), raw(2, 0, -3)]).unwrap();
    assert!(!plus_one.bellman_ford(0).unwrap().negative_cycle);
}

// ============================================================================
// Mutations
// ============================================================================

#[test]
fn test_remove_vertex_never_lists_removed_id() {
    let mut gen = WeightGen(5);
    for victim in 0..6 {
        let mut graph = Graph::from_edges(complete_graph(6, &mut gen, 1, 9)).unwrap();
        graph.remove_vertex(victim).unwrap();

        let directory = graph.directory();
        assert!(!directory.contains(victim));
        assert_eq!(graph.vertex_count(), directory.len());
        assert_eq!(graph.vertex_count(), 5);
        assert!(graph.edges().iter().all(|e| !e.touches(victim)));
    }
}

#[test]
fn test_remove_hub_vertex_counts_actual_survivors() {
    // Star around 0 plus one edge between 3 and 4.
    let mut graph = Graph::from_edges(vec![
        raw(0, 1, 1),
        raw(0, 2, 1),
        raw(3, 0, 1),
        raw(3, 4, 1),
    ])
    .unwrap();
    assert_eq!(graph.vertex_count(), 5);

    graph.remove_vertex(0).unwrap();
    // 1 and 2 are gone too; only 3 and 4 survive.
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_algorithms_after_add_vertex() {
    let mut graph = Graph::parse("0 A 1 B 4\n1 B 2 C 3\n0 A 2 C 10\n").unwrap();
    graph.remove_vertex(1).unwrap();
    let id = graph.add_vertex("D", 2, -1).unwrap();
    assert_eq!(id, 3);

    let result = graph.bellman_ford(id).unwrap();
    assert_eq!(result.distance(2), Some(Distance::Finite(-1)));
    assert_eq!(result.distance(0), Some(Distance::Unreachable));

    let mst = graph.kruskal_mst();
    assert_eq!(mst.len(), 2);
    assert_eq!(mst.total_weight, 9);
}
