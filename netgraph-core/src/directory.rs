//! Vertex Directory: the distinct vertices named by an edge list.
//!
//! Nothing stores vertices directly. The directory is recomputed from the
//! edges on demand, ordered by ascending id, and each vertex takes the name
//! from the first edge (in list order) that mentions it. Within one edge the
//! source is considered before the destination.
//!
//! The directory also provides the id→slot mapping used by the algorithms:
//! a vertex's slot is its position in ascending id order, so tables can be
//! dense arrays even when ids are sparse.

use crate::types::{Edge, VertexId, VertexIdentity};
use std::collections::BTreeMap;

/// Ordered, derived view of the vertices in an edge list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexDirectory {
    vertices: Vec<VertexIdentity>,
}

impl VertexDirectory {
    /// Derive the directory in a single pass over `edges`.
    pub fn derive(edges: &[Edge]) -> Self {
        let mut names: BTreeMap<VertexId, &str> = BTreeMap::new();
        for edge in edges {
            names.entry(edge.source_id).or_insert(&edge.source_name);
            names.entry(edge.dest_id).or_insert(&edge.dest_name);
        }

        let vertices = names
            .into_iter()
            .map(|(id, name)| VertexIdentity::new(id, name))
            .collect();

        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.slot(id).is_some()
    }

    /// Position of `id` in ascending id order.
    pub fn slot(&self, id: VertexId) -> Option<usize> {
        self.vertices.binary_search_by_key(&id, |v| v.id).ok()
    }

    /// Vertex id stored at `slot`.
    pub fn id_at(&self, slot: usize) -> Option<VertexId> {
        self.vertices.get(slot).map(|v| v.id)
    }

    /// Display name of `id`, if present.
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.slot(id).map(|slot| self.vertices[slot].name.as_str())
    }

    /// Largest id in the directory.
    pub fn max_id(&self) -> Option<VertexId> {
        self.vertices.last().map(|v| v.id)
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VertexIdentity> {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[VertexIdentity] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<VertexIdentity> {
        self.vertices
    }
}

impl<'a> IntoIterator for &'a VertexDirectory {
    type Item = &'a VertexIdentity;
    type IntoIter = std::slice::Iter<'a, VertexIdentity>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_edges() -> Vec<Edge> {
        vec![
            Edge::new(5, "E", 2, "B", 1),
            Edge::new(2, "Bee", 9, "I", 1),
            Edge::new(9, "Eye", 5, "Five", 1),
        ]
    }

    #[test]
    fn test_ascending_id_order() {
        let dir = VertexDirectory::derive(&sample_edges());
        let ids: Vec<_> = dir.ids().collect();
        assert_eq!(ids, vec![2, 5, 9]);
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let dir = VertexDirectory::derive(&sample_edges());
        assert_eq!(dir.name(2), Some("B"));
        assert_eq!(dir.name(5), Some("E"));
        assert_eq!(dir.name(9), Some("I"));
    }

    #[test]
    fn test_source_name_wins_on_self_loop() {
        let edges = vec![Edge::new(1, "src", 1, "dst", 0)];
        let dir = VertexDirectory::derive(&edges);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.name(1), Some("src"));
    }

    #[test]
    fn test_slots_are_dense_for_sparse_ids() {
        let dir = VertexDirectory::derive(&sample_edges());
        assert_eq!(dir.slot(2), Some(0));
        assert_eq!(dir.slot(5), Some(1));
        assert_eq!(dir.slot(9), Some(2));
        assert_eq!(dir.slot(3), None);
        assert_eq!(dir.id_at(2), Some(9));
        assert_eq!(dir.max_id(), Some(9));
    }

    #[test]
    fn test_empty() {
        let dir = VertexDirectory::derive(&[]);
        assert!(dir.is_empty());
        assert_eq!(dir.max_id(), None);
        assert!(!dir.contains(0));
    }
}
