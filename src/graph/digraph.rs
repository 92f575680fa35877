//! Immutable adjacency-list representation of a directed graph.

use crate::error::{HypernymError, Result};

/// A directed graph over the contiguous vertex range `[0, V)`.
///
/// The graph is built once from an edge list and is immutable afterwards.
/// Successors are kept in insertion order, so traversals that depend on
/// adjacency order are deterministic for a given edge list.
///
/// Acyclicity is deliberately not enforced here; callers that require a DAG
/// run the checks in [`crate::graph::validate`] after construction.
#[derive(Debug, Clone)]
pub struct Digraph {
    /// Successor lists, indexed by vertex id
    adjacency: Vec<Vec<usize>>,
    /// Total number of edges
    edge_count: usize,
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Digraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list.
    ///
    /// Fails with `OutOfRange` if any endpoint lies outside `[0, vertex_count)`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Digraph::new(vertex_count);

        for &(from, to) in edges {
            graph.check_vertex(from)?;
            graph.check_vertex(to)?;
            graph.adjacency[from].push(to);
            graph.edge_count += 1;
        }

        Ok(graph)
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The successors of `v`, in insertion order.
    pub fn successors(&self, v: usize) -> Result<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// The out-degree of `v`.
    pub fn out_degree(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Successor access for crate-internal algorithms whose vertex ids were
    /// already validated (edges at construction, sources at query entry).
    pub(crate) fn adj(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.adjacency.len() {
            return Err(HypernymError::out_of_range(format!(
                "vertex {} is not in [0, {})",
                v,
                self.adjacency.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = Digraph::new(3);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.successors(0).unwrap(), &[] as &[usize]);
    }

    #[test]
    fn test_from_edges() {
        let graph = Digraph::from_edges(4, &[(0, 1), (1, 2), (3, 1)]).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.successors(0).unwrap(), &[1]);
        assert_eq!(graph.successors(1).unwrap(), &[2]);
        assert_eq!(graph.successors(2).unwrap(), &[] as &[usize]);
        assert_eq!(graph.successors(3).unwrap(), &[1]);
    }

    #[test]
    fn test_successor_order_is_insertion_order() {
        let graph = Digraph::from_edges(4, &[(0, 3), (0, 1), (0, 2)]).unwrap();
        assert_eq!(graph.successors(0).unwrap(), &[3, 1, 2]);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let graph = Digraph::from_edges(2, &[(0, 1), (0, 1)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors(0).unwrap(), &[1, 1]);
    }

    #[test]
    fn test_out_degree() {
        let graph = Digraph::from_edges(3, &[(0, 1), (0, 2)]).unwrap();
        assert_eq!(graph.out_degree(0).unwrap(), 2);
        assert_eq!(graph.out_degree(2).unwrap(), 0);
    }

    #[test]
    fn test_invalid_edge_endpoint() {
        let result = Digraph::from_edges(3, &[(0, 3)]);
        assert!(matches!(result, Err(HypernymError::OutOfRange(_))));

        let result = Digraph::from_edges(3, &[(7, 0)]);
        assert!(matches!(result, Err(HypernymError::OutOfRange(_))));
    }

    #[test]
    fn test_successors_out_of_range() {
        let graph = Digraph::new(2);
        assert!(matches!(
            graph.successors(2),
            Err(HypernymError::OutOfRange(_))
        ));
    }
}
