//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::types::GraphKind;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Records vertices and edges, then replays them through the public
/// mutation operations so the built graph carries the same invariants as
/// one assembled by hand.
pub struct GraphBuilder<V> {
    kind: GraphKind,
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Eq + Hash + Clone> GraphBuilder<V> {
    /// Create a new builder for the given graph kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create a new builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Record a vertex.
    pub fn vertex(mut self, id: V) -> Self {
        self.vertices.push(id);
        self
    }

    /// Record an edge; endpoints need not be recorded separately.
    pub fn edge(mut self, u: V, v: V) -> Self {
        self.edges.push((u, v));
        self
    }

    /// Build the final graph.
    pub fn build(self) -> Graph<V> {
        let mut graph = Graph::new(self.kind);
        for id in self.vertices {
            graph.add_vertex(id);
        }
        for (u, v) in self.edges {
            graph.add_edge(u, v);
        }
        graph
    }
}
