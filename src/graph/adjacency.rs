//! Core graph structure — adjacency lists keyed by vertex identifier.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::types::GraphKind;

/// An adjacency-list graph over vertices of type `V`.
///
/// Vertex identity is equality of the identifier value. Neighbor lists keep
/// insertion order, parallel edges (the same edge added twice produces two
/// entries), and self-loops. Every operation is total: acting on an unknown
/// vertex is a no-op or an empty/false result, never an error.
///
/// For an undirected graph, each edge is stored on both endpoints; the
/// public operations keep the two sides at equal multiplicity.
pub struct Graph<V> {
    /// Directed or undirected, fixed at construction.
    kind: GraphKind,
    /// All vertex identifiers, in first-add order.
    vertices: Vec<V>,
    /// Adjacency index: vertex -> ordered neighbor list.
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Create a new empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// The kind this graph was constructed with.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Whether edges are stored in one direction only.
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Insert a vertex with an empty neighbor list.
    ///
    /// Idempotent: an existing vertex keeps its neighbor list.
    pub fn add_vertex(&mut self, id: V) {
        if !self.adjacency.contains_key(&id) {
            self.vertices.push(id.clone());
            self.adjacency.insert(id, Vec::new());
        }
    }

    /// Append an edge from `u` to `v`, inserting missing endpoints.
    ///
    /// Undirected graphs also append the reverse entry; a self-loop pushes
    /// into the same list twice. Duplicate edges are kept, not merged.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        self.adjacency.entry(u.clone()).or_default().push(v.clone());
        if !self.kind.is_directed() {
            self.adjacency.entry(v).or_default().push(u);
        }
    }

    /// Remove every copy of the edge from `u` to `v` (and the reverse
    /// entries when undirected). No-op for unknown vertices.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        if let Some(list) = self.adjacency.get_mut(u) {
            list.retain(|n| n != v);
        }
        if !self.kind.is_directed() {
            if let Some(list) = self.adjacency.get_mut(v) {
                list.retain(|n| n != u);
            }
        }
    }

    /// Remove a vertex along with every edge touching it.
    ///
    /// No-op if `id` is unknown.
    pub fn remove_vertex(&mut self, id: &V) {
        if !self.adjacency.contains_key(id) {
            return;
        }

        // Strip every edge pointing at `id`, then drop its own entry.
        for list in self.adjacency.values_mut() {
            list.retain(|n| n != id);
        }
        self.adjacency.remove(id);
        self.vertices.retain(|v| v != id);
    }

    /// Whether `v` appears in `u`'s neighbor list.
    ///
    /// Checks the stored direction only; undirected symmetry makes
    /// `has_edge(u, v)` and `has_edge(v, u)` agree without a special case.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency.get(u).map(|list| list.contains(v)).unwrap_or(false)
    }

    /// Whether `id` is a known vertex.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    /// The neighbor list of `id`, empty for an unknown vertex.
    pub fn neighbors(&self, id: &V) -> &[V] {
        self.adjacency
            .get(id)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// All vertex identifiers in first-add order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    ///
    /// Each undirected edge contributes one entry to both endpoints, so the
    /// summed list lengths are halved for undirected graphs.
    pub fn edge_count(&self) -> usize {
        let total: usize = self.adjacency.values().map(|list| list.len()).sum();
        if self.kind.is_directed() {
            total
        } else {
            total / 2
        }
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Human-readable dump: kind and counts, then one `v -> [..]` line per
/// vertex in first-add order.
impl<V: Eq + Hash + Clone + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} graph ({} vertices, {} edges)",
            self.kind,
            self.vertex_count(),
            self.edge_count()
        )?;
        for vertex in &self.vertices {
            let entries: Vec<String> = self
                .neighbors(vertex)
                .iter()
                .map(|n| n.to_string())
                .collect();
            writeln!(f, "{} -> [{}]", vertex, entries.join(", "))?;
        }
        Ok(())
    }
}
