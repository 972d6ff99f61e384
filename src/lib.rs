//! Graphlet — in-memory adjacency-list graph with traversals.
//!
//! Stores vertices identified by any hashable value, each with an ordered
//! neighbor list. Supports directed and undirected graphs, parallel edges,
//! self-loops, and depth-first (recursive and iterative) and breadth-first
//! traversal.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, Traversal};
pub use types::{GraphError, GraphKind, GraphResult};
