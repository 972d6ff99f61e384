//! Graph orientation — directed or undirected, fixed at construction.

use serde::Serialize;

/// Whether edge operations apply to one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// An edge `u -> v` is stored only on `u`.
    Directed,
    /// An edge between `u` and `v` is stored on both endpoints.
    Undirected,
}

impl GraphKind {
    /// True for the directed variant.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a graph kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
