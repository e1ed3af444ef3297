//! Vertex handles and the vertex record.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::edge::EdgeId;

/// Stable handle into a graph's vertex arena.
///
/// Handles are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    /// Position of this vertex in the owning graph's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named node together with its incident edges and direct neighbours.
///
/// `edges` is deduplicated in first-occurrence order; `neighbours` keeps the
/// descriptor order of the adjacency description, duplicates included. Both
/// are populated once at build time and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    pub(crate) name: String,
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) neighbours: Vec<VertexId>,
}

impl Vertex {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            edges: Vec::new(),
            neighbours: Vec::new(),
        }
    }

    /// The vertex's identity key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct incident edges, in first-occurrence order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Adjacent vertices in descriptor order (duplicates preserved).
    pub fn neighbours(&self) -> &[VertexId] {
        &self.neighbours
    }

    /// Number of distinct incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

// Identity, ordering and hashing all derive from the name alone. Two vertices
// with the same name are the same vertex wherever they appear.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
