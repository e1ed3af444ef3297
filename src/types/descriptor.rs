//! Neighbour descriptors — the raw adjacency description records.

use serde::{Deserialize, Serialize};

/// One entry in a vertex's neighbour list.
///
/// Only `vertex` is required; `weight` defaults to 0, `direction` to 0
/// (undirected) and the label to none. The raw `direction` value is
/// validated against {-1, 0, 1} when the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighbourSpec {
    /// Name of the neighbouring vertex.
    pub vertex: String,
    /// Edge weight.
    #[serde(default)]
    pub weight: i64,
    /// Raw direction flag: 0 undirected, 1 forward, -1 reversed.
    #[serde(default)]
    pub direction: i8,
    /// Optional edge label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NeighbourSpec {
    /// An undirected, zero-weight descriptor pointing at `vertex`.
    pub fn to(vertex: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            weight: 0,
            direction: 0,
            name: None,
        }
    }

    /// Set the edge weight.
    pub fn weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    /// Set the raw direction flag.
    pub fn direction(mut self, direction: i8) -> Self {
        self.direction = direction;
        self
    }

    /// Set the edge label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A full adjacency description: vertex name -> neighbour descriptors,
/// in insertion order.
pub type AdjacencyList = Vec<(String, Vec<NeighbourSpec>)>;
