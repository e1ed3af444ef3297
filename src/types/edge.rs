//! Edge handles, the direction flag and the edge record.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::vertex::VertexId;

/// Stable handle into a graph's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub(crate) u32);

impl EdgeId {
    /// Position of this edge in the owning graph's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How an edge relates its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// No orientation; endpoints are stored in ascending name order.
    Undirected,
    /// Oriented start -> end as given.
    Forward,
    /// Oriented against the given order; endpoints are stored swapped.
    Reversed,
}

impl Direction {
    /// Convert a raw descriptor value to a Direction, returning None for
    /// values outside {-1, 0, 1}.
    pub fn from_i8(value: i8) -> Option<Self> {
        match value {
            0 => Some(Self::Undirected),
            1 => Some(Self::Forward),
            -1 => Some(Self::Reversed),
            _ => None,
        }
    }

    /// The raw descriptor value for this direction.
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Undirected => 0,
            Self::Forward => 1,
            Self::Reversed => -1,
        }
    }

    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Forward => "forward",
            Self::Reversed => "reversed",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A weighted, optionally directed relation between two vertices.
///
/// Endpoint order is canonical by construction: undirected edges hold their
/// endpoints in ascending name order, directed edges hold them so that the
/// stored `start -> end` is the direction of travel.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub(crate) start: VertexId,
    pub(crate) end: VertexId,
    pub(crate) weight: i64,
    pub(crate) direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
}

impl Edge {
    pub(crate) fn new(
        start: VertexId,
        end: VertexId,
        weight: i64,
        direction: Direction,
        name: Option<String>,
    ) -> Self {
        Self {
            start,
            end,
            weight,
            direction,
            name,
        }
    }

    /// Canonical first endpoint.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Canonical second endpoint.
    pub fn end(&self) -> VertexId {
        self.end
    }

    /// Edge weight (0 when the descriptor omitted it).
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Direction flag.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Optional edge label.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Given one endpoint, return the opposite one.
    pub fn other(&self, vertex: VertexId) -> VertexId {
        if vertex == self.end {
            self.start
        } else {
            self.end
        }
    }
}

// Edge identity is geometry + weight + direction. The optional label is
// excluded: two edges that differ only in `name` are the same edge.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.start, self.end, self.weight, self.direction)
            == (other.start, other.end, other.weight, other.direction)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.start, self.end, self.weight, self.direction).hash(state);
    }
}
