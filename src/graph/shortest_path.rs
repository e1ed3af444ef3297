//! Single-source shortest paths (Dijkstra).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

/// A shortest-path distance: a finite total weight or unreachable.
///
/// `Infinite` orders greater than every finite distance, so the derived
/// ordering compares distances the way the algorithm needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Distance {
    /// Total weight of the best-known path.
    Finite(i64),
    /// No path from the start vertex.
    Infinite,
}

impl Distance {
    /// True iff the vertex is reachable.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(weight) => write!(f, "{weight}"),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

/// Min-heap entry: accumulated cost first, vertex name second so that equal
/// costs settle in lexicographic name order and runs are reproducible.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry<'a> {
    cost: i64,
    name: &'a str,
    vertex: VertexId,
}

impl Graph {
    /// Minimum total edge weight from a named start vertex to every vertex
    /// in the graph.
    ///
    /// Unreachable vertices map to [`Distance::Infinite`]. Relaxation walks
    /// each settled vertex's own incident edge list, using the opposite
    /// endpoint of every edge.
    ///
    /// Fails with [`GraphError::VertexNotFound`] for an unknown start and
    /// with [`GraphError::NegativeWeight`] if any edge weight is negative —
    /// the greedy settle order is only correct for non-negative weights.
    pub fn dijkstra(&self, start: &str) -> GraphResult<HashMap<VertexId, Distance>> {
        let start = self.lookup(start)?;

        for edge in self.edges() {
            if edge.weight() < 0 {
                return Err(GraphError::NegativeWeight {
                    start: self.name(edge.start()).to_string(),
                    end: self.name(edge.end()).to_string(),
                    weight: edge.weight(),
                });
            }
        }

        let mut distances: HashMap<VertexId, Distance> = self
            .vertex_ids()
            .map(|id| (id, Distance::Infinite))
            .collect();
        distances.insert(start, Distance::Finite(0));

        let mut settled: HashSet<VertexId> = HashSet::new();
        let mut heap: BinaryHeap<Reverse<HeapEntry<'_>>> = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            cost: 0,
            name: self.name(start),
            vertex: start,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            if !settled.insert(entry.vertex) {
                continue;
            }

            for &edge_id in self.vertex(entry.vertex).edges() {
                let edge = self.edge(edge_id);
                let neighbour = edge.other(entry.vertex);
                let candidate = Distance::Finite(entry.cost + edge.weight());
                if candidate < distances[&neighbour] {
                    distances.insert(neighbour, candidate);
                    heap.push(Reverse(HeapEntry {
                        cost: entry.cost + edge.weight(),
                        name: self.name(neighbour),
                        vertex: neighbour,
                    }));
                }
            }
        }

        Ok(distances)
    }
}
