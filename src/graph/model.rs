//! Core graph structure — vertex and edge arenas plus structural queries.

use std::collections::HashMap;

use crate::types::{AdjacencyList, Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId};

/// An immutable graph built once from an adjacency description.
///
/// The graph owns two arenas: vertices in key insertion order and distinct
/// canonical edges in first-construction order. All cross-references between
/// them are [`VertexId`]/[`EdgeId`] handles, so an undirected edge shared by
/// two vertices' edge lists is one arena entry referenced twice.
pub struct Graph {
    /// The raw adjacency description the graph was built from.
    pub(crate) description: AdjacencyList,
    /// Vertex arena, key insertion order.
    pub(crate) vertices: Vec<Vertex>,
    /// Edge arena; each distinct (start, end, weight, direction) once.
    pub(crate) edges: Vec<Edge>,
    /// Name -> handle index.
    pub(crate) index: HashMap<String, VertexId>,
}

impl Graph {
    /// Number of vertices (the graph's order).
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges (the graph's size).
    ///
    /// Each undirected edge counts once even though both endpoints may list
    /// it.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All distinct edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Handles for every vertex, in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(|i| VertexId(i as u32))
    }

    /// Resolve a handle to its vertex record.
    ///
    /// Panics if the handle was issued by a different graph with a larger
    /// arena.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Resolve a handle to its edge record.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// True iff a vertex with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a vertex handle by name.
    ///
    /// Every traversal and shortest-path entry point validates its start
    /// vertex through here before doing any work.
    pub fn lookup(&self, name: &str) -> GraphResult<VertexId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(name.to_string()))
    }

    /// Name of the vertex behind a handle.
    pub fn name(&self, id: VertexId) -> &str {
        self.vertex(id).name()
    }

    /// The raw adjacency description the graph was built from.
    pub fn description(&self) -> &AdjacencyList {
        &self.description
    }

    /// Distinct-edge counts per vertex, in insertion order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.vertices.iter().map(Vertex::degree).collect()
    }

    /// The minimum-weight edge incident to a vertex; among equal weights the
    /// earliest-constructed edge wins. This is a weight-only comparison, not
    /// edge identity.
    pub fn min_weight_edge(&self, id: VertexId) -> Option<EdgeId> {
        self.vertex(id)
            .edges()
            .iter()
            .copied()
            .min_by_key(|&e| self.edge(e).weight())
    }

    /// The maximum-weight edge incident to a vertex; among equal weights the
    /// latest-constructed edge wins.
    pub fn max_weight_edge(&self, id: VertexId) -> Option<EdgeId> {
        self.vertex(id)
            .edges()
            .iter()
            .copied()
            .max_by_key(|&e| self.edge(e).weight())
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("order", &self.order())
            .field("size", &self.size())
            .finish()
    }
}
