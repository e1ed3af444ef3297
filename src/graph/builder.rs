//! Graph construction — from adjacency descriptions, JSON, or the fluent
//! builder.

use std::collections::HashMap;

use serde_json::Value;

use crate::types::{
    AdjacencyList, Direction, Edge, EdgeId, GraphError, GraphResult, NeighbourSpec, Vertex,
    VertexId,
};

use super::Graph;

impl Graph {
    /// Build a graph from an adjacency description.
    ///
    /// One vertex is created per top-level key, in order. Each descriptor
    /// becomes an edge with canonical endpoint order; descriptors that
    /// collapse to the same `(start, end, weight, direction)` share one edge.
    /// Neighbour names that never appear as keys are materialized as vertices
    /// with empty adjacency, so handles cannot dangle.
    pub fn from_adjacency<I, S>(entries: I) -> GraphResult<Graph>
    where
        I: IntoIterator<Item = (S, Vec<NeighbourSpec>)>,
        S: Into<String>,
    {
        let description: AdjacencyList = entries
            .into_iter()
            .map(|(name, specs)| (name.into(), specs))
            .collect();
        build(description)
    }

    /// Build a graph from a JSON object mapping vertex names to neighbour
    /// descriptor arrays.
    ///
    /// Key order becomes vertex insertion order. A descriptor missing the
    /// required `vertex` field fails with [`GraphError::Malformed`].
    pub fn from_json(input: &str) -> GraphResult<Graph> {
        let map: serde_json::Map<String, Value> = serde_json::from_str(input)?;
        let mut description: AdjacencyList = Vec::with_capacity(map.len());
        for (key, value) in map {
            let specs: Vec<NeighbourSpec> = serde_json::from_value(value)?;
            description.push((key, specs));
        }
        build(description)
    }

    /// Start a fluent builder.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }
}

/// Fluent API for assembling an adjacency description and building the graph
/// from it.
pub struct GraphBuilder {
    entries: AdjacencyList,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Ensure a vertex exists as a top-level key, keeping its position if it
    /// is already present.
    pub fn vertex(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.entries.iter().any(|(key, _)| *key == name) {
            self.entries.push((name, Vec::new()));
        }
        self
    }

    /// Append a neighbour descriptor under `from`.
    pub fn edge(mut self, from: impl Into<String>, spec: NeighbourSpec) -> Self {
        let from = from.into();
        match self.entries.iter_mut().find(|(key, _)| *key == from) {
            Some((_, specs)) => specs.push(spec),
            None => self.entries.push((from, vec![spec])),
        }
        self
    }

    /// Append a weighted undirected edge, listed under both endpoints the way
    /// hand-written adjacency descriptions do it.
    pub fn undirected(self, a: impl Into<String>, b: impl Into<String>, weight: i64) -> Self {
        let (a, b) = (a.into(), b.into());
        let spec_ab = NeighbourSpec::to(b.clone()).weight(weight);
        let spec_ba = NeighbourSpec::to(a.clone()).weight(weight);
        self.edge(a, spec_ab).edge(b, spec_ba)
    }

    /// Build the final graph.
    pub fn build(self) -> GraphResult<Graph> {
        build(self.entries)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Key for interning edges: canonical endpoints + weight + direction. The
/// optional label deliberately takes no part, mirroring edge identity.
type EdgeKey = (VertexId, VertexId, i64, Direction);

/// The single construction path behind every `Graph::from_*` constructor.
fn build(description: AdjacencyList) -> GraphResult<Graph> {
    let mut vertices: Vec<Vertex> = Vec::with_capacity(description.len());
    let mut index: HashMap<String, VertexId> = HashMap::with_capacity(description.len());
    let mut edges: Vec<Edge> = Vec::new();
    let mut interned: HashMap<EdgeKey, EdgeId> = HashMap::new();

    // First pass: intern every top-level key so handles follow key order.
    for (key, _) in &description {
        intern(&mut vertices, &mut index, key);
    }

    // Second pass: resolve descriptors into edges and neighbour links.
    for (key, specs) in &description {
        let vertex_id = index[key.as_str()];
        let mut edge_ids: Vec<EdgeId> = Vec::with_capacity(specs.len());
        let mut neighbours: Vec<VertexId> = Vec::with_capacity(specs.len());

        for spec in specs {
            if spec.vertex.is_empty() {
                return Err(GraphError::MissingTarget(key.clone()));
            }
            let direction =
                Direction::from_i8(spec.direction).ok_or_else(|| GraphError::InvalidDirection {
                    from: key.clone(),
                    to: spec.vertex.clone(),
                    direction: spec.direction,
                })?;
            let neighbour_id = intern(&mut vertices, &mut index, &spec.vertex);
            let (start, end) = canonical_endpoints(&vertices, vertex_id, neighbour_id, direction);

            let edge_id = *interned
                .entry((start, end, spec.weight, direction))
                .or_insert_with(|| {
                    edges.push(Edge::new(start, end, spec.weight, direction, spec.name.clone()));
                    EdgeId((edges.len() - 1) as u32)
                });

            if !edge_ids.contains(&edge_id) {
                edge_ids.push(edge_id);
            }
            neighbours.push(neighbour_id);
        }

        vertices[vertex_id.index()].edges = edge_ids;
        vertices[vertex_id.index()].neighbours = neighbours;
    }

    log::debug!(
        "built graph: order={}, size={}",
        vertices.len(),
        edges.len()
    );

    Ok(Graph {
        description,
        vertices,
        edges,
        index,
    })
}

/// Return the handle for a name, creating the vertex on first sight.
fn intern(
    vertices: &mut Vec<Vertex>,
    index: &mut HashMap<String, VertexId>,
    name: &str,
) -> VertexId {
    if let Some(&id) = index.get(name) {
        return id;
    }
    let id = VertexId(vertices.len() as u32);
    vertices.push(Vertex::new(name.to_string()));
    index.insert(name.to_string(), id);
    id
}

/// Canonical endpoint order: undirected edges settle into ascending name
/// order so that A-B and B-A intern to the same edge; directed edges store
/// the direction of travel.
fn canonical_endpoints(
    vertices: &[Vertex],
    start: VertexId,
    end: VertexId,
    direction: Direction,
) -> (VertexId, VertexId) {
    match direction {
        Direction::Forward => (start, end),
        Direction::Reversed => (end, start),
        Direction::Undirected => {
            if vertices[start.index()].name() <= vertices[end.index()].name() {
                (start, end)
            } else {
                (end, start)
            }
        }
    }
}
