//! graphlet — a small in-memory graph library.
//!
//! Builds an immutable graph from an adjacency description (vertex name ->
//! neighbour descriptors, or a 2-D boolean grid), exposes structural queries
//! (order, size, membership, lookup) and implements depth-first traversal
//! (recursive and iterative), breadth-first traversal and single-source
//! Dijkstra shortest paths.
//!
//! Vertices and edges live in arenas owned by the graph; all cross-references
//! are [`VertexId`]/[`EdgeId`] handles, which keeps O(1) navigation without
//! reference cycles. Undirected edges canonicalize their endpoint order at
//! construction time so the same edge described from either side
//! deduplicates to one record.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{cell_name, Distance, Graph, GraphBuilder};
pub use types::{
    AdjacencyList, Direction, Edge, EdgeId, GraphError, GraphResult, NeighbourSpec, Vertex,
    VertexId,
};
