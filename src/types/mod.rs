//! All data types for the graphlet library.

pub mod descriptor;
pub mod edge;
pub mod error;
pub mod vertex;

pub use descriptor::{AdjacencyList, NeighbourSpec};
pub use edge::{Direction, Edge, EdgeId};
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};
