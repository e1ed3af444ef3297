//! The graph itself — construction, structural queries, traversals and
//! shortest paths.

pub mod builder;
pub mod grid;
pub mod model;
pub mod shortest_path;
pub mod traversal;

pub use builder::GraphBuilder;
pub use grid::cell_name;
pub use model::Graph;
pub use shortest_path::Distance;
