//! Grid graphs — adjacency derived from a 2-D boolean matrix.

use crate::types::{GraphError, GraphResult, NeighbourSpec};

use super::Graph;

/// Canonical vertex name for a grid cell.
pub fn cell_name(row: usize, col: usize) -> String {
    format!("({row}, {col})")
}

impl Graph {
    /// Build a graph from a rectangular matrix of passable cells.
    ///
    /// Every `true` cell becomes a vertex named by [`cell_name`], connected
    /// by an undirected zero-weight edge to each passable orthogonal
    /// neighbour within bounds (left, up, right, down). `false` cells produce
    /// neither vertices nor edges.
    ///
    /// Fails with [`GraphError::EmptyGrid`] for zero rows or zero columns and
    /// [`GraphError::RaggedGrid`] when rows differ in length.
    pub fn from_grid(cells: &[Vec<bool>]) -> GraphResult<Graph> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(GraphError::EmptyGrid);
        }
        let rows = cells.len();
        let cols = cells[0].len();
        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != cols {
                return Err(GraphError::RaggedGrid {
                    row,
                    len: cells_in_row.len(),
                    expected: cols,
                });
            }
        }

        let mut description = Vec::new();
        for i in 0..rows {
            for j in 0..cols {
                if !cells[i][j] {
                    continue;
                }
                let mut specs = Vec::new();
                if j > 0 && cells[i][j - 1] {
                    specs.push(NeighbourSpec::to(cell_name(i, j - 1)));
                }
                if i > 0 && cells[i - 1][j] {
                    specs.push(NeighbourSpec::to(cell_name(i - 1, j)));
                }
                if j + 1 < cols && cells[i][j + 1] {
                    specs.push(NeighbourSpec::to(cell_name(i, j + 1)));
                }
                if i + 1 < rows && cells[i + 1][j] {
                    specs.push(NeighbourSpec::to(cell_name(i + 1, j)));
                }
                description.push((cell_name(i, j), specs));
            }
        }

        Graph::from_adjacency(description)
    }
}
