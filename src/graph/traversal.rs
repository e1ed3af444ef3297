//! Graph traversal — depth-first (recursive and iterative) and
//! breadth-first.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphResult, VertexId};

use super::Graph;

impl Graph {
    /// Recursive depth-first traversal from a named start vertex.
    ///
    /// Visits the start, then each unvisited neighbour in descriptor order,
    /// depth first. Returns the discovery order: every reachable vertex
    /// exactly once, a valid DFS preorder.
    ///
    /// Recursion depth is bounded by the longest simple path from the start;
    /// for very deep graphs prefer [`Graph::depth_first_iterative`].
    pub fn depth_first(&self, start: &str) -> GraphResult<Vec<VertexId>> {
        let mut visited = Vec::new();
        self.depth_first_into(start, &mut visited)?;
        Ok(visited)
    }

    /// Recursive depth-first traversal into an externally supplied
    /// accumulator.
    ///
    /// Vertices already present in `visited` are skipped, so successive calls
    /// with different starts accumulate one combined discovery order.
    pub fn depth_first_into(&self, start: &str, visited: &mut Vec<VertexId>) -> GraphResult<()> {
        let start = self.lookup(start)?;
        let mut seen: HashSet<VertexId> = visited.iter().copied().collect();
        self.visit_depth_first(start, visited, &mut seen);
        Ok(())
    }

    fn visit_depth_first(
        &self,
        vertex: VertexId,
        visited: &mut Vec<VertexId>,
        seen: &mut HashSet<VertexId>,
    ) {
        if !seen.insert(vertex) {
            return;
        }
        visited.push(vertex);
        for &neighbour in self.vertex(vertex).neighbours() {
            self.visit_depth_first(neighbour, visited, seen);
        }
    }

    /// Iterative depth-first traversal from a named start vertex.
    ///
    /// Pops a LIFO work-list seeded with the start's neighbours, so the
    /// last-listed neighbour of any vertex is explored before earlier ones.
    /// The visited set matches [`Graph::depth_first`]; the order does not,
    /// and callers must not assume it does.
    pub fn depth_first_iterative(&self, start: &str) -> GraphResult<Vec<VertexId>> {
        let start = self.lookup(start)?;
        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut visited: Vec<VertexId> = Vec::new();
        let mut stack: Vec<VertexId> = Vec::new();

        seen.insert(start);
        visited.push(start);
        stack.extend_from_slice(self.vertex(start).neighbours());

        while let Some(vertex) = stack.pop() {
            if !seen.insert(vertex) {
                continue;
            }
            visited.push(vertex);
            stack.extend_from_slice(self.vertex(vertex).neighbours());
        }

        Ok(visited)
    }

    /// Breadth-first traversal from a named start vertex.
    ///
    /// Classic FIFO layering: every vertex at hop-distance d is discovered
    /// before any vertex at hop-distance d + 1, edge weights ignored.
    pub fn breadth_first(&self, start: &str) -> GraphResult<Vec<VertexId>> {
        let start = self.lookup(start)?;
        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut visited: Vec<VertexId> = Vec::new();
        let mut queue: VecDeque<VertexId> = VecDeque::new();

        seen.insert(start);
        visited.push(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            for &neighbour in self.vertex(vertex).neighbours() {
                if seen.insert(neighbour) {
                    visited.push(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }

        Ok(visited)
    }
}
