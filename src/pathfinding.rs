//! Dijkstra's shortest paths driven by the indexed priority queue.
//!
//! Dijkstra's algorithm is the motivating workload for an indexed queue: the
//! frontier needs "hand me the closest unsettled node" and "this node just
//! got closer" in the same loop. With node ids drawn from `0..n` the queue's
//! external indices do the bookkeeping directly, so no map from node to heap
//! handle is needed: `decrease_key(node, distance)` is addressed by the node
//! id itself.
//!
//! # Example
//!
//! ```rust
//! use indexed_priority_queue::pathfinding::{shortest_paths, Graph};
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1);
//! graph.add_edge(1, 2, 1);
//! graph.add_edge(0, 2, 5);
//!
//! let distances = shortest_paths(&graph, 0)?;
//! assert_eq!(distances[2], Some(2));
//! assert_eq!(distances[3], None);
//! # Ok::<(), indexed_priority_queue::Error>(())
//! ```

use smallvec::SmallVec;

use crate::error::Error;
use crate::order::OrderMode;
use crate::queue::IndexedPriorityQueue;

/// Outgoing edges of one node, inlined while the fan-out is small.
type EdgeList = SmallVec<[(usize, u64); 4]>;

/// A directed graph over node ids `0..n` with non-negative edge weights.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<EdgeList>,
}

impl Graph {
    /// Creates a graph with `nodes` nodes and no edges.
    pub fn new(nodes: usize) -> Self {
        Self {
            edges: vec![EdgeList::new(); nodes],
        }
    }

    /// The number of nodes.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a directed edge from `from` to `to` with the given weight.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a node of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) {
        assert!(from < self.edges.len(), "edge source {} is not a node", from);
        assert!(to < self.edges.len(), "edge target {} is not a node", to);
        self.edges[from].push((to, weight));
    }
}

/// Computes the shortest distance from `source` to every node.
///
/// Runs Dijkstra's algorithm over a min-mode [`IndexedPriorityQueue`] sized
/// to the node count. A node enters the frontier the first time an edge
/// reaches it and is pulled closer with `decrease_key` whenever a shorter
/// route appears; once popped it is settled and never revisited. The result
/// holds `None` for nodes the source cannot reach. Distances accumulate in
/// `u64`, and a route whose total would overflow is treated as unreachable.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `source` is not a node of the graph.
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<Vec<Option<u64>>, Error> {
    let mut frontier = IndexedPriorityQueue::new(graph.node_count(), OrderMode::Min);
    let mut distances: Vec<Option<u64>> = vec![None; graph.node_count()];
    frontier.insert(source, 0)?;

    while let Ok((node, distance)) = frontier.pop() {
        distances[node] = Some(distance);
        for &(next, weight) in &graph.edges[node] {
            if distances[next].is_some() {
                continue;
            }
            let candidate = match distance.checked_add(weight) {
                Some(candidate) => candidate,
                None => continue,
            };
            match frontier.get(next) {
                None => frontier.insert(next, candidate)?,
                Some(&reached) if candidate < reached => frontier.decrease_key(next, candidate)?,
                Some(_) => {}
            }
        }
    }
    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_starts_with_no_edges() {
        let graph = Graph::new(3);
        assert_eq!(graph.node_count(), 3);
        assert!(graph.edges.iter().all(|edges| edges.is_empty()));
    }

    #[test]
    #[should_panic(expected = "is not a node")]
    fn test_add_edge_rejects_a_target_outside_the_graph() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 2, 1);
    }
}
