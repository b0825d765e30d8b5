//! Breadth-first path search.

use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{NodeId, Path};

/// Find a path from `start` to `goal` with the fewest edges.
///
/// Nodes are marked visited when enqueued, never twice. Neighbors are
/// enqueued in ascending label order, so among several minimum-hop paths the
/// first one discovered in that order is returned.
pub fn bfs_path<N: NodeId>(graph: &Graph<N>, start: &N, goal: &N) -> Result<Option<Path<N>>> {
    let start = graph.index_of(start)?;
    let goal = graph.index_of(goal)?;

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, vec![start]));

    while let Some((node, path)) = queue.pop_front() {
        if node == goal {
            tracing::debug!(hops = path.len() - 1, "bfs reached goal");
            return Ok(Some(graph.to_path(&path)));
        }

        for neighbor in graph.sorted_neighbors(node) {
            if visited.insert(neighbor) {
                let mut next = path.clone();
                next.push(neighbor);
                queue.push_back((neighbor, next));
            }
        }
    }

    tracing::debug!(visited = visited.len(), "bfs exhausted without reaching goal");
    Ok(None)
}
