//! Depth-first path search.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{NodeId, Path};

/// Find a path from `start` to `goal` with an explicit-stack DFS.
///
/// Neighbors are pushed in descending label order, so the stack pops them in
/// ascending order: the lexicographically first unvisited neighbor is always
/// explored first. The goal is checked when a node is popped, before the
/// visited check, so the first stack entry for the goal to surface wins even
/// if the goal was pushed earlier along a shorter route.
///
/// Returns `Ok(None)` when `goal` is unreachable and
/// [`GraphError::NodeNotFound`](crate::error::GraphError::NodeNotFound) when
/// either endpoint is missing.
pub fn dfs_path<N: NodeId>(graph: &Graph<N>, start: &N, goal: &N) -> Result<Option<Path<N>>> {
    let start = graph.index_of(start)?;
    let goal = graph.index_of(goal)?;

    let mut stack = vec![(start, vec![start])];
    let mut visited = HashSet::new();

    while let Some((node, path)) = stack.pop() {
        if node == goal {
            tracing::debug!(hops = path.len() - 1, "dfs reached goal");
            return Ok(Some(graph.to_path(&path)));
        }

        if !visited.insert(node) {
            continue;
        }

        for neighbor in graph.sorted_neighbors(node).into_iter().rev() {
            if !visited.contains(&neighbor) {
                let mut next = path.clone();
                next.push(neighbor);
                stack.push((neighbor, next));
            }
        }
    }

    tracing::debug!(visited = visited.len(), "dfs exhausted without reaching goal");
    Ok(None)
}
