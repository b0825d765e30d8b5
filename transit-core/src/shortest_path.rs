//! Shortest weighted paths (Dijkstra).
//!
//! Classic binary-heap relaxation over positive edge costs. Results only
//! contain reachable targets: a missing key means "no path", there is no
//! infinite-distance sentinel.
//!
//! # Costs
//!
//! The `*_by` variants take a cost function over [`EdgeAttrs`] instead of
//! using the stored weight, e.g. `|_| 1.0` to count hops. Every cost the
//! search touches must be positive and finite, otherwise the call fails with
//! [`GraphError::InvalidWeight`](crate::error::GraphError::InvalidWeight).
//!
//! # Complexity
//!
//! Single source: `O(E log V)`. All pairs repeats it from every node,
//! `O(V E log V)`; callers interested in one source should use
//! [`single_source`] directly.

use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

use crate::error::{check_weight, Result};
use crate::graph::Graph;
use crate::types::{EdgeAttrs, NodeId, Route};

/// Routes from one source, keyed by target. The source maps to itself at 0.
pub type ShortestPaths<N> = BTreeMap<N, Route<N>>;

/// Routes between every ordered pair of connected nodes, keyed by source.
pub type AllPairs<N> = BTreeMap<N, ShortestPaths<N>>;

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first.
#[derive(Clone, Copy, Debug, PartialEq)]
struct QueueEntry {
    cost: f64,
    node: NodeIndex,
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Distances and predecessor links from a single run.
struct Search {
    source: NodeIndex,
    dist: HashMap<NodeIndex, f64>,
    prev: HashMap<NodeIndex, NodeIndex>,
    finalized: Vec<NodeIndex>,
}

impl Search {
    /// Walk predecessor links back from `target`, then reverse.
    fn path_to(&self, target: NodeIndex) -> Vec<NodeIndex> {
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.prev.get(&current) {
                Some(&p) => {
                    path.push(p);
                    current = p;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }

    fn route<N: NodeId>(&self, graph: &Graph<N>, target: NodeIndex) -> Route<N> {
        Route {
            distance: self.dist[&target],
            path: graph.to_path(&self.path_to(target)),
        }
    }

    fn into_paths<N: NodeId>(self, graph: &Graph<N>) -> ShortestPaths<N> {
        self.finalized
            .iter()
            .map(|&target| (graph.label(target).clone(), self.route(graph, target)))
            .collect()
    }
}

fn run<N, F>(graph: &Graph<N>, source: NodeIndex, stop_at: Option<NodeIndex>, cost: &F) -> Result<Search>
where
    N: NodeId,
    F: Fn(&EdgeAttrs) -> f64,
{
    let mut dist: HashMap<NodeIndex, f64> = HashMap::new();
    let mut prev: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut done: HashSet<NodeIndex> = HashSet::new();
    let mut finalized = Vec::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(QueueEntry {
        cost: 0.0,
        node: source,
    });

    while let Some(QueueEntry { cost: d, node }) = heap.pop() {
        // Stale entry left behind by a later relaxation
        if !done.insert(node) {
            continue;
        }
        finalized.push(node);

        if stop_at == Some(node) {
            break;
        }

        for (neighbor, attrs) in graph.incident(node) {
            let weight = cost(attrs);
            check_weight(graph.label(node), graph.label(neighbor), weight)?;

            if done.contains(&neighbor) {
                continue;
            }

            let candidate = d + weight;
            let improves = dist.get(&neighbor).map_or(true, |&current| candidate < current);
            if improves {
                dist.insert(neighbor, candidate);
                prev.insert(neighbor, node);
                heap.push(QueueEntry {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    tracing::debug!(
        source = ?graph.label(source),
        reached = finalized.len(),
        "dijkstra finished"
    );

    Ok(Search {
        source,
        dist,
        prev,
        finalized,
    })
}

/// Shortest routes from `source` to every reachable node, by stored weight.
pub fn single_source<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    single_source_by(graph, source, |e| e.weight)
}

/// Shortest routes from `source` using a caller-supplied edge cost.
pub fn single_source_by<N, F>(graph: &Graph<N>, source: &N, cost: F) -> Result<ShortestPaths<N>>
where
    N: NodeId,
    F: Fn(&EdgeAttrs) -> f64,
{
    let source = graph.index_of(source)?;
    Ok(run(graph, source, None, &cost)?.into_paths(graph))
}

/// Shortest route between two nodes, stopping once `target` is finalized.
///
/// Returns `Ok(None)` when the nodes are disconnected.
pub fn shortest_path<N: NodeId>(graph: &Graph<N>, source: &N, target: &N) -> Result<Option<Route<N>>> {
    let source = graph.index_of(source)?;
    let target = graph.index_of(target)?;
    let search = run(graph, source, Some(target), &|e: &EdgeAttrs| e.weight)?;

    if search.finalized.contains(&target) {
        Ok(Some(search.route(graph, target)))
    } else {
        Ok(None)
    }
}

/// Shortest routes between all pairs, by stored weight.
pub fn all_pairs<N: NodeId>(graph: &Graph<N>) -> Result<AllPairs<N>> {
    all_pairs_by(graph, |e| e.weight)
}

/// Shortest routes between all pairs using a caller-supplied edge cost.
pub fn all_pairs_by<N, F>(graph: &Graph<N>, cost: F) -> Result<AllPairs<N>>
where
    N: NodeId,
    F: Fn(&EdgeAttrs) -> f64,
{
    graph
        .node_indices()
        .map(|source| -> Result<(N, ShortestPaths<N>)> {
            let paths = run(graph, source, None, &cost)?.into_paths(graph);
            Ok((graph.label(source).clone(), paths))
        })
        .collect()
}

/// Same result as [`all_pairs`], with one single-source run per rayon task.
///
/// The graph is shared read-only between workers.
pub fn all_pairs_parallel<N>(graph: &Graph<N>) -> Result<AllPairs<N>>
where
    N: NodeId + Send + Sync,
{
    let sources: Vec<NodeIndex> = graph.node_indices().collect();
    let per_source: Vec<(N, ShortestPaths<N>)> = sources
        .par_iter()
        .map(|&source| -> Result<(N, ShortestPaths<N>)> {
            let paths = run(graph, source, None, &|e: &EdgeAttrs| e.weight)?.into_paths(graph);
            Ok((graph.label(source).clone(), paths))
        })
        .collect::<Result<_>>()?;

    Ok(per_source.into_iter().collect())
}
