//! Structural metrics derived from a [`Graph`].

use serde::Serialize;
use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::types::NodeId;

/// Basic characteristics of a network.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub num_nodes: usize,
    pub num_edges: usize,
    /// `2|E| / (|V| (|V| - 1))`, or 0 for graphs with fewer than two nodes.
    pub density: f64,
    /// `2|E| / |V|` (0 for the empty graph). A self-loop adds 2 here but
    /// only 1 to its node's degree.
    pub average_degree: f64,
    /// Largest number of distinct neighbors.
    pub max_degree: usize,
}

/// Compute node/edge counts, density and degree statistics.
pub fn calculate<N: NodeId>(graph: &Graph<N>) -> GraphMetrics {
    let num_nodes = graph.node_count();
    let num_edges = graph.edge_count();

    let density = if num_nodes > 1 {
        (2 * num_edges) as f64 / (num_nodes * (num_nodes - 1)) as f64
    } else {
        0.0
    };

    let average_degree = if num_nodes > 0 {
        (2 * num_edges) as f64 / num_nodes as f64
    } else {
        0.0
    };
    let max_degree = degrees(graph).into_iter().max().unwrap_or(0);

    GraphMetrics {
        num_nodes,
        num_edges,
        density,
        average_degree,
        max_degree,
    }
}

/// Number of nodes per degree value, keyed by degree.
pub fn degree_distribution<N: NodeId>(graph: &Graph<N>) -> BTreeMap<usize, usize> {
    let mut distribution = BTreeMap::new();
    for degree in degrees(graph) {
        *distribution.entry(degree).or_insert(0) += 1;
    }
    distribution
}

fn degrees<N: NodeId>(graph: &Graph<N>) -> Vec<usize> {
    graph
        .node_indices()
        .map(|idx| graph.sorted_neighbors(idx).len())
        .collect()
}
