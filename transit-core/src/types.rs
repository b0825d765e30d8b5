//! Data models shared by the graph store and the search engines.
//!
//! Node labels are opaque: the engines only compare, order and hash them.
//! Everything here is serializable so the CLI can emit results as JSON
//! without intermediate DTOs.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by every type usable as a node label.
///
/// `Debug` is only used to name the offending node in error messages.
pub trait NodeId: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> NodeId for T {}

/// Attributes stored on an undirected edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    /// Category tag, e.g. the metro line the connection belongs to.
    pub label: String,
    /// Traversal cost, e.g. travel time in minutes. Always positive.
    pub weight: f64,
}

/// One edge of the input edge list: `(source, target, label, weight)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<N> {
    pub source: N,
    pub target: N,
    pub label: String,
    pub weight: f64,
}

impl<N> EdgeRecord<N> {
    pub fn new(source: N, target: N, label: impl Into<String>, weight: f64) -> Self {
        Self {
            source,
            target,
            label: label.into(),
            weight,
        }
    }
}

impl<N> From<(N, N, &str, f64)> for EdgeRecord<N> {
    fn from((source, target, label, weight): (N, N, &str, f64)) -> Self {
        Self::new(source, target, label, weight)
    }
}

/// Ordered node sequence where consecutive nodes share an edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path<N>(Vec<N>);

impl<N> Path<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[N] {
        &self.0
    }

    /// Number of edges traversed (node count minus one).
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.0.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.0
    }
}

impl<N> From<Vec<N>> for Path<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self(nodes)
    }
}

impl<N: PartialEq> PartialEq<Vec<N>> for Path<N> {
    fn eq(&self, other: &Vec<N>) -> bool {
        self.0 == *other
    }
}

/// Shortest weighted route to a single target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route<N> {
    /// Sum of edge costs along `path`.
    pub distance: f64,
    pub path: Path<N>,
}
