//! Weighted undirected graph store powered by petgraph.
//!
//! Nodes are created implicitly the first time they appear as an edge
//! endpoint. The store is built once from an edge list and then only read by
//! the search engines, which work on `NodeIndex` values internally and map
//! back to labels when they produce a [`Path`].
//!
//! # Duplicate edges
//!
//! Inserting an edge for a pair that is already connected (in either
//! orientation) overwrites its attributes: the last write wins, and the pair
//! still counts as a single edge for degree and edge count.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeSet, HashMap};

use crate::error::{check_weight, GraphError, Result};
use crate::types::{EdgeAttrs, EdgeRecord, NodeId, Path};

/// In-memory undirected graph with labelled, weighted edges.
///
/// Holds an undirected petgraph graph where:
/// - Node weights are the caller's opaque labels
/// - Edge weights are [`EdgeAttrs`] (category label + positive cost)
#[derive(Debug, Clone)]
pub struct Graph<N> {
    graph: UnGraph<N, EdgeAttrs>,
    node_map: HashMap<N, NodeIndex>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Graph {
            graph: UnGraph::default(),
            node_map: HashMap::new(),
        }
    }

    /// Build a graph from an ordered edge list.
    ///
    /// Fails on the first edge with a non-positive or non-finite weight.
    pub fn from_edges<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord<N>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let EdgeRecord {
                source,
                target,
                label,
                weight,
            } = edge.into();
            graph.add_edge(source, target, label, weight)?;
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Insert or update the undirected edge `a -- b`.
    ///
    /// The weight is validated before the store is touched, so a rejected
    /// edge never creates its endpoints.
    pub fn add_edge(&mut self, a: N, b: N, label: impl Into<String>, weight: f64) -> Result<()> {
        check_weight(&a, &b, weight)?;

        let a_idx = self.ensure_node(a);
        let b_idx = self.ensure_node(b);
        let attrs = EdgeAttrs {
            label: label.into(),
            weight,
        };

        // update_edge checks both orientations on undirected graphs
        self.graph.update_edge(a_idx, b_idx, attrs);
        Ok(())
    }

    fn ensure_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        idx
    }

    /// Adjacent nodes, sorted ascending and without duplicates.
    pub fn neighbors(&self, node: &N) -> Result<Vec<&N>> {
        let idx = self.index_of(node)?;
        Ok(self
            .sorted_neighbors(idx)
            .into_iter()
            .map(|n| &self.graph[n])
            .collect())
    }

    /// Number of distinct neighbors of `node`.
    pub fn degree(&self, node: &N) -> Result<usize> {
        let idx = self.index_of(node)?;
        Ok(self.sorted_neighbors(idx).len())
    }

    /// Check if a node exists in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.node_map.contains_key(node)
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes, in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_weights()
    }

    /// All edges with their attributes, in first-insertion order.
    ///
    /// Endpoints are reported in the orientation the pair was first inserted.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &EdgeAttrs)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], e.weight()))
    }

    /// Owned copy of the edge list, suitable for serialization.
    pub fn to_records(&self) -> Vec<EdgeRecord<N>> {
        self.edges()
            .map(|(a, b, attrs)| EdgeRecord::new(a.clone(), b.clone(), &*attrs.label, attrs.weight))
            .collect()
    }

    /// Attributes of the edge between `a` and `b`, in either orientation.
    pub fn edge(&self, a: &N, b: &N) -> Option<&EdgeAttrs> {
        let a_idx = *self.node_map.get(a)?;
        let b_idx = *self.node_map.get(b)?;
        let edge = self.graph.find_edge(a_idx, b_idx)?;
        self.graph.edge_weight(edge)
    }

    /// Get all distinct edge labels, sorted.
    pub fn labels(&self) -> BTreeSet<&str> {
        self.graph.edge_weights().map(|e| e.label.as_str()).collect()
    }

    /// Sum of edge weights along `path`.
    ///
    /// A path of zero or one node weighs nothing.
    pub fn path_weight(&self, path: &[N]) -> Result<f64> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let attrs = self.edge(&pair[0], &pair[1]).ok_or_else(|| GraphError::MissingEdge {
                from: format!("{:?}", pair[0]),
                to: format!("{:?}", pair[1]),
            })?;
            total += attrs.weight;
        }
        Ok(total)
    }

    // ---- crate-internal accessors used by the engines ----

    pub(crate) fn index_of(&self, node: &N) -> Result<NodeIndex> {
        self.node_map
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(format!("{:?}", node)))
    }

    pub(crate) fn label(&self, idx: NodeIndex) -> &N {
        &self.graph[idx]
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Neighbor indices ordered by their label.
    pub(crate) fn sorted_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        neighbors.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        neighbors.dedup();
        neighbors
    }

    /// Incident edges as `(other endpoint, attributes)`.
    pub(crate) fn incident(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, &EdgeAttrs)> + '_ {
        self.graph.edges(idx).map(move |e| {
            let other = if e.source() == idx { e.target() } else { e.source() };
            (other, e.weight())
        })
    }

    pub(crate) fn to_path(&self, indices: &[NodeIndex]) -> Path<N> {
        Path::new(indices.iter().map(|&i| self.graph[i].clone()).collect())
    }
}
