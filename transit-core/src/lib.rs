//! Transit Core - graph analysis engine for weighted transport networks.
//!
//! This crate provides the algorithmic core of transit: an undirected graph
//! store with labelled, weighted edges and the read-only engines that run on
//! it. It consumes a list of `(a, b, label, weight)` edges and exposes path
//! and metric results; loading data and displaying results are left to the
//! caller.
//!
//! # Features
//!
//! - **Graph store**: petgraph-backed, nodes created implicitly from edges
//! - **Metrics**: node/edge counts, density, average/max degree, degree distribution
//! - **DFS / BFS**: deterministic path search in ascending neighbor order
//! - **Dijkstra**: single-source, single-pair and all-pairs (optionally parallel via Rayon)
//!
//! # Usage
//!
//! ```
//! use transit_core::{search, shortest_path, Graph};
//!
//! let graph = Graph::from_edges(vec![
//!     ("X", "Y", "red", 5.0),
//!     ("Y", "Z", "red", 3.0),
//!     ("X", "Z", "blue", 20.0),
//! ])?;
//!
//! let hops = search::bfs_path(&graph, &"X", &"Z")?.expect("connected");
//! assert_eq!(hops.hops(), 1);
//!
//! let routes = shortest_path::single_source(&graph, &"X")?;
//! assert_eq!(routes[&"Z"].distance, 8.0);
//! assert_eq!(routes[&"Z"].path, vec!["X", "Y", "Z"]);
//! # Ok::<(), transit_core::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod metrics;
pub mod search;
pub mod shortest_path;
pub mod types;

pub use error::{GraphError, Result};
pub use graph::Graph;
pub use metrics::GraphMetrics;
pub use shortest_path::{AllPairs, ShortestPaths};
pub use types::{EdgeAttrs, EdgeRecord, NodeId, Path, Route};
