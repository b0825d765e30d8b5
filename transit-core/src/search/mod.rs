//! Unweighted path search between two nodes.
//!
//! Both engines explore neighbors in ascending label order, which makes their
//! output deterministic for a given graph:
//!
//! - [`dfs_path`]: first path found by a depth-first walk (not necessarily short)
//! - [`bfs_path`]: a path with the minimum number of edges
//!
//! A missing endpoint is reported as [`GraphError::NodeNotFound`]; two
//! existing but disconnected nodes yield `Ok(None)`.
//!
//! [`GraphError::NodeNotFound`]: crate::error::GraphError::NodeNotFound

mod bfs;
mod dfs;

pub use bfs::bfs_path;
pub use dfs::dfs_path;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use std::collections::{HashMap, VecDeque};

    /// Hop distances from `start` computed without any of the engines.
    fn hop_distances(edges: &[(&'static str, &'static str)], start: &'static str) -> HashMap<&'static str, usize> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(start, 0);
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            let d = dist[node];
            for &(a, b) in edges {
                let other = if a == node {
                    b
                } else if b == node {
                    a
                } else {
                    continue;
                };
                if !dist.contains_key(other) {
                    dist.insert(other, d + 1);
                    queue.push_back(other);
                }
            }
        }
        dist
    }

    fn build(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
        Graph::from_edges(edges.iter().map(|&(a, b)| (a, b, "x", 1.0))).unwrap()
    }

    #[test]
    fn test_bfs_never_longer_than_dfs() {
        let edges = [
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("d", "e"),
            ("a", "e"),
            ("b", "f"),
            ("f", "g"),
            ("g", "e"),
            ("h", "i"),
        ];
        let graph = build(&edges);
        let nodes: Vec<&str> = graph.nodes().copied().collect();

        for &start in &nodes {
            let truth = hop_distances(&edges, start);
            for &goal in &nodes {
                let dfs = dfs_path(&graph, &start, &goal).unwrap();
                let bfs = bfs_path(&graph, &start, &goal).unwrap();
                match truth.get(goal) {
                    Some(&hops) => {
                        let dfs = dfs.expect("dfs should reach a connected goal");
                        let bfs = bfs.expect("bfs should reach a connected goal");
                        assert_eq!(bfs.hops(), hops, "{} -> {}", start, goal);
                        assert!(bfs.hops() <= dfs.hops(), "{} -> {}", start, goal);
                    }
                    None => {
                        assert!(dfs.is_none());
                        assert!(bfs.is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn test_paths_follow_edges() {
        let edges = [("a", "b"), ("b", "c"), ("c", "d"), ("a", "d"), ("b", "d")];
        let graph = build(&edges);
        for goal in ["b", "c", "d"] {
            for path in [
                dfs_path(&graph, &"a", &goal).unwrap().unwrap(),
                bfs_path(&graph, &"a", &goal).unwrap().unwrap(),
            ] {
                assert_eq!(path.start(), Some(&"a"));
                assert_eq!(path.end(), Some(&goal));
                assert!(graph.path_weight(path.nodes()).is_ok());
            }
        }
    }

    #[test]
    fn test_triangle() {
        let graph = build(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(bfs_path(&graph, &"a", &"c").unwrap().unwrap(), vec!["a", "c"]);
        // "b" sorts before "c", so the depth-first walk reaches c through b
        assert_eq!(dfs_path(&graph, &"a", &"c").unwrap().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(dfs_path(&graph, &"c", &"a").unwrap().unwrap(), vec!["c", "a"]);
    }

    #[test]
    fn test_disconnected_components() {
        let graph = build(&[("a", "b"), ("c", "d")]);
        assert_eq!(dfs_path(&graph, &"a", &"c").unwrap(), None);
        assert_eq!(bfs_path(&graph, &"a", &"c").unwrap(), None);
    }
}
