//! Network definitions: the edge data the graph is built from.
//!
//! A network is a list of connections between stations plus optional display
//! colours per line. The Kyiv metro reference network is compiled into the
//! binary and used whenever no file is given.
//!
//! # Example Definition
//!
//! ```toml
//! name = "Tiny"
//!
//! [lines]
//! Red = "#d32f2f"
//!
//! [[connections]]
//! from = "A"
//! to = "B"
//! line = "Red"
//! duration = 2.5
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape; anything
//! else is read as TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use transit_core::{EdgeRecord, Graph};

/// Built-in reference network.
const KYIV_METRO: &str = include_str!("../data/kyiv_metro.toml");

/// Fallback colour for lines without an entry in `[lines]`.
pub const DEFAULT_LINE_COLOR: &str = "#9e9e9e";

/// A single connection between two stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub line: String,
    /// Travel time in minutes.
    pub duration: f64,
}

/// Complete network definition as read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDefinition {
    /// Human-readable network name, shown in report headers.
    #[serde(default)]
    pub name: Option<String>,

    /// Line name -> display colour.
    #[serde(default)]
    pub lines: BTreeMap<String, String>,

    /// Connections in input order.
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl NetworkDefinition {
    /// The compiled-in Kyiv metro network.
    pub fn builtin() -> Result<Self> {
        toml::from_str(KYIV_METRO).context("Built-in network definition is invalid")
    }

    /// Read a network definition from a TOML or JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read network file: {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let network: Self = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse network file: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse network file: {}", path.display()))?
        };

        tracing::info!(
            path = %path.display(),
            connections = network.connections.len(),
            "loaded network definition"
        );
        Ok(network)
    }

    /// Load from `path` if given, otherwise the built-in network.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("using built-in network");
                Self::builtin()
            }
        }
    }

    /// Display name of the network.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("network")
    }

    /// Display colour for a line, falling back to grey.
    pub fn line_color(&self, line: &str) -> &str {
        self.lines
            .get(line)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LINE_COLOR)
    }

    /// Build the undirected graph, one edge per connection.
    pub fn build_graph(&self) -> Result<Graph<String>> {
        let edges = self.connections.iter().map(|c| {
            EdgeRecord::new(c.from.clone(), c.to.clone(), c.line.as_str(), c.duration)
        });
        Graph::from_edges(edges).with_context(|| format!("Invalid network '{}'", self.name()))
    }
}
