//! Command implementations for the transit CLI
//!
//! Each command module provides a `run` function that executes the command
//! logic and a `build` function returning the serializable report, so the
//! reports can be tested without capturing stdout.

pub mod compare;
pub mod completions;
pub mod edges;
pub mod metrics;
pub mod path;
pub mod routes;

use anyhow::Result;
use serde::Serialize;
use transit_core::{Graph, Path};

/// Fail with a readable message if `station` is not part of the network.
pub(crate) fn require_station(graph: &Graph<String>, station: &str) -> Result<()> {
    if graph.contains(&station.to_string()) {
        Ok(())
    } else {
        Err(anyhow::anyhow!("Station not found: {}", station))
    }
}

/// A found path with its hop count and total travel time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSummary {
    pub stations: Vec<String>,
    pub hops: usize,
    /// Total travel time in minutes.
    pub duration: f64,
}

impl PathSummary {
    pub fn from_path(graph: &Graph<String>, path: Path<String>) -> Result<Self> {
        let duration = graph.path_weight(path.nodes())?;
        Ok(Self {
            hops: path.hops(),
            stations: path.into_nodes(),
            duration,
        })
    }
}

/// Round for display: metrics are reported with a fixed number of decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
