//! Routes command - least travel time between stations
//!
//! Without `--from`, Dijkstra runs from every station and all routes are
//! listed grouped by source. Sources and targets are printed in ascending
//! order; `--max-targets` keeps the first N targets of each source, and 0
//! means no limit.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use transit_core::{shortest_path, AllPairs, Graph, ShortestPaths};

use super::require_station;
use crate::network::NetworkDefinition;
use crate::output::{join_path, CsvOutput, Output, OutputConfig, OutputFormat, Outputter};

/// One row of the route listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub target: String,
    /// Travel time in minutes.
    pub duration: f64,
    pub hops: usize,
    pub path: Vec<String>,
}

/// Routes grouped by source station
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    pub sources: BTreeMap<String, Vec<RouteEntry>>,
}

impl RouteTable {
    fn from_paths(all: AllPairs<String>, max_targets: Option<usize>) -> Self {
        let sources = all
            .into_iter()
            .map(|(source, paths)| (source, entries(paths, max_targets)))
            .collect();
        Self { sources }
    }
}

fn entries(paths: ShortestPaths<String>, max_targets: Option<usize>) -> Vec<RouteEntry> {
    // BTreeMap iteration is already sorted by target
    paths
        .into_iter()
        .take(max_targets.filter(|&n| n > 0).unwrap_or(usize::MAX))
        .map(|(target, route)| RouteEntry {
            target,
            duration: route.distance,
            hops: route.path.hops(),
            path: route.path.into_nodes(),
        })
        .collect()
}

impl Outputter for RouteTable {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = String::new();
        for (source, routes) in &self.sources {
            output.push_str(&format!("\n{} {}:\n", "From".bold(), source.cyan()));
            for route in routes {
                output.push_str(&format!(
                    "  - to {}: {} | {}\n",
                    route.target,
                    format!("{:.1} min", route.duration).yellow(),
                    join_path(&route.path)
                ));
            }
        }
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .sources
            .iter()
            .flat_map(|(source, routes)| {
                routes.iter().map(move |route| {
                    vec![
                        source.clone(),
                        route.target.clone(),
                        format!("{:.1}", route.duration),
                        route.hops.to_string(),
                        join_path(&route.path),
                    ]
                })
            })
            .collect();
        CsvOutput::from_rows(&["source", "target", "duration", "hops", "path"], &rows)
    }
}

/// Options for the routes command, merged from flags and config
#[derive(Debug, Clone, Default)]
pub struct RoutesOptions {
    pub from: Option<String>,
    pub max_targets: Option<usize>,
    pub parallel: bool,
}

fn compute(graph: &Graph<String>, options: &RoutesOptions) -> Result<AllPairs<String>> {
    if let Some(source) = &options.from {
        require_station(graph, source)?;
        let paths = shortest_path::single_source(graph, source)?;
        return Ok(BTreeMap::from([(source.clone(), paths)]));
    }

    tracing::debug!(
        stations = graph.node_count(),
        parallel = options.parallel,
        "computing all-pairs routes"
    );
    let all = if options.parallel {
        shortest_path::all_pairs_parallel(graph)?
    } else {
        shortest_path::all_pairs(graph)?
    };
    Ok(all)
}

pub fn build(network: &NetworkDefinition, options: &RoutesOptions) -> Result<RouteTable> {
    let graph = network.build_graph()?;
    let all = compute(&graph, options)?;
    Ok(RouteTable::from_paths(all, options.max_targets))
}

/// Run the routes command
pub fn run(network: &NetworkDefinition, options: &RoutesOptions, format: OutputFormat) -> Result<()> {
    Output::new(build(network, options)?, format).render()
}
