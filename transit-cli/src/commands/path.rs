//! Path command - find a route between two stations
//!
//! `transit path <START> <GOAL>` runs one of the three engines:
//! - dfs: first path found by a depth-first walk
//! - bfs: fewest connections
//! - dijkstra: shortest total travel time (default)

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use transit_core::{search, shortest_path, Graph};

use super::{require_station, PathSummary};
use crate::network::NetworkDefinition;
use crate::output::{join_path, CsvOutput, Output, OutputConfig, OutputFormat, Outputter};

/// Path-finding engine selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first search
    Dfs,
    /// Breadth-first search (fewest hops)
    Bfs,
    /// Dijkstra (least travel time)
    #[default]
    Dijkstra,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Result of a single path query
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub algorithm: Algorithm,
    pub path: Option<PathSummary>,
}

impl Outputter for PathResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {} {} {}\n",
            "Path from".bold(),
            self.from.cyan(),
            "to".bold(),
            self.to.cyan(),
            format!("({})", self.algorithm).dimmed()
        ));
        output.push_str(&format!("{}\n", "-".repeat(60)));

        match &self.path {
            Some(summary) => {
                let stations = &summary.stations;
                for (i, station) in stations.iter().enumerate() {
                    let prefix = if i == 0 {
                        "START".green().to_string()
                    } else if i == stations.len() - 1 {
                        "END  ".red().to_string()
                    } else {
                        format!("{:5}", i)
                    };
                    output.push_str(&format!("  {} {}\n", prefix, station));

                    if i < stations.len() - 1 {
                        output.push_str(&format!("       {}\n", "|".dimmed()));
                    }
                }
                output.push_str(&format!(
                    "\n{}: {} hops, {:.1} min\n",
                    "Path length".bold(),
                    summary.hops,
                    summary.duration
                ));
            }
            None => {
                output.push_str(&format!(
                    "\n  {} No path found between these stations.\n",
                    "INFO".yellow()
                ));
            }
        }

        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .path
            .iter()
            .map(|summary| {
                vec![
                    self.from.clone(),
                    self.to.clone(),
                    self.algorithm.to_string(),
                    summary.hops.to_string(),
                    format!("{:.1}", summary.duration),
                    join_path(&summary.stations),
                ]
            })
            .collect();
        CsvOutput::from_rows(
            &["from", "to", "algorithm", "hops", "duration", "path"],
            &rows,
        )
    }
}

/// Run `algorithm` on an already built graph.
pub fn find(
    graph: &Graph<String>,
    start: &str,
    goal: &str,
    algorithm: Algorithm,
) -> Result<Option<PathSummary>> {
    require_station(graph, start)?;
    require_station(graph, goal)?;

    let (start, goal) = (start.to_string(), goal.to_string());
    let path = match algorithm {
        Algorithm::Dfs => search::dfs_path(graph, &start, &goal)?,
        Algorithm::Bfs => search::bfs_path(graph, &start, &goal)?,
        Algorithm::Dijkstra => {
            shortest_path::shortest_path(graph, &start, &goal)?.map(|route| route.path)
        }
    };

    path.map(|p| PathSummary::from_path(graph, p)).transpose()
}

pub fn build(
    network: &NetworkDefinition,
    start: &str,
    goal: &str,
    algorithm: Algorithm,
) -> Result<PathResult> {
    let graph = network.build_graph()?;
    Ok(PathResult {
        from: start.to_string(),
        to: goal.to_string(),
        algorithm,
        path: find(&graph, start, goal, algorithm)?,
    })
}

/// Run the path command
pub fn run(
    network: &NetworkDefinition,
    start: &str,
    goal: &str,
    algorithm: Algorithm,
    format: OutputFormat,
) -> Result<()> {
    Output::new(build(network, start, goal, algorithm)?, format).render()
}
