//! Compare command - DFS and BFS side by side
//!
//! Shows the path each traversal finds between two stations and how many
//! connections each one takes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::path::{find, Algorithm};
use super::PathSummary;
use crate::network::NetworkDefinition;
use crate::output::{join_path, CsvOutput, Output, OutputConfig, OutputFormat, Outputter};

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub from: String,
    pub to: String,
    pub dfs: Option<PathSummary>,
    pub bfs: Option<PathSummary>,
    pub explanation: String,
}

impl Comparison {
    fn explain(dfs: Option<&PathSummary>, bfs: Option<&PathSummary>) -> String {
        match (dfs, bfs) {
            (Some(d), Some(b)) if d.hops == b.hops => format!(
                "Both traversals need {} connections; BFS guarantees the minimum, DFS only finds some path.",
                b.hops
            ),
            (Some(d), Some(b)) => format!(
                "BFS needs {} fewer connections: it explores level by level, DFS follows one branch as deep as it goes.",
                d.hops.saturating_sub(b.hops)
            ),
            _ => "The stations are not connected.".to_string(),
        }
    }
}

fn describe(name: &str, summary: Option<&PathSummary>) -> String {
    match summary {
        Some(s) => format!(
            "{} ({} hops): {}\n",
            name.bold(),
            s.hops.to_string().yellow(),
            join_path(&s.stations)
        ),
        None => format!("{}: {}\n", name.bold(), "no path".dimmed()),
    }
}

impl Outputter for Comparison {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {} {} {}\n",
            "DFS vs BFS from".bold(),
            self.from.cyan(),
            "to".bold(),
            self.to.cyan()
        ));
        output.push_str(&format!("{}\n", "-".repeat(60)));
        output.push_str(&describe("DFS", self.dfs.as_ref()));
        output.push_str(&describe("BFS", self.bfs.as_ref()));
        output.push_str(&format!("\n{}\n", self.explanation.dimmed()));
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = [("dfs", &self.dfs), ("bfs", &self.bfs)]
            .into_iter()
            .map(|(name, summary)| match summary {
                Some(s) => vec![
                    name.to_string(),
                    s.hops.to_string(),
                    join_path(&s.stations),
                ],
                None => vec![name.to_string(), String::new(), String::new()],
            })
            .collect();
        CsvOutput::from_rows(&["algorithm", "hops", "path"], &rows)
    }
}

pub fn build(network: &NetworkDefinition, start: &str, goal: &str) -> Result<Comparison> {
    let graph = network.build_graph()?;
    let dfs = find(&graph, start, goal, Algorithm::Dfs)?;
    let bfs = find(&graph, start, goal, Algorithm::Bfs)?;
    let explanation = Comparison::explain(dfs.as_ref(), bfs.as_ref());

    Ok(Comparison {
        from: start.to_string(),
        to: goal.to_string(),
        dfs,
        bfs,
        explanation,
    })
}

/// Run the compare command
pub fn run(
    network: &NetworkDefinition,
    start: &str,
    goal: &str,
    format: OutputFormat,
) -> Result<()> {
    Output::new(build(network, start, goal)?, format).render()
}
