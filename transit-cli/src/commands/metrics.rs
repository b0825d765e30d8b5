//! Metrics command - basic characteristics of the network
//!
//! `transit metrics` prints node/edge counts, density, average and maximum
//! degree, plus the degree distribution.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use transit_core::metrics;

use super::round_to;
use crate::network::NetworkDefinition;
use crate::output::{CsvOutput, Output, OutputConfig, OutputFormat, Outputter, TableOutput};

/// Metrics report, rounded for display.
#[derive(Debug, Serialize)]
pub struct MetricsReport {
    pub network: String,
    pub num_nodes: usize,
    pub num_edges: usize,
    pub density: f64,
    pub average_degree: f64,
    pub max_degree: usize,
    pub lines: Vec<String>,
    pub degree_distribution: BTreeMap<usize, usize>,
}

impl Outputter for MetricsReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Network characteristics:".bold(),
            self.network.cyan()
        ));

        let pairs = [
            ("num_nodes", self.num_nodes.to_string()),
            ("num_edges", self.num_edges.to_string()),
            ("density", self.density.to_string()),
            ("average_degree", self.average_degree.to_string()),
            ("max_degree", self.max_degree.to_string()),
            ("lines", self.lines.join(", ")),
        ];
        output.push_str(&TableOutput::format_key_value(&pairs, config));

        output.push_str(&format!("\n\n{}\n", "Degree distribution:".bold()));
        for (degree, count) in &self.degree_distribution {
            output.push_str(&format!("  degree {}: {} nodes\n", degree, count));
        }
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &[
                "network",
                "num_nodes",
                "num_edges",
                "density",
                "average_degree",
                "max_degree",
            ],
            &[vec![
                self.network.clone(),
                self.num_nodes.to_string(),
                self.num_edges.to_string(),
                self.density.to_string(),
                self.average_degree.to_string(),
                self.max_degree.to_string(),
            ]],
        )
    }
}

/// Compute the report for a network.
pub fn build(network: &NetworkDefinition) -> Result<MetricsReport> {
    let graph = network.build_graph()?;
    let computed = metrics::calculate(&graph);

    Ok(MetricsReport {
        network: network.name().to_string(),
        num_nodes: computed.num_nodes,
        num_edges: computed.num_edges,
        density: round_to(computed.density, 4),
        average_degree: round_to(computed.average_degree, 2),
        max_degree: computed.max_degree,
        lines: graph.labels().into_iter().map(String::from).collect(),
        degree_distribution: metrics::degree_distribution(&graph),
    })
}

/// Run the metrics command
pub fn run(network: &NetworkDefinition, format: OutputFormat) -> Result<()> {
    Output::new(build(network)?, format).render()
}
