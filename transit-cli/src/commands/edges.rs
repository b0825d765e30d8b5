//! Edges command - dump the connection list with its attributes
//!
//! This is the data a renderer needs to draw the network: both endpoints,
//! the line, its colour and the travel time.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::network::NetworkDefinition;
use crate::output::{CsvOutput, Output, OutputConfig, OutputFormat, Outputter, TableOutput};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRow {
    pub from: String,
    pub to: String,
    pub line: String,
    pub color: String,
    pub duration: f64,
}

impl EdgeRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.from.clone(),
            self.to.clone(),
            self.line.clone(),
            self.color.clone(),
            format!("{:.1}", self.duration),
        ]
    }
}

const HEADERS: [&str; 5] = ["from", "to", "line", "color", "duration"];

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EdgeList {
    pub edges: Vec<EdgeRow>,
}

impl Outputter for EdgeList {
    fn to_table(&self, config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self.edges.iter().map(EdgeRow::cells).collect();
        TableOutput::from_rows(&HEADERS, &rows, config)
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self.edges.iter().map(EdgeRow::cells).collect();
        CsvOutput::from_rows(&HEADERS, &rows)
    }
}

/// Collect the graph's edges, optionally restricted to one line.
pub fn build(network: &NetworkDefinition, line: Option<&str>) -> Result<EdgeList> {
    let graph = network.build_graph()?;

    if let Some(line) = line {
        if !graph.labels().contains(line) {
            bail!("Line not found: {}", line);
        }
    }

    let edges = graph
        .edges()
        .filter(|(_, _, attrs)| line.map_or(true, |l| attrs.label == l))
        .map(|(a, b, attrs)| EdgeRow {
            from: a.clone(),
            to: b.clone(),
            line: attrs.label.clone(),
            color: network.line_color(&attrs.label).to_string(),
            duration: attrs.weight,
        })
        .collect();

    Ok(EdgeList { edges })
}

/// Run the edges command
pub fn run(network: &NetworkDefinition, line: Option<&str>, format: OutputFormat) -> Result<()> {
    Output::new(build(network, line)?, format).render()
}
