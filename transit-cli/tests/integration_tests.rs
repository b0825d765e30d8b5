//! Integration tests for the transit CLI
//!
//! Tests end-to-end command behavior using the CLI binary.
//! Uses tempfile for isolated test directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Get the path to the transit binary (built by cargo)
fn transit_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_transit"))
}

/// Run transit with the given args in the specified directory
fn run_transit(dir: &Path, args: &[&str]) -> Output {
    transit_binary()
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute transit command")
}

/// Get stdout as string
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as string
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn parse_json(output: &Output) -> serde_json::Value {
    let stdout_str = stdout(output);
    serde_json::from_str(&stdout_str)
        .unwrap_or_else(|e| panic!("Output should be valid JSON ({}): {}", e, stdout_str))
}

/// Write the X/Y/Z triangle where the direct connection is the slowest
fn write_triangle_network(dir: &Path) -> PathBuf {
    let path = dir.join("triangle.toml");
    fs::write(
        &path,
        r##"
name = "Triangle"

[lines]
red = "#ff0000"

[[connections]]
from = "X"
to = "Y"
line = "red"
duration = 5.0

[[connections]]
from = "Y"
to = "Z"
line = "red"
duration = 3.0

[[connections]]
from = "X"
to = "Z"
line = "blue"
duration = 20.0
"##,
    )
    .expect("Failed to write network file");
    path
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_metrics_builtin_network() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &["metrics", "--format", "json"]);

    assert!(output.status.success(), "metrics should succeed: {}", stderr(&output));

    let json = parse_json(&output);
    assert_eq!(json["num_nodes"], 51);
    assert_eq!(json["num_edges"], 48);
    assert_eq!(json["density"], 0.0376);
    assert_eq!(json["average_degree"], 1.88);
    assert_eq!(json["max_degree"], 2);
}

#[test]
fn test_metrics_table_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &["metrics"]);

    assert!(output.status.success());
    let stdout_str = stdout(&output);
    assert!(stdout_str.contains("Kyiv metro"));
    assert!(stdout_str.contains("num_nodes"));
    assert!(stdout_str.contains("51"));
}

#[test]
fn test_metrics_custom_network_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let network = write_triangle_network(temp_dir.path());

    let output = run_transit(
        temp_dir.path(),
        &["--network", network.to_str().unwrap(), "metrics", "--format", "json"],
    );

    assert!(output.status.success(), "{}", stderr(&output));
    let json = parse_json(&output);
    assert_eq!(json["network"], "Triangle");
    assert_eq!(json["num_nodes"], 3);
    assert_eq!(json["num_edges"], 3);
    assert_eq!(json["density"], 1.0);
}

#[test]
fn test_metrics_json_network_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("net.json");
    fs::write(
        &path,
        r#"{"connections": [{"from": "A", "to": "B", "line": "L", "duration": 1.5}]}"#,
    )
    .unwrap();

    let output = run_transit(temp_dir.path(), &["-n", "net.json", "--format", "json", "metrics"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(parse_json(&output)["num_edges"], 1);
}

// ============================================================================
// Path queries
// ============================================================================

#[test]
fn test_compare_green_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(
        temp_dir.path(),
        &["compare", "Сирець", "Червоний хутір", "--format", "json"],
    );

    assert!(output.status.success(), "{}", stderr(&output));
    let json = parse_json(&output);
    assert_eq!(json["dfs"]["hops"], 15);
    assert_eq!(json["bfs"]["hops"], 15);
    assert_eq!(json["bfs"]["stations"].as_array().map(Vec::len), Some(16));
    assert_eq!(json["dfs"]["stations"], json["bfs"]["stations"]);
}

#[test]
fn test_path_dijkstra_vs_bfs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_triangle_network(temp_dir.path());

    let dijkstra = run_transit(
        temp_dir.path(),
        &["-n", "triangle.toml", "--format", "json", "path", "X", "Z"],
    );
    assert!(dijkstra.status.success(), "{}", stderr(&dijkstra));
    let json = parse_json(&dijkstra);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["path"]["stations"], serde_json::json!(["X", "Y", "Z"]));
    assert_eq!(json["path"]["duration"], 8.0);

    let bfs = run_transit(
        temp_dir.path(),
        &["-n", "triangle.toml", "--format", "json", "path", "X", "Z", "--algorithm", "bfs"],
    );
    let json = parse_json(&bfs);
    assert_eq!(json["path"]["stations"], serde_json::json!(["X", "Z"]));
}

#[test]
fn test_path_unknown_station_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &["path", "Сирець", "Атлантида"]);

    assert!(!output.status.success(), "unknown station should fail");
    assert!(
        stderr(&output).contains("Station not found: Атлантида"),
        "got: {}",
        stderr(&output)
    );
}

#[test]
fn test_path_between_lines_reports_no_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &["path", "Лісова", "Теремки"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No path found"));
}

// ============================================================================
// Routes and edges
// ============================================================================

#[test]
fn test_routes_single_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_triangle_network(temp_dir.path());

    let output = run_transit(
        temp_dir.path(),
        &["-n", "triangle.toml", "routes", "--from", "X"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let stdout_str = stdout(&output);
    assert!(stdout_str.contains("From X:"), "got: {}", stdout_str);
    assert!(stdout_str.contains("to Z: 8.0 min | X → Y → Z"), "got: {}", stdout_str);
}

#[test]
fn test_routes_csv_all_pairs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_triangle_network(temp_dir.path());

    let output = run_transit(
        temp_dir.path(),
        &["-n", "triangle.toml", "--format", "csv", "routes"],
    );
    assert!(output.status.success());

    let stdout_str = stdout(&output);
    let lines: Vec<&str> = stdout_str.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines[0], "source,target,duration,hops,path");
    // 3 sources x 3 targets, including each station itself
    assert_eq!(lines.len(), 10);
    assert!(lines.contains(&"Z,X,8.0,2,Z → Y → X"));
}

#[test]
fn test_edges_unknown_line_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &["edges", "--line", "Жовта"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Line not found"));
}

#[test]
fn test_edges_json_includes_colors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_triangle_network(temp_dir.path());

    let output = run_transit(
        temp_dir.path(),
        &["-n", "triangle.toml", "--format", "json", "edges"],
    );
    let json = parse_json(&output);
    let edges = json.as_array().expect("edge list should be an array");
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0]["color"], "#ff0000");
    // no colour configured for the blue line
    assert_eq!(edges[2]["color"], "#9e9e9e");
}

// ============================================================================
// Configuration and errors
// ============================================================================

#[test]
fn test_config_sets_network_and_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_triangle_network(temp_dir.path());
    fs::write(
        temp_dir.path().join(".transitrc.toml"),
        "[network]\nfile = \"triangle.toml\"\n\n[output]\nformat = \"json\"\ncolor = false\n",
    )
    .unwrap();

    let output = run_transit(temp_dir.path(), &["metrics"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(parse_json(&output)["network"], "Triangle");
}

#[test]
fn test_format_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join(".transitrc.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = run_transit(temp_dir.path(), &["--format", "csv", "metrics"]);
    assert!(stdout(&output).starts_with("network,num_nodes"));
}

#[test]
fn test_invalid_weight_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("bad.toml"),
        "[[connections]]\nfrom = \"A\"\nto = \"B\"\nline = \"L\"\nduration = -1.0\n",
    )
    .unwrap();

    let output = run_transit(temp_dir.path(), &["-n", "bad.toml", "metrics"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid network"));
}

#[test]
fn test_missing_network_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &["-n", "nope.toml", "metrics"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read network file"));
}

#[test]
fn test_completions_bash() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &["completions", "bash"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("transit"));
}

#[test]
fn test_completions_instructions_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(
        temp_dir.path(),
        &["completions", "zsh", "--instructions", "--format", "json"],
    );

    assert!(output.status.success(), "{}", stderr(&output));
    let json = parse_json(&output);
    assert_eq!(json["shell"], "zsh");
    assert!(json["instructions"]
        .as_array()
        .map_or(false, |lines| lines.iter().any(|l| l == "eval \"$(transit completions zsh)\"")));
}

#[test]
fn test_routes_zero_max_targets_lists_everything() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_triangle_network(temp_dir.path());

    let output = run_transit(
        temp_dir.path(),
        &["-n", "triangle.toml", "--format", "csv", "routes", "--max-targets", "0"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).lines().filter(|l| !l.is_empty()).count(), 10);
}

#[test]
fn test_no_command_prints_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_transit(temp_dir.path(), &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}
