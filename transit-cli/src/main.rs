//! Transit CLI - graph analysis for transport networks
//!
//! Loads a network of stations and timed connections (the Kyiv metro by
//! default) and answers path, route and metric queries against it.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod network;
mod output;

use commands::*;
use config::TransitConfig;
use network::NetworkDefinition;
use output::OutputFormat;

/// Graph analysis for transport networks.
///
/// Builds a weighted, undirected graph from a list of station connections
/// and compares depth-first, breadth-first and Dijkstra path finding on it.
#[derive(Parser)]
#[command(name = "transit")]
#[command(author, version)]
#[command(about = "Graph analysis for transport networks")]
#[command(propagate_version = true)]
#[command(next_help_heading = "Options")]
#[command(after_help = "Examples:
  transit metrics                          Network characteristics
  transit compare Сирець \"Червоний хутір\"  DFS vs BFS on the green line
  transit path Вокзальна Лісова            Fastest route
  transit routes --from Теремки            Travel times from one station
  transit -n my_city.toml edges --line Red Edge list for one line")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Network definition file, TOML or JSON (default: built-in Kyiv metro)
    #[arg(short, long, global = true, value_name = "FILE")]
    network: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show basic network characteristics
    #[command(visible_alias = "m")]
    Metrics,

    /// Compare the paths found by DFS and BFS
    Compare {
        /// Station to start from
        start: String,

        /// Station to reach
        goal: String,
    },

    /// Find a path between two stations
    #[command(visible_alias = "p")]
    Path {
        /// Station to start from
        start: String,

        /// Station to reach
        goal: String,

        /// Search algorithm
        #[arg(short, long, value_enum, default_value_t = path::Algorithm::Dijkstra)]
        algorithm: path::Algorithm,
    },

    /// List shortest travel times between stations
    #[command(visible_alias = "r")]
    Routes {
        /// Only list routes from this station
        #[arg(long)]
        from: Option<String>,

        /// Maximum number of targets shown per station
        #[arg(long)]
        max_targets: Option<usize>,

        /// Compute all pairs in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// List all connections with their attributes
    Edges {
        /// Only show connections on this line
        #[arg(short, long)]
        line: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of generating completions
        #[arg(long)]
        instructions: bool,
    },
}

/// Setup logging based on verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .transitrc.toml
    let config = TransitConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    colored::control::set_override(config.use_color().unwrap_or_else(output::is_tty));

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    // Completions don't need a network
    if let Commands::Completions {
        shell,
        instructions,
    } = command
    {
        return completions::run(shell, instructions, &mut Cli::command(), format);
    }

    let network_file = cli.network.as_deref().or_else(|| config.network_file());
    let network = NetworkDefinition::load(network_file)?;

    match command {
        Commands::Metrics => metrics::run(&network, format),
        Commands::Compare { start, goal } => compare::run(&network, &start, &goal, format),
        Commands::Path {
            start,
            goal,
            algorithm,
        } => path::run(&network, &start, &goal, algorithm, format),
        Commands::Routes {
            from,
            max_targets,
            parallel,
        } => {
            let options = routes::RoutesOptions {
                from,
                max_targets: max_targets.or_else(|| config.max_targets()),
                parallel: parallel || config.parallel_routes(),
            };
            routes::run(&network, &options, format)
        }
        Commands::Edges { line } => edges::run(&network, line.as_deref(), format),
        Commands::Completions { .. } => Ok(()),
    }
}
