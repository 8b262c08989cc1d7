//! netgraph CLI - Command-line interface for the edge-list graph engine
//!
//! Loads a weighted edge list, then runs one query (shortest paths, minimum
//! spanning tree, listings) or one mutation per invocation.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::mutate::Mutation;
use config::NetgraphConfig;
use output::{OutputConfig, OutputFormat};

/// Shortest paths and spanning trees over a weighted edge list.
///
/// The edge list is a whitespace-separated text file of
/// `source_id source_name dest_id dest_name weight` records.
#[derive(Parser)]
#[command(name = "netgraph")]
#[command(author, version)]
#[command(about = "Shortest paths and spanning trees over a weighted edge list")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  netgraph vertices                 List vertices
  netgraph sp 0 --to 2              Bellman-Ford from 0, path to 2
  netgraph mst --format json        Kruskal spanning tree as JSON
  netgraph remove-vertex 3 -o out.txt")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Edge-list file (overrides config, defaults to network.txt)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Compact output (less whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors (results are still printed)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    // ==================== Queries ====================
    /// List vertices (id and display name)
    Vertices,

    /// List edges with their position index
    Edges,

    /// Single-source shortest paths (Bellman-Ford)
    #[command(visible_alias = "sp", alias = "bellman-ford")]
    ShortestPath {
        /// Source vertex id
        #[arg(allow_negative_numbers = true)]
        source: i64,

        /// Also report the vertex path to this target
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i64>,
    },

    /// Minimum spanning tree (Kruskal)
    #[command(alias = "kruskal")]
    Mst,

    // ==================== Mutations ====================
    /// Change the weight of the edge at INDEX
    SetWeight {
        /// Edge position (see `netgraph edges`)
        index: usize,

        /// New weight
        #[arg(allow_negative_numbers = true)]
        weight: i64,

        /// Write the updated edge list here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove the edge at INDEX
    RemoveEdge {
        /// Edge position (see `netgraph edges`)
        index: usize,

        /// Write the updated edge list here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove a vertex and every edge touching it
    RemoveVertex {
        /// Vertex id
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Write the updated edge list here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add a vertex with one edge to an existing vertex
    AddVertex {
        /// Display name of the new vertex
        name: String,

        /// Existing vertex the new edge points to
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Weight of the new edge
        #[arg(allow_negative_numbers = true)]
        weight: i64,

        /// Write the updated edge list here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

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

    // Load configuration from .netgraphrc.toml
    let config = NetgraphConfig::load(Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Apply color override from config if set
    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }
    let mut output_config = OutputConfig::auto_detect(format, config.use_color());
    if cli.compact {
        output_config = output_config.compact();
    }

    let input = cli
        .file
        .unwrap_or_else(|| PathBuf::from(config.input_file()));
    let graph = commands::load_graph(&input)?;

    let (mutation, output) = match cli.command {
        Commands::Vertices => return commands::query::run_vertices(&graph, output_config),
        Commands::Edges => return commands::query::run_edges(&graph, output_config),
        Commands::ShortestPath { source, to } => {
            return commands::paths::run(&graph, source, to, output_config)
        }
        Commands::Mst => return commands::mst::run(&graph, output_config),
        Commands::SetWeight {
            index,
            weight,
            output,
        } => (Mutation::SetWeight { index, weight }, output),
        Commands::RemoveEdge { index, output } => (Mutation::RemoveEdge { index }, output),
        Commands::RemoveVertex { id, output } => (Mutation::RemoveVertex { id }, output),
        Commands::AddVertex {
            name,
            target,
            weight,
            output,
        } => (
            Mutation::AddVertex {
                name,
                target,
                weight,
            },
            output,
        ),
    };

    commands::mutate::run(graph, &mutation, output.as_deref(), output_config)
}
