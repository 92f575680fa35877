//! Command line argument parsing for the hypernym CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hypernym - shortest ancestral path queries over hypernym graphs
#[derive(Parser, Debug, Clone)]
#[command(name = "hypernym")]
#[command(about = "Shortest ancestral path queries over WordNet-style hypernym graphs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HypernymArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HypernymArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Query shortest ancestral paths between vertex pairs
    Sap(SapArgs),

    /// Semantic distance between two dictionary nouns
    Distance(DistanceArgs),

    /// Find the outcast noun of each noun list
    Outcast(OutcastArgs),

    /// Show digraph statistics and shape checks
    #[command(name = "graph-info")]
    GraphInfo(GraphInfoArgs),

    /// Run a random query benchmark against a digraph
    Benchmark(BenchmarkArgs),
}

/// Arguments for SAP vertex-pair queries
#[derive(Parser, Debug, Clone)]
pub struct SapArgs {
    /// Path to the digraph file
    #[arg(short, long)]
    pub graph: PathBuf,

    /// Vertex pairs, flattened (v1 w1 v2 w2 ...); reads stdin when empty
    pub pairs: Vec<usize>,

    /// Also print the full ancestral path for each pair
    #[arg(long)]
    pub show_path: bool,
}

/// Arguments for noun distance queries
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Path to the synsets CSV file
    #[arg(short, long)]
    pub synsets: PathBuf,

    /// Path to the hypernyms CSV file
    #[arg(short = 'y', long)]
    pub hypernyms: PathBuf,

    /// First noun
    pub noun_a: String,

    /// Second noun
    pub noun_b: String,
}

/// Arguments for outcast detection
#[derive(Parser, Debug, Clone)]
pub struct OutcastArgs {
    /// Path to the synsets CSV file
    #[arg(short, long)]
    pub synsets: PathBuf,

    /// Path to the hypernyms CSV file
    #[arg(short = 'y', long)]
    pub hypernyms: PathBuf,

    /// Files containing whitespace-separated noun lists, one outcast each
    #[arg(required = true)]
    pub lists: Vec<PathBuf>,
}

/// Arguments for graph inspection
#[derive(Parser, Debug, Clone)]
pub struct GraphInfoArgs {
    /// Path to the digraph file
    #[arg(short, long)]
    pub graph: PathBuf,
}

/// Arguments for the query benchmark
#[derive(Parser, Debug, Clone)]
pub struct BenchmarkArgs {
    /// Path to the digraph file
    #[arg(short, long)]
    pub graph: PathBuf,

    /// Number of random vertex-pair queries to run
    #[arg(short = 'n', long, default_value = "10000")]
    pub queries: usize,

    /// Seed for the query generator
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Result cache capacity
    #[arg(long)]
    pub cache_capacity: Option<usize>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
