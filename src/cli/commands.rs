//! Command implementations for the hypernym CLI.

use std::fs;
use std::io::{self, BufRead};
use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{HypernymError, Result};
use crate::graph::io::load_digraph;
use crate::graph::validate;
use crate::outcast::Outcast;
use crate::sap::service::Sap;
use crate::wordnet::WordNet;

/// Execute a CLI command.
pub fn execute_command(args: HypernymArgs) -> Result<()> {
    match &args.command {
        Command::Sap(sap_args) => run_sap(sap_args.clone(), &args),
        Command::Distance(distance_args) => run_distance(distance_args.clone(), &args),
        Command::Outcast(outcast_args) => run_outcast(outcast_args.clone(), &args),
        Command::GraphInfo(info_args) => run_graph_info(info_args.clone(), &args),
        Command::Benchmark(benchmark_args) => run_benchmark(benchmark_args.clone(), &args),
    }
}

/// Query shortest ancestral paths between vertex pairs.
fn run_sap(args: SapArgs, cli_args: &HypernymArgs) -> Result<()> {
    let graph = load_digraph(&args.graph)?;
    let sap = Sap::new(graph);

    let pairs = if args.pairs.is_empty() {
        read_pairs_from_stdin()?
    } else {
        collect_pairs(&args.pairs)?
    };

    let mut queries = Vec::with_capacity(pairs.len());
    for (v, w) in pairs {
        let length = sap.length(v, w)?;
        let ancestor = sap.ancestor(v, w)?;
        let path = if args.show_path {
            sap.path(v, w)?.map(|found| found.vertices)
        } else {
            None
        };

        queries.push(SapQueryResult {
            v,
            w,
            length: length.map_or(-1, |l| l as i64),
            ancestor: ancestor.map_or(-1, |a| a as i64),
            path,
        });
    }

    output_result("SAP queries", &SapResults { queries }, cli_args)
}

/// Compute the semantic distance between two nouns.
fn run_distance(args: DistanceArgs, cli_args: &HypernymArgs) -> Result<()> {
    let wordnet = WordNet::from_files(&args.synsets, &args.hypernyms)?;

    let result = DistanceResult {
        distance: wordnet.distance(&args.noun_a, &args.noun_b)?,
        ancestor: wordnet.common_ancestor(&args.noun_a, &args.noun_b)?.to_string(),
        noun_a: args.noun_a,
        noun_b: args.noun_b,
    };

    output_result("Noun distance", &result, cli_args)
}

/// Find the outcast of each noun-list file.
fn run_outcast(args: OutcastArgs, cli_args: &HypernymArgs) -> Result<()> {
    let wordnet = WordNet::from_files(&args.synsets, &args.hypernyms)?;
    let outcast = Outcast::new(&wordnet);

    let mut files = Vec::with_capacity(args.lists.len());
    for list in &args.lists {
        let contents = fs::read_to_string(list)?;
        let nouns: Vec<&str> = contents.split_whitespace().collect();

        files.push(OutcastResult {
            file: list.display().to_string(),
            nouns: nouns.len(),
            outcast: outcast.outcast(&nouns)?.to_string(),
        });
    }

    output_result("Outcasts", &OutcastResults { files }, cli_args)
}

/// Report digraph statistics and shape checks.
fn run_graph_info(args: GraphInfoArgs, cli_args: &HypernymArgs) -> Result<()> {
    let graph = load_digraph(&args.graph)?;

    let roots = validate::roots(&graph);
    let acyclic = validate::find_cycle(&graph).is_none();

    let result = GraphInfoResult {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        rooted_dag: acyclic && roots.len() == 1,
        roots,
        acyclic,
    };

    output_result("Graph info", &result, cli_args)
}

/// Run a random query storm and report throughput.
fn run_benchmark(args: BenchmarkArgs, cli_args: &HypernymArgs) -> Result<()> {
    let graph = load_digraph(&args.graph)?;
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(HypernymError::invalid_argument(
            "cannot benchmark an empty graph",
        ));
    }

    let sap = match args.cache_capacity {
        Some(capacity) => Sap::with_cache_capacity(graph, capacity),
        None => Sap::new(graph),
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let started = Instant::now();

    for _ in 0..args.queries {
        let v = rng.random_range(0..vertex_count);
        let w = rng.random_range(0..vertex_count);
        sap.length(v, w)?;
        sap.ancestor(v, w)?;
    }

    let duration = started.elapsed();
    let stats = sap.stats();
    info!(
        "benchmark done: {} queries in {:?}, {} traversals",
        args.queries, duration, stats.traversals
    );

    let result = BenchmarkResult {
        queries: args.queries,
        duration_ms: duration.as_millis() as u64,
        queries_per_second: args.queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
        traversals: stats.traversals,
        cache_hits: stats.cache_hits,
        cache_misses: stats.cache_misses,
    };

    output_result("Benchmark", &result, cli_args)
}

fn collect_pairs(flat: &[usize]) -> Result<Vec<(usize, usize)>> {
    if flat.len() % 2 != 0 {
        return Err(HypernymError::invalid_argument(
            "vertex pairs must come in twos",
        ));
    }
    Ok(flat.chunks(2).map(|pair| (pair[0], pair[1])).collect())
}

fn read_pairs_from_stdin() -> Result<Vec<(usize, usize)>> {
    let stdin = io::stdin();
    let mut values = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token.parse::<usize>().map_err(|_| {
                HypernymError::invalid_argument(format!("invalid vertex id: {token:?}"))
            })?;
            values.push(value);
        }
    }

    collect_pairs(&values)
}
