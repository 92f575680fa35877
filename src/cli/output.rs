//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HypernymArgs, OutputFormat};
use crate::error::Result;

/// Result of one vertex-pair SAP query.
///
/// `length` and `ancestor` are `-1` when no common ancestor exists, matching
/// the classic text drivers.
#[derive(Debug, Serialize, Deserialize)]
pub struct SapQueryResult {
    pub v: usize,
    pub w: usize,
    pub length: i64,
    pub ancestor: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<usize>>,
}

/// Result of a batch of SAP queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct SapResults {
    pub queries: Vec<SapQueryResult>,
}

/// Result of a noun distance query.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub noun_a: String,
    pub noun_b: String,
    pub distance: usize,
    pub ancestor: String,
}

/// Outcast of one noun-list file.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcastResult {
    pub file: String,
    pub nouns: usize,
    pub outcast: String,
}

/// Results over all outcast input files.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcastResults {
    pub files: Vec<OutcastResult>,
}

/// Digraph statistics and shape checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphInfoResult {
    pub vertices: usize,
    pub edges: usize,
    pub roots: Vec<usize>,
    pub acyclic: bool,
    pub rooted_dag: bool,
}

/// Benchmark results.
#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub queries: usize,
    pub duration_ms: u64,
    pub queries_per_second: f64,
    pub traversals: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &HypernymArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &HypernymArgs) -> Result<()> {
    if args.verbosity() > 1 && !message.is_empty() {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("SapResults") => output_sap_human(&value),
        _ if std::any::type_name::<T>().contains("OutcastResults") => output_outcast_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output SAP query results in the classic driver format.
fn output_sap_human(value: &serde_json::Value) -> Result<()> {
    let queries = value
        .get("queries")
        .and_then(|q| q.as_array())
        .cloned()
        .unwrap_or_default();

    for query in &queries {
        let length = query.get("length").and_then(|l| l.as_i64()).unwrap_or(-1);
        let ancestor = query.get("ancestor").and_then(|a| a.as_i64()).unwrap_or(-1);
        println!("length = {length}, ancestor = {ancestor}");

        if let Some(path) = query.get("path").and_then(|p| p.as_array()) {
            let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            println!("path = {}", hops.join(" -> "));
        }
    }

    Ok(())
}

/// Output outcast results, one line per input file.
fn output_outcast_human(value: &serde_json::Value) -> Result<()> {
    let files = value
        .get("files")
        .and_then(|f| f.as_array())
        .cloned()
        .unwrap_or_default();

    for file in &files {
        let name = file.get("file").and_then(|f| f.as_str()).unwrap_or("?");
        let outcast = file.get("outcast").and_then(|o| o.as_str()).unwrap_or("?");
        println!("{name}: {outcast}");
    }

    Ok(())
}

/// Generic key-value output for other result types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    if let Some(object) = value.as_object() {
        for (key, field) in object {
            match field {
                serde_json::Value::String(text) => println!("{key}: {text}"),
                other => println!("{key}: {other}"),
            }
        }
    } else {
        println!("{value}");
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HypernymArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
