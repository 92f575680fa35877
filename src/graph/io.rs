//! Loading digraphs from the whitespace-separated text format.
//!
//! The format is: vertex count, edge count, then one `from to` pair per edge.
//! Token boundaries are any whitespace, so one pair per line and multiple
//! pairs per line both parse.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{HypernymError, Result};
use crate::graph::digraph::Digraph;

/// Read a digraph from any buffered reader.
pub fn read_digraph<R: BufRead>(reader: R) -> Result<Digraph> {
    let mut values: Vec<usize> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token.parse::<usize>().map_err(|_| {
                HypernymError::format(format!(
                    "line {}: expected a non-negative integer, got {:?}",
                    index + 1,
                    token
                ))
            })?;
            values.push(value);
        }
    }

    let mut iter = values.into_iter();
    let vertex_count = iter
        .next()
        .ok_or_else(|| HypernymError::format("missing vertex count"))?;
    let edge_count = iter
        .next()
        .ok_or_else(|| HypernymError::format("missing edge count"))?;

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let from = iter.next().ok_or_else(|| {
            HypernymError::format(format!(
                "unexpected end of input: expected {edge_count} edges"
            ))
        })?;
        let to = iter.next().ok_or_else(|| {
            HypernymError::format(format!(
                "unexpected end of input: expected {edge_count} edges"
            ))
        })?;
        edges.push((from, to));
    }

    if iter.next().is_some() {
        return Err(HypernymError::format("trailing data after edge list"));
    }

    Digraph::from_edges(vertex_count, &edges)
}

/// Load a digraph from a file.
pub fn load_digraph<P: AsRef<Path>>(path: P) -> Result<Digraph> {
    let file = File::open(path.as_ref())?;
    let graph = read_digraph(BufReader::new(file))?;

    info!(
        "loaded digraph from {}: {} vertices, {} edges",
        path.as_ref().display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
