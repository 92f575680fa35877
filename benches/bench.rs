//! Criterion benchmarks for the hypernym SAP engine.
//!
//! Covers the traversal engine on layered random DAGs, the effect of result
//! caching on repeated query storms, and set-valued queries.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use hypernym::graph::digraph::Digraph;
use hypernym::sap::service::Sap;

/// A random DAG with edges pointing from higher indices to lower ones.
fn random_dag(vertices: usize, edges: usize, seed: u64) -> Digraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edge_list = Vec::with_capacity(edges);

    for _ in 0..edges {
        let from = rng.random_range(1..vertices);
        let to = rng.random_range(0..from);
        edge_list.push((from, to));
    }

    Digraph::from_edges(vertices, &edge_list).unwrap()
}

fn bench_graph_construction(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let edges: Vec<(usize, usize)> = (0..20_000)
        .map(|_| {
            let from = rng.random_range(1..5_000);
            (from, rng.random_range(0..from))
        })
        .collect();

    c.bench_function("digraph_from_edges_5k_20k", |b| {
        b.iter(|| Digraph::from_edges(5_000, black_box(&edges)).unwrap())
    });
}

fn bench_uncached_queries(c: &mut Criterion) {
    let graph = random_dag(5_000, 20_000, 2);
    // Capacity 1 evicts every previous result, so every query traverses
    let sap = Sap::with_cache_capacity(graph, 1);
    let mut rng = StdRng::seed_from_u64(3);

    c.bench_function("sap_length_uncached_5k", |b| {
        b.iter(|| {
            let v = rng.random_range(0..5_000);
            let w = rng.random_range(0..5_000);
            black_box(sap.length(v, w).unwrap())
        })
    });
}

fn bench_cached_query_storm(c: &mut Criterion) {
    let graph = random_dag(5_000, 20_000, 4);
    let sap = Sap::new(graph);

    // A small working set of pairs, revisited constantly
    let mut rng = StdRng::seed_from_u64(5);
    let pairs: Vec<(usize, usize)> = (0..64)
        .map(|_| (rng.random_range(0..5_000), rng.random_range(0..5_000)))
        .collect();
    let mut index = 0usize;

    c.bench_function("sap_length_cached_storm", |b| {
        b.iter(|| {
            let (v, w) = pairs[index % pairs.len()];
            index += 1;
            black_box(sap.length(v, w).unwrap())
        })
    });
}

fn bench_set_queries(c: &mut Criterion) {
    let graph = random_dag(5_000, 20_000, 6);
    // Capacity 1 keeps the set traversal honest instead of measuring cache hits
    let sap = Sap::with_cache_capacity(graph, 1);
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("sap_set_length_8x8", |b| {
        b.iter(|| {
            let a: Vec<usize> = (0..8).map(|_| rng.random_range(0..5_000)).collect();
            let b_set: Vec<usize> = (0..8).map(|_| rng.random_range(0..5_000)).collect();
            black_box(sap.set_length(&a, &b_set).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_graph_construction,
    bench_uncached_queries,
    bench_cached_query_storm,
    bench_set_queries
);
criterion_main!(benches);
