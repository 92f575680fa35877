//! The public shortest-ancestral-path query facade.

use std::cell::RefCell;

use log::debug;

use crate::error::{HypernymError, Result};
use crate::graph::digraph::Digraph;
use crate::sap::bfs::{Ancestry, Color, DualSourceBfs};
use crate::sap::cache::{DEFAULT_CACHE_CAPACITY, PairCache, QueryKey};

/// A full shortest ancestral path: both legs joined at the ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestralPath {
    /// The common ancestor
    pub ancestor: usize,
    /// Combined length of the two legs
    pub length: usize,
    /// The walk `v -> ... -> ancestor -> ... -> w`; edges on the second leg
    /// point backwards (from `w` toward the ancestor)
    pub vertices: Vec<usize>,
}

/// Counters describing the work a service instance has done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SapStats {
    /// Full BFS traversals run
    pub traversals: u64,
    /// Queries answered from the result cache
    pub cache_hits: u64,
    /// Queries that required a computation
    pub cache_misses: u64,
    /// Results currently cached
    pub cache_entries: usize,
}

/// Shortest-ancestral-path queries over an immutable digraph.
///
/// The service owns the graph, one traversal engine, and one result cache.
/// Queries go through the cache first; on a miss, a single combined
/// dual-source traversal computes the answer, for set queries as much as for
/// scalar pairs.
///
/// The service is single-threaded: the engine and cache sit behind
/// `RefCell`, so queries take `&self` but the type is deliberately not
/// `Sync`. Concurrent consumers should hold one service per thread over
/// clones of the graph.
#[derive(Debug)]
pub struct Sap {
    graph: Digraph,
    engine: RefCell<DualSourceBfs>,
    cache: RefCell<PairCache>,
}

impl Sap {
    /// Create a service over `graph` with the default cache capacity.
    pub fn new(graph: Digraph) -> Self {
        Sap::with_cache_capacity(graph, DEFAULT_CACHE_CAPACITY)
    }

    /// Create a service with an explicit result-cache capacity.
    pub fn with_cache_capacity(graph: Digraph, capacity: usize) -> Self {
        debug!(
            "sap service over {} vertices, {} edges, cache capacity {}",
            graph.vertex_count(),
            graph.edge_count(),
            capacity
        );
        Sap {
            graph,
            engine: RefCell::new(DualSourceBfs::new()),
            cache: RefCell::new(PairCache::new(capacity)),
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of the shortest ancestral path between `v` and `w`.
    ///
    /// `None` means no vertex is reachable from both.
    pub fn length(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.query_pair(v, w)?.map(|found| found.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path.
    pub fn ancestor(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.query_pair(v, w)?.map(|found| found.ancestor))
    }

    /// Length of the shortest ancestral path between any vertex in `a` and
    /// any vertex in `b`, computed in one combined traversal.
    pub fn set_length(&self, a: &[usize], b: &[usize]) -> Result<Option<usize>> {
        Ok(self.query_sets(a, b)?.map(|found| found.length))
    }

    /// A common ancestor over two vertex sets, on a shortest ancestral path.
    pub fn set_ancestor(&self, a: &[usize], b: &[usize]) -> Result<Option<usize>> {
        Ok(self.query_sets(a, b)?.map(|found| found.ancestor))
    }

    /// The full shortest ancestral path between `v` and `w`.
    ///
    /// Always traverses: the result cache stores summaries, not predecessor
    /// state, so path queries are not memoized.
    pub fn path(&self, v: usize, w: usize) -> Result<Option<AncestralPath>> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        let mut engine = self.engine.borrow_mut();
        let Some(found) = engine.run(&self.graph, &[v], &[w])? else {
            return Ok(None);
        };

        if found.length == 0 {
            return Ok(Some(AncestralPath {
                ancestor: found.ancestor,
                length: 0,
                vertices: vec![found.ancestor],
            }));
        }

        let mut vertices = engine.path_to(found.ancestor, Color::A);
        let back = engine.path_to(found.ancestor, Color::B);
        vertices.extend(back.into_iter().rev().skip(1));

        Ok(Some(AncestralPath {
            ancestor: found.ancestor,
            length: found.length,
            vertices,
        }))
    }

    /// Traversal and cache counters.
    pub fn stats(&self) -> SapStats {
        let engine = self.engine.borrow();
        let cache = self.cache.borrow();
        SapStats {
            traversals: engine.traversals(),
            cache_hits: cache.hits(),
            cache_misses: cache.misses(),
            cache_entries: cache.len(),
        }
    }

    fn query_pair(&self, v: usize, w: usize) -> Result<Option<Ancestry>> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        self.query_cached(QueryKey::pair(v, w), &[v], &[w])
    }

    fn query_sets(&self, a: &[usize], b: &[usize]) -> Result<Option<Ancestry>> {
        self.check_set(a, "first")?;
        self.check_set(b, "second")?;
        self.query_cached(QueryKey::sets(a, b), a, b)
    }

    fn query_cached(
        &self,
        key: QueryKey,
        a: &[usize],
        b: &[usize],
    ) -> Result<Option<Ancestry>> {
        if let Some(cached) = self.cache.borrow_mut().lookup(&key) {
            return Ok(cached);
        }

        let result = self.engine.borrow_mut().run(&self.graph, a, b)?;
        self.cache.borrow_mut().store(key, result);
        Ok(result)
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.graph.vertex_count() {
            return Err(HypernymError::out_of_range(format!(
                "vertex {} is not in [0, {})",
                v,
                self.graph.vertex_count()
            )));
        }
        Ok(())
    }

    fn check_set(&self, vertices: &[usize], side: &str) -> Result<()> {
        if vertices.is_empty() {
            return Err(HypernymError::out_of_range(format!(
                "{side} vertex set is empty"
            )));
        }
        for &v in vertices {
            self.check_vertex(v)?;
        }
        Ok(())
    }
}
