//! Shortest ancestral path queries over a directed graph.
//!
//! Given two vertices (or two vertex sets), a shortest ancestral path runs
//! from each side along directed edges to a common ancestor, minimizing the
//! combined length of the two paths. The [`bfs`] module holds the traversal
//! engine, [`cache`] the per-query result cache, and [`service`] the public
//! facade composing the two over a [`crate::graph::digraph::Digraph`].

pub mod bfs;
pub mod cache;
pub mod service;
