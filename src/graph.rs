//! Directed graph representation and construction-time helpers.
//!
//! The [`digraph`] module holds the immutable adjacency-list digraph the SAP
//! engine traverses. The [`validate`] and [`io`] modules are construction-time
//! collaborators: shape checks (acyclicity, single root) and text-format
//! loading happen once while a graph is built, never per query.

pub mod digraph;
pub mod io;
pub mod validate;
