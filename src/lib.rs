//! # Hypernym
//!
//! A shortest ancestral path engine for WordNet-style hypernym graphs.
//!
//! ## Features
//!
//! - Immutable adjacency-list digraphs with construction-time shape checks
//! - Dual-source, two-color BFS over a single shared frontier queue
//! - Bounded LRU memoization of query results
//! - WordNet noun dictionary with semantic distance and outcast detection

pub mod cli;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod sap;
pub mod wordnet;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
