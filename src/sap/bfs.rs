//! Two-color breadth-first search over a shared frontier queue.
//!
//! The engine explores the graph from two source sets at once. Every queue
//! entry is a [`ColoredVertex`]: the same vertex can be visited once per
//! color, and the two explorations interleave level by level in one FIFO
//! queue. Whenever a newly visited vertex turns out to be already visited in
//! the opposite color, the combined distance through it is a candidate
//! answer; the smallest candidate seen when the queue drains is the shortest
//! ancestral path.
//!
//! Interleaving matters: expanding both colors through one queue finds the
//! minimal combined distance without computing full single-source distance
//! tables, and the search terminates when the frontier is exhausted, with no
//! global bound known in advance.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::error::{HypernymError, Result};
use crate::graph::digraph::Digraph;

/// Which of the two source sets a visitation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    A,
    B,
}

impl Color {
    /// The other color.
    pub fn opposite(self) -> Color {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }
}

/// A vertex tagged with the source set it was reached from.
///
/// Visitation state is keyed on this pair: marking `(v, A)` visited says
/// nothing about `(v, B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredVertex {
    pub vertex: usize,
    pub color: Color,
}

/// A common ancestor together with the combined distance to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ancestry {
    /// The meeting vertex
    pub ancestor: usize,
    /// `dist(sources_a -> ancestor) + dist(sources_b -> ancestor)`
    pub length: usize,
}

/// Visitation record for one colored vertex.
#[derive(Debug, Clone, Copy)]
struct Visit {
    /// BFS distance from the nearest source of this color
    dist: usize,
    /// The vertex this one was discovered from; `None` for sources
    pred: Option<usize>,
}

/// The dual-source traversal engine.
///
/// Working state lives in per-colored-vertex maps plus an explicit `touched`
/// list. A run starts by removing exactly the entries the previous run
/// dirtied, so repeated queries on a large graph pay for the vertices they
/// actually visit, not for full-graph tables.
///
/// The engine is single-threaded and exclusively owned; it never mutates the
/// graph. Concurrent consumers should hold one engine per thread over a
/// shared immutable graph.
#[derive(Debug, Default)]
pub struct DualSourceBfs {
    visits: AHashMap<ColoredVertex, Visit>,
    touched: Vec<ColoredVertex>,
    queue: VecDeque<ColoredVertex>,
    traversals: u64,
}

impl DualSourceBfs {
    /// Create an engine with empty working state.
    pub fn new() -> Self {
        DualSourceBfs::default()
    }

    /// The number of full traversals run so far.
    ///
    /// Fast-path answers (overlapping source sets) do not count: no state is
    /// touched for them. Callers use this to verify that cached queries skip
    /// the traversal entirely.
    pub fn traversals(&self) -> u64 {
        self.traversals
    }

    /// Compute the best common ancestor of `sources_a` and `sources_b`.
    ///
    /// Both sets must be non-empty and contain only vertices in
    /// `[0, vertex_count)`; duplicates are idempotent. Returns `None` when no
    /// vertex is reachable from both sets.
    pub fn run(
        &mut self,
        graph: &Digraph,
        sources_a: &[usize],
        sources_b: &[usize],
    ) -> Result<Option<Ancestry>> {
        check_sources(graph, sources_a, "first")?;
        check_sources(graph, sources_b, "second")?;

        // A vertex in both sets is its own ancestor at distance zero; no
        // traversal state is touched for this answer.
        let set_a: AHashSet<usize> = sources_a.iter().copied().collect();
        if let Some(&shared) = sources_b.iter().find(|&&v| set_a.contains(&v)) {
            return Ok(Some(Ancestry {
                ancestor: shared,
                length: 0,
            }));
        }

        self.reset();
        self.traversals += 1;

        for &v in sources_a {
            self.mark(
                ColoredVertex {
                    vertex: v,
                    color: Color::A,
                },
                Visit {
                    dist: 0,
                    pred: None,
                },
            );
        }
        for &v in sources_b {
            self.mark(
                ColoredVertex {
                    vertex: v,
                    color: Color::B,
                },
                Visit {
                    dist: 0,
                    pred: None,
                },
            );
        }

        let mut best: Option<Ancestry> = None;

        while let Some(current) = self.queue.pop_front() {
            let dist = self.visits[&current].dist;

            for &next in graph.adj(current.vertex) {
                let colored = ColoredVertex {
                    vertex: next,
                    color: current.color,
                };
                if self.visits.contains_key(&colored) {
                    continue;
                }

                self.mark(
                    colored,
                    Visit {
                        dist: dist + 1,
                        pred: Some(current.vertex),
                    },
                );

                // The moment a vertex is visited in one color, check whether
                // the other exploration already reached it. Strict
                // improvement only: the first candidate at a given combined
                // distance wins ties, consistent with BFS level order.
                let opposite = ColoredVertex {
                    vertex: next,
                    color: current.color.opposite(),
                };
                if let Some(met) = self.visits.get(&opposite) {
                    let candidate = met.dist + dist + 1;
                    if best.is_none_or(|b| candidate < b.length) {
                        best = Some(Ancestry {
                            ancestor: next,
                            length: candidate,
                        });
                    }
                }
            }
        }

        Ok(best)
    }

    /// Rebuild the path from a source of `color` to `vertex`, using the
    /// predecessor entries of the most recent run.
    ///
    /// Returns the vertex sequence source-first. The result is only
    /// meaningful for vertices the last run visited in that color, and is
    /// invalidated by the next run.
    pub fn path_to(&self, vertex: usize, color: Color) -> Vec<usize> {
        let mut path = vec![vertex];
        let mut current = ColoredVertex { vertex, color };

        while let Some(visit) = self.visits.get(&current) {
            match visit.pred {
                Some(pred) => {
                    path.push(pred);
                    current = ColoredVertex {
                        vertex: pred,
                        color,
                    };
                }
                None => break,
            }
        }

        path.reverse();
        path
    }

    /// Remove exactly the entries dirtied by the previous run.
    fn reset(&mut self) {
        for colored in self.touched.drain(..) {
            self.visits.remove(&colored);
        }
        self.queue.clear();
    }

    /// Mark a colored vertex visited and enqueue it. A no-op when it is
    /// already visited, which makes duplicate source ids idempotent.
    fn mark(&mut self, colored: ColoredVertex, visit: Visit) {
        if self.visits.contains_key(&colored) {
            return;
        }
        self.visits.insert(colored, visit);
        self.touched.push(colored);
        self.queue.push_back(colored);
    }
}

fn check_sources(graph: &Digraph, sources: &[usize], side: &str) -> Result<()> {
    if sources.is_empty() {
        return Err(HypernymError::out_of_range(format!(
            "{side} source set is empty"
        )));
    }
    for &v in sources {
        if v >= graph.vertex_count() {
            return Err(HypernymError::out_of_range(format!(
                "vertex {} is not in [0, {})",
                v,
                graph.vertex_count()
            )));
        }
    }
    Ok(())
}
