//! Construction-time shape checks for hypernym graphs.
//!
//! The WordNet use case requires the hypernym relation to form a rooted DAG:
//! acyclic, with exactly one vertex of out-degree zero. These checks run once
//! while a graph is being built; the SAP engine itself never performs them.

use log::debug;

use crate::error::{HypernymError, Result};
use crate::graph::digraph::Digraph;

/// All vertices with out-degree zero.
pub fn roots(graph: &Digraph) -> Vec<usize> {
    (0..graph.vertex_count())
        .filter(|&v| graph.adj(v).is_empty())
        .collect()
}

/// Find one directed cycle, if any.
///
/// Returns the cycle as a vertex sequence whose first and last elements are
/// equal, e.g. `[1, 4, 2, 1]`. Runs an iterative DFS so deep graphs cannot
/// overflow the call stack.
pub fn find_cycle(graph: &Digraph) -> Option<Vec<usize>> {
    const UNSEEN: u8 = 0;
    const ACTIVE: u8 = 1;
    const DONE: u8 = 2;

    let vertex_count = graph.vertex_count();
    let mut state = vec![UNSEEN; vertex_count];
    // Position of each ACTIVE vertex on the current DFS path
    let mut path_index = vec![0usize; vertex_count];
    let mut path: Vec<usize> = Vec::new();
    // (vertex, next successor offset to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..vertex_count {
        if state[start] != UNSEEN {
            continue;
        }

        state[start] = ACTIVE;
        path_index[start] = path.len();
        path.push(start);
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (v, offset) = *frame;
            let successors = graph.adj(v);

            if offset < successors.len() {
                frame.1 += 1;
                let w = successors[offset];

                match state[w] {
                    ACTIVE => {
                        let mut cycle = path[path_index[w]..].to_vec();
                        cycle.push(w);
                        return Some(cycle);
                    }
                    UNSEEN => {
                        state[w] = ACTIVE;
                        path_index[w] = path.len();
                        path.push(w);
                        stack.push((w, 0));
                    }
                    _ => {}
                }
            } else {
                state[v] = DONE;
                stack.pop();
                path.pop();
            }
        }
    }

    None
}

/// Check that `graph` is a rooted DAG and return its root.
///
/// Fails with `GraphShape` if the graph has a directed cycle or does not have
/// exactly one vertex of out-degree zero.
pub fn ensure_rooted_dag(graph: &Digraph) -> Result<usize> {
    let root_list = roots(graph);
    if root_list.len() != 1 {
        return Err(HypernymError::graph_shape(format!(
            "expected exactly one root, found {}",
            root_list.len()
        )));
    }

    if let Some(cycle) = find_cycle(graph) {
        return Err(HypernymError::graph_shape(format!(
            "directed cycle detected: {cycle:?}"
        )));
    }

    debug!(
        "graph is a rooted DAG: {} vertices, root {}",
        graph.vertex_count(),
        root_list[0]
    );
    Ok(root_list[0])
}
