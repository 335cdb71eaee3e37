//! Cycle pre-check — ask this before committing a new edge.
//!
//! The candidate edge is overlaid on the current snapshot and the whole graph
//! is searched for a back edge with an iterative depth-first traversal.  No
//! recursion is involved, so chain length is bounded by heap, not stack.

use tracing::{debug, instrument, trace};

use crate::adjacency::Adjacency;
use crate::models::{Edge, Node};

/// Would inserting `source_id → target_id` leave the graph with a cycle?
///
/// `nodes` only seed adjacency entries.  Ids that appear nowhere in the
/// snapshot are treated as sinks, so this never fails.  A self-loop is
/// always a cycle and is answered without traversal.
///
/// Every node is used as a traversal root, so a cycle already present in the
/// snapshot also yields `true`.
#[instrument(skip(nodes, edges), fields(nodes = nodes.len(), edges = edges.len()))]
pub fn would_create_cycle(nodes: &[Node], edges: &[Edge], source_id: &str, target_id: &str) -> bool {
    if source_id == target_id {
        debug!("self-loop rejected without traversal");
        return true;
    }

    let mut adjacency = Adjacency::from_graph(nodes, edges);
    adjacency.add_edge(source_id, target_id);

    let cyclic = has_cycle(&adjacency);
    debug!(cyclic, "cycle pre-check finished");
    cyclic
}

/// True when any traversal root reaches a node still on its own DFS path.
pub(crate) fn has_cycle(adjacency: &Adjacency<'_>) -> bool {
    let mut visited = vec![false; adjacency.len()];
    let mut on_stack = vec![false; adjacency.len()];

    for root in 0..adjacency.len() {
        if !visited[root] && finds_back_edge(adjacency, root, &mut visited, &mut on_stack) {
            return true;
        }
    }
    false
}

/// Depth-first walk from `root` using an explicit frame stack.
///
/// Each frame is `(node, index of the next successor to try)`.  `on_stack`
/// mirrors the frames currently on the stack; `visited` persists across roots
/// so every node is expanded at most once per call.
fn finds_back_edge(
    adjacency: &Adjacency<'_>,
    root: usize,
    visited: &mut [bool],
    on_stack: &mut [bool],
) -> bool {
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    visited[root] = true;
    on_stack[root] = true;

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        match adjacency.successors(node).get(next) {
            Some(&child) => {
                frame.1 += 1;
                if on_stack[child] {
                    trace!(
                        from = adjacency.id(node),
                        to = adjacency.id(child),
                        "back edge found"
                    );
                    return true;
                }
                if !visited[child] {
                    visited[child] = true;
                    on_stack[child] = true;
                    stack.push((child, 0));
                }
            }
            None => {
                on_stack[node] = false;
                stack.pop();
            }
        }
    }
    false
}
