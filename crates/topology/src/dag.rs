//! Strict DAG validation — run this before persisting a whole graph.
//!
//! Rules enforced:
//! 1. Node IDs must be unique within the graph.
//! 2. Edge endpoints must reference known nodes (unless relaxed).
//! 3. No orphaned nodes (only when requested).
//! 4. The directed graph must be acyclic (topological sort must succeed).
//!
//! Returns a topologically-sorted list of node IDs on success.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, instrument, warn};

use crate::adjacency::Adjacency;
use crate::models::SupplyChainGraph;
use crate::orphans::find_orphaned_nodes;
use crate::TopologyError;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which structural rules [`validate_dag`] enforces beyond acyclicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Fail when an edge endpoint names no node.  When relaxed, dangling
    /// endpoints take part in the sort like any other node.
    pub reject_unknown_references: bool,
    /// Fail when a node has no incoming or outgoing edges.
    pub reject_orphans: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_unknown_references: true,
            reject_orphans: false,
        }
    }
}

// ---------------------------------------------------------------------------
// validate_dag
// ---------------------------------------------------------------------------

/// Validate the graph and return its ids in topological order.
///
/// Ties are broken by first-seen order (nodes, then edge endpoints), so the
/// same snapshot always sorts the same way.
///
/// # Errors
/// - [`TopologyError::DuplicateNodeId`] if two nodes share an ID.
/// - [`TopologyError::UnknownNodeReference`] if an edge references a missing
///   node and `config.reject_unknown_references` is set.
/// - [`TopologyError::OrphanedNodes`] if `config.reject_orphans` is set and
///   some node has no edges.
/// - [`TopologyError::CycleDetected`] if the graph is not acyclic.
#[instrument(skip_all, fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn validate_dag(
    graph: &SupplyChainGraph,
    config: &ValidationConfig,
) -> Result<Vec<String>, TopologyError> {
    // -----------------------------------------------------------------------
    // 1. Ensure node IDs are unique
    // -----------------------------------------------------------------------
    let mut node_set: HashSet<&str> = HashSet::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        if !node_set.insert(node.id.as_str()) {
            return Err(TopologyError::DuplicateNodeId(node.id.clone()));
        }
    }

    // -----------------------------------------------------------------------
    // 2. Validate edge endpoints
    // -----------------------------------------------------------------------
    if config.reject_unknown_references {
        for edge in &graph.edges {
            if !node_set.contains(edge.source.as_str()) {
                return Err(TopologyError::UnknownNodeReference {
                    node_id: edge.source.clone(),
                    side: "source",
                });
            }
            if !node_set.contains(edge.target.as_str()) {
                return Err(TopologyError::UnknownNodeReference {
                    node_id: edge.target.clone(),
                    side: "target",
                });
            }
        }
    }

    // -----------------------------------------------------------------------
    // 3. Orphans
    // -----------------------------------------------------------------------
    if config.reject_orphans {
        let orphans = find_orphaned_nodes(&graph.nodes, &graph.edges);
        if !orphans.is_empty() {
            return Err(TopologyError::OrphanedNodes(orphans));
        }
    }

    // -----------------------------------------------------------------------
    // 4. Topological sort (Kahn's algorithm)
    // -----------------------------------------------------------------------
    let adjacency = Adjacency::from_graph(&graph.nodes, &graph.edges);
    let mut in_degree = adjacency.in_degrees();

    // Seed the queue with nodes that have no incoming edges.
    let mut queue: VecDeque<usize> = (0..adjacency.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut sorted: Vec<String> = Vec::with_capacity(adjacency.len());

    while let Some(node) = queue.pop_front() {
        sorted.push(adjacency.id(node).to_owned());

        for &next in adjacency.successors(node) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    // If we didn't place every node the graph contains a cycle.
    if sorted.len() != adjacency.len() {
        let nodes: Vec<String> = (0..adjacency.len())
            .filter(|&i| in_degree[i] > 0)
            .map(|i| adjacency.id(i).to_owned())
            .collect();
        warn!(unsorted = nodes.len(), "cycle detected during validation");
        return Err(TopologyError::CycleDetected { nodes });
    }

    debug!(order = ?sorted, "graph validated");
    Ok(sorted)
}
