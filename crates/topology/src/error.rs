//! Topology error types.

use thiserror::Error;

/// Errors produced by strict graph validation.
///
/// The query operations (cycle pre-check, orphan detection, path search)
/// never fail; only [`crate::validate_dag`] reports these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// Two or more nodes share the same ID.
    #[error("duplicate node ID: '{0}'")]
    DuplicateNodeId(String),

    /// An edge references a node ID that doesn't exist in the graph.
    #[error("edge references unknown node '{node_id}' ({side} side)")]
    UnknownNodeReference {
        node_id: String,
        side: &'static str,
    },

    /// Nodes with no incoming or outgoing edges, when orphans are rejected.
    #[error("graph contains orphaned nodes: {0:?}")]
    OrphanedNodes(Vec<String>),

    /// Topological sort could not place these nodes: they sit on a cycle
    /// or downstream of one.
    #[error("graph contains a cycle; unsorted nodes: {nodes:?}")]
    CycleDetected { nodes: Vec<String> },
}
