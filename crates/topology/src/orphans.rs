//! Orphan detection: nodes that no edge touches.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::models::{Edge, Node};

/// Ids of every node that is neither the source nor the target of any edge,
/// in the order they appear in `nodes`.
#[instrument(skip(nodes, edges), fields(nodes = nodes.len(), edges = edges.len()))]
pub fn find_orphaned_nodes(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    let connected: HashSet<&str> = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();

    let orphans: Vec<String> = nodes
        .iter()
        .filter(|n| !connected.contains(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect();

    debug!(count = orphans.len(), "orphan scan finished");
    orphans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_degree_zero_nodes() {
        let nodes = vec![Node::new("A"), Node::new("B"), Node::new("D")];
        let edges = vec![Edge::new("A", "B")];
        assert_eq!(find_orphaned_nodes(&nodes, &edges), vec!["D"]);
    }

    #[test]
    fn preserves_input_order() {
        let nodes = vec![Node::new("z"), Node::new("hub"), Node::new("a"), Node::new("m")];
        let edges = vec![Edge::new("hub", "elsewhere")];
        assert_eq!(find_orphaned_nodes(&nodes, &edges), vec!["z", "a", "m"]);
    }

    #[test]
    fn target_only_nodes_are_connected() {
        let nodes = vec![Node::new("sink")];
        let edges = vec![Edge::new("ghost", "sink")];
        assert!(find_orphaned_nodes(&nodes, &edges).is_empty());
    }

    #[test]
    fn empty_graph_has_no_orphans() {
        assert!(find_orphaned_nodes(&[], &[]).is_empty());
    }
}
