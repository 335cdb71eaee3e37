//! Structural diagnostics for an inspector view.

use std::collections::HashSet;

use serde::Serialize;
use tracing::instrument;

use crate::adjacency::Adjacency;
use crate::cycle::has_cycle;
use crate::models::SupplyChainGraph;
use crate::orphans::find_orphaned_nodes;

/// Summary of a graph snapshot's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub is_acyclic: bool,
    /// Nodes with no edges at all.
    pub orphaned_nodes: Vec<String>,
    /// Edge endpoints that name no node, first-seen order, deduplicated.
    pub dangling_references: Vec<String>,
    /// Connected nodes with no incoming edges (raw material entry points).
    pub source_nodes: Vec<String>,
    /// Connected nodes with no outgoing edges (end customers, recyclers).
    pub sink_nodes: Vec<String>,
}

impl TopologyReport {
    #[instrument(skip_all, fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
    pub fn build(graph: &SupplyChainGraph) -> Self {
        let known: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut has_incoming: HashSet<&str> = HashSet::new();
        let mut has_outgoing: HashSet<&str> = HashSet::new();
        let mut seen_dangling: HashSet<&str> = HashSet::new();
        let mut dangling_references = Vec::new();

        for edge in &graph.edges {
            has_outgoing.insert(edge.source.as_str());
            has_incoming.insert(edge.target.as_str());
            for endpoint in [edge.source.as_str(), edge.target.as_str()] {
                if !known.contains(endpoint) && seen_dangling.insert(endpoint) {
                    dangling_references.push(endpoint.to_owned());
                }
            }
        }

        let connected = |id: &str| has_incoming.contains(id) || has_outgoing.contains(id);
        let source_nodes = graph
            .nodes
            .iter()
            .filter(|n| connected(n.id.as_str()) && !has_incoming.contains(n.id.as_str()))
            .map(|n| n.id.clone())
            .collect();
        let sink_nodes = graph
            .nodes
            .iter()
            .filter(|n| connected(n.id.as_str()) && !has_outgoing.contains(n.id.as_str()))
            .map(|n| n.id.clone())
            .collect();

        let adjacency = Adjacency::from_graph(&graph.nodes, &graph.edges);

        Self {
            node_count: graph.nodes.len(),
            edge_count: graph.edges.len(),
            is_acyclic: !has_cycle(&adjacency),
            orphaned_nodes: find_orphaned_nodes(&graph.nodes, &graph.edges),
            dangling_references,
            source_nodes,
            sink_nodes,
        }
    }
}
