//! Scenario tests that drive the engine the way the graph editor does:
//! check a candidate edge, commit it, then inspect the result.

use crate::{
    find_orphaned_nodes, find_shortest_path, get_edges_in_path, get_nodes_in_path, validate_dag,
    would_create_cycle, Edge, Node, SupplyChainGraph, TopologyReport, ValidationConfig,
};

/// supplier → manufacturer → distributor → customer → recycler, plus a
/// second supplier feeding the manufacturer and an unassigned auditor.
fn sample_chain() -> SupplyChainGraph {
    let nodes = vec![
        Node::new("sup-1").with_role("supplier"),
        Node::new("sup-2").with_role("supplier"),
        Node::new("mfg").with_role("manufacturer"),
        Node::new("dist").with_role("distributor"),
        Node::new("cust").with_role("customer"),
        Node::new("rec").with_role("recycler"),
        Node::new("audit").with_role("admin"),
    ];
    let edges = [
        ("sup-1", "mfg"),
        ("sup-2", "mfg"),
        ("mfg", "dist"),
        ("dist", "cust"),
        ("cust", "rec"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (s, t))| {
        let mut edge = Edge::new(*s, *t);
        edge.id = Some(format!("e{i}"));
        edge
    })
    .collect();
    SupplyChainGraph::new(nodes, edges)
}

/// Apply an edge only when the pre-check allows it, as the editor does.
fn try_connect(graph: &mut SupplyChainGraph, source: &str, target: &str) -> bool {
    if would_create_cycle(&graph.nodes, &graph.edges, source, target) {
        return false;
    }
    graph.edges.push(Edge::new(source, target));
    true
}

// ============================================================
// Editing session
// ============================================================

#[test]
fn editor_blocks_recycling_loop_back_to_supplier() {
    let mut graph = sample_chain();
    let before = graph.clone();

    // Recycled material flowing back to the supplier closes a loop.
    assert!(!try_connect(&mut graph, "rec", "sup-1"));
    assert_eq!(graph, before, "rejected edge must not be applied");

    // Supplier shipping straight to the distributor is a shortcut.
    assert!(try_connect(&mut graph, "sup-2", "dist"));
    assert!(validate_dag(&graph, &ValidationConfig::default()).is_ok());
}

#[test]
fn every_accepted_edge_keeps_the_graph_acyclic() {
    let mut graph = sample_chain();
    let ids: Vec<String> = graph.nodes.iter().map(|n| n.id.clone()).collect();

    for source in &ids {
        for target in &ids {
            try_connect(&mut graph, source, target);
        }
    }

    assert!(TopologyReport::build(&graph).is_acyclic);
    assert!(validate_dag(&graph, &ValidationConfig::default()).is_ok());
}

#[test]
fn auditor_is_the_only_orphan_until_connected() {
    let mut graph = sample_chain();
    assert_eq!(find_orphaned_nodes(&graph.nodes, &graph.edges), vec!["audit"]);

    assert!(try_connect(&mut graph, "audit", "mfg"));
    assert!(find_orphaned_nodes(&graph.nodes, &graph.edges).is_empty());
}

// ============================================================
// Path tracing
// ============================================================

#[test]
fn traces_material_from_supplier_to_recycler() {
    let graph = sample_chain();
    let path = find_shortest_path(&graph.edges, "sup-2", "rec").expect("path should exist");
    assert_eq!(path, vec!["sup-2", "mfg", "dist", "cust", "rec"]);

    let lookup = graph.nodes_by_id();
    let roles: Vec<&str> = get_nodes_in_path(&lookup, &path)
        .iter()
        .filter_map(|n| n.role.as_deref())
        .collect();
    assert_eq!(roles, vec!["supplier", "manufacturer", "distributor", "customer", "recycler"]);

    let edge_ids: Vec<&str> = get_edges_in_path(&graph.edges, &path)
        .iter()
        .filter_map(|e| e.id.as_deref())
        .collect();
    assert_eq!(edge_ids, vec!["e1", "e2", "e3", "e4"]);
}

#[test]
fn suppliers_are_not_reachable_from_each_other() {
    let graph = sample_chain();
    assert_eq!(find_shortest_path(&graph.edges, "sup-1", "sup-2"), None);
    assert_eq!(find_shortest_path(&graph.edges, "audit", "mfg"), None);
}

#[test]
fn repeated_queries_give_identical_answers() {
    let graph = sample_chain();
    let first = (
        would_create_cycle(&graph.nodes, &graph.edges, "cust", "mfg"),
        find_orphaned_nodes(&graph.nodes, &graph.edges),
        find_shortest_path(&graph.edges, "sup-1", "cust"),
        TopologyReport::build(&graph),
    );
    for _ in 0..3 {
        let again = (
            would_create_cycle(&graph.nodes, &graph.edges, "cust", "mfg"),
            find_orphaned_nodes(&graph.nodes, &graph.edges),
            find_shortest_path(&graph.edges, "sup-1", "cust"),
            TopologyReport::build(&graph),
        );
        assert_eq!(again, first);
    }
    assert_eq!(graph, sample_chain(), "queries must not mutate the snapshot");
}
