//! Graph snapshot models for the supply-chain topology engine.
//!
//! These types mirror the JSON the graph editor sends: nodes are
//! organisations/roles, edges are material or product flows.  The engine
//! only interprets `Node::id`, `Edge::source` and `Edge::target`; every other
//! field is opaque payload carried through for the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AssignedUser
// ---------------------------------------------------------------------------

/// User reference attached to a node.  The backend emits either a numeric
/// primary key or a string identifier.  Numbers keep JSON semantics, so
/// unsigned keys above `i64::MAX` and fractional values still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignedUser {
    Number(serde_json::Number),
    Text(String),
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A participant in the supply chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier within the graph (referenced by edges).
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<AssignedUser>,
}

impl Node {
    /// Bare node with no payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: None,
            status: None,
            assigned_user_id: None,
        }
    }

    /// Attach a role label, e.g. `"supplier"` or `"recycler"`.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// Directed flow from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: None,
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    /// True when this edge runs exactly `source → target`.
    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }
}

// ---------------------------------------------------------------------------
// SupplyChainGraph
// ---------------------------------------------------------------------------

/// A complete `(nodes, edges)` snapshot as loaded from the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyChainGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl SupplyChainGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Build the id → node lookup used by path materialisation.
    ///
    /// When ids repeat, the last node with a given id wins.
    pub fn nodes_by_id(&self) -> HashMap<String, Node> {
        self.nodes
            .iter()
            .map(|n| (n.id.clone(), n.clone()))
            .collect()
    }
}
