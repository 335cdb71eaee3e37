//! Arena-indexed adjacency list rebuilt from a snapshot on every call.
//!
//! Node ids are interned into dense `usize` indices in first-seen order, so
//! traversal state can live in plain `Vec<bool>` arrays instead of maps.

use std::collections::HashMap;

use crate::models::{Edge, Node};

#[derive(Debug, Default)]
pub(crate) struct Adjacency<'a> {
    ids: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
    successors: Vec<Vec<usize>>,
}

impl<'a> Adjacency<'a> {
    /// Every node gets an entry (edge-less ones included), then every edge
    /// is overlaid in order.  Edge endpoints missing from `nodes` are
    /// interned as they appear.
    pub(crate) fn from_graph(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut adjacency = Self::default();
        for node in nodes {
            adjacency.intern(&node.id);
        }
        for edge in edges {
            adjacency.add_edge(&edge.source, &edge.target);
        }
        adjacency
    }

    /// Adjacency built solely from `edges`.
    pub(crate) fn from_edges(edges: &'a [Edge]) -> Self {
        let mut adjacency = Self::default();
        for edge in edges {
            adjacency.add_edge(&edge.source, &edge.target);
        }
        adjacency
    }

    pub(crate) fn intern(&mut self, id: &'a str) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.ids.len();
        self.ids.push(id);
        self.index.insert(id, idx);
        self.successors.push(Vec::new());
        idx
    }

    pub(crate) fn add_edge(&mut self, source: &'a str, target: &'a str) {
        let from = self.intern(source);
        let to = self.intern(target);
        self.successors[from].push(to);
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn id(&self, idx: usize) -> &'a str {
        self.ids[idx]
    }

    pub(crate) fn successors(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }

    /// Number of incoming edges per node, indexed like the arena.
    pub(crate) fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0; self.len()];
        for targets in &self.successors {
            for &to in targets {
                in_degree[to] += 1;
            }
        }
        in_degree
    }
}
