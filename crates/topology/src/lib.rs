//! `topology` crate — structural analysis of the supply-chain flow graph.
//!
//! Every operation is a pure function over a borrowed `(nodes, edges)`
//! snapshot: the adjacency list is rebuilt per call and nothing is retained
//! between calls.

pub mod models;
pub mod error;
pub mod cycle;
pub mod orphans;
pub mod paths;
pub mod dag;
pub mod report;

mod adjacency;

pub use models::{AssignedUser, Edge, Node, SupplyChainGraph};
pub use error::TopologyError;
pub use cycle::would_create_cycle;
pub use orphans::find_orphaned_nodes;
pub use paths::{find_path, find_shortest_path, get_edges_in_path, get_nodes_in_path};
pub use dag::{validate_dag, ValidationConfig};
pub use report::TopologyReport;

#[cfg(test)]
mod topology_tests;
