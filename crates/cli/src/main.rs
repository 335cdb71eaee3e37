//! `supply-topology` CLI entry-point.
//!
//! Every sub-command reads a graph snapshot `{ "nodes": [...], "edges": [...] }`
//! from a JSON file:
//! - `validate`   — strict DAG validation, prints the topological order.
//! - `inspect`    — prints a structural report as JSON.
//! - `check-edge` — would a candidate edge create a cycle?
//! - `path`       — shortest path between two nodes, with its nodes and edges.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use topology::{Edge, Node, SupplyChainGraph, TopologyReport, ValidationConfig};

#[derive(Parser)]
#[command(
    name = "supply-topology",
    about = "Structural checks for supply-chain flow graphs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate that a graph file is a well-formed DAG.
    Validate {
        /// Path to the graph JSON file.
        path: PathBuf,
        /// Let edges name nodes that are not in the node list.
        #[arg(long)]
        allow_unknown_references: bool,
        /// Fail when a node has no edges.
        #[arg(long)]
        reject_orphans: bool,
    },
    /// Print orphans, dangling references, sources, sinks and acyclicity.
    Inspect {
        path: PathBuf,
    },
    /// Check whether adding `source → target` would create a cycle.
    CheckEdge {
        path: PathBuf,
        #[arg(long)]
        source: String,
        #[arg(long)]
        target: String,
    },
    /// Print the shortest path between two nodes.
    Path {
        path: PathBuf,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

/// JSON shape printed by `path`.
#[derive(Serialize)]
struct PathOutput<'a> {
    path: &'a [String],
    nodes: Vec<&'a Node>,
    edges: Vec<&'a Edge>,
}

/// Verdict of a sub-command; `Failed` maps to a non-zero exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Passed,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Passed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

fn load_graph(path: &Path) -> Result<SupplyChainGraph> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;
    let graph: SupplyChainGraph = serde_json::from_str(&content)
        .with_context(|| format!("invalid graph JSON in {}", path.display()))?;
    debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "graph loaded");
    Ok(graph)
}

fn run(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Command::Validate {
            path,
            allow_unknown_references,
            reject_orphans,
        } => {
            let graph = load_graph(&path)?;
            let config = ValidationConfig {
                reject_unknown_references: !allow_unknown_references,
                reject_orphans,
            };
            match topology::validate_dag(&graph, &config) {
                Ok(order) => {
                    println!("Graph is a valid DAG. Topological order: {order:?}");
                    Ok(Outcome::Passed)
                }
                Err(e) => {
                    eprintln!("Validation failed: {e}");
                    Ok(Outcome::Failed)
                }
            }
        }
        Command::Inspect { path } => {
            let graph = load_graph(&path)?;
            let report = TopologyReport::build(&graph);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(Outcome::Passed)
        }
        Command::CheckEdge {
            path,
            source,
            target,
        } => {
            let graph = load_graph(&path)?;
            if topology::would_create_cycle(&graph.nodes, &graph.edges, &source, &target) {
                println!("Edge {source} -> {target} would create a cycle");
                Ok(Outcome::Failed)
            } else {
                println!("Edge {source} -> {target} keeps the graph acyclic");
                Ok(Outcome::Passed)
            }
        }
        Command::Path { path, from, to } => {
            let graph = load_graph(&path)?;
            let Some(found) = topology::find_shortest_path(&graph.edges, &from, &to) else {
                println!("No path from {from} to {to}");
                return Ok(Outcome::Failed);
            };
            let lookup = graph.nodes_by_id();
            let output = PathOutput {
                path: &found,
                nodes: topology::get_nodes_in_path(&lookup, &found),
                edges: topology::get_edges_in_path(&graph.edges, &found),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(Outcome::Passed)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("supply-topology starting");

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
