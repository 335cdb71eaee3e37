//! Path queries over the flow graph and their materialisation back into
//! node/edge objects.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, instrument};

use crate::adjacency::Adjacency;
use crate::models::{Edge, Node};

/// Reachability query: a path from `source` to `target`, if one exists.
///
/// Behaves exactly like [`find_shortest_path`].
#[instrument(skip(edges), fields(edges = edges.len()))]
pub fn find_path(edges: &[Edge], source: &str, target: &str) -> Option<Vec<String>> {
    find_shortest_path(edges, source, target)
}

/// Minimum-hop path from `source` to `target` following edge direction.
///
/// Breadth-first over an adjacency list built from `edges` alone.  Among
/// equally short paths, the one whose nodes are discovered first in edge
/// order wins.  `source == target` yields the trivial path `[source]`.
/// Returns `None` when `target` is unreachable; cycles in `edges` are fine.
#[instrument(skip(edges), fields(edges = edges.len()))]
pub fn find_shortest_path(edges: &[Edge], source: &str, target: &str) -> Option<Vec<String>> {
    if source == target {
        return Some(vec![source.to_owned()]);
    }

    let adjacency = Adjacency::from_edges(edges);
    let (Some(start), Some(goal)) = (adjacency.index_of(source), adjacency.index_of(target)) else {
        debug!(source, target, "endpoint not present in any edge");
        return None;
    };

    let mut parent: Vec<Option<usize>> = vec![None; adjacency.len()];
    let mut visited = vec![false; adjacency.len()];
    visited[start] = true;
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        for &next in adjacency.successors(node) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parent[next] = Some(node);
            if next == goal {
                let path = unwind(&adjacency, &parent, goal);
                debug!(source, target, hops = path.len() - 1, "path found");
                return Some(path);
            }
            queue.push_back(next);
        }
    }

    debug!(source, target, "no path");
    None
}

/// Follow parent links from `goal` back to the BFS root.
fn unwind(adjacency: &Adjacency<'_>, parent: &[Option<usize>], goal: usize) -> Vec<String> {
    let mut path = vec![adjacency.id(goal).to_owned()];
    let mut cursor = goal;
    while let Some(prev) = parent[cursor] {
        path.push(adjacency.id(prev).to_owned());
        cursor = prev;
    }
    path.reverse();
    path
}

/// Resolve each id in `path` to its node, dropping ids with no match.
#[instrument(skip_all, fields(path_len = path.len()))]
pub fn get_nodes_in_path<'a>(nodes_by_id: &'a HashMap<String, Node>, path: &[String]) -> Vec<&'a Node> {
    path.iter().filter_map(|id| nodes_by_id.get(id)).collect()
}

/// The edge joining each consecutive pair in `path`.
///
/// The first edge with an exact `(source, target)` match is used; pairs with
/// no such edge are skipped.
#[instrument(skip_all, fields(path_len = path.len()))]
pub fn get_edges_in_path<'a>(edges: &'a [Edge], path: &[String]) -> Vec<&'a Edge> {
    path.windows(2)
        .filter_map(|pair| edges.iter().find(|e| e.connects(&pair[0], &pair[1])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect()
    }

    fn ids(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prefers_the_direct_edge() {
        let es = edges(&[("A", "B"), ("B", "C"), ("A", "C")]);
        assert_eq!(find_shortest_path(&es, "A", "C"), Some(ids(&["A", "C"])));
    }

    #[test]
    fn follows_multi_hop_chains() {
        let es = edges(&[("A", "B"), ("B", "C"), ("C", "D")]);
        assert_eq!(find_path(&es, "A", "D"), Some(ids(&["A", "B", "C", "D"])));
    }

    #[test]
    fn unreachable_target_is_none() {
        let es = edges(&[("A", "B")]);
        assert_eq!(find_shortest_path(&es, "A", "Z"), None);
        // Direction matters.
        assert_eq!(find_shortest_path(&es, "B", "A"), None);
    }

    #[test]
    fn same_endpoint_is_the_trivial_path() {
        assert_eq!(find_shortest_path(&[], "A", "A"), Some(ids(&["A"])));
        assert_eq!(find_path(&edges(&[("A", "B")]), "A", "A"), Some(ids(&["A"])));
    }

    #[test]
    fn ties_resolve_by_edge_order() {
        let es = edges(&[("S", "X"), ("S", "Y"), ("Y", "T"), ("X", "T")]);
        assert_eq!(find_shortest_path(&es, "S", "T"), Some(ids(&["S", "X", "T"])));
    }

    #[test]
    fn terminates_on_cyclic_input() {
        let es = edges(&[("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")]);
        assert_eq!(find_shortest_path(&es, "A", "C"), Some(ids(&["A", "B", "C"])));
        assert_eq!(find_shortest_path(&es, "A", "Q"), None);
    }

    #[test]
    fn nodes_in_path_skip_unknown_ids() {
        let mut lookup = HashMap::new();
        lookup.insert("A".to_string(), Node::new("A").with_role("supplier"));
        lookup.insert("C".to_string(), Node::new("C").with_role("customer"));

        let found = get_nodes_in_path(&lookup, &ids(&["A", "B", "C"]));
        let found_ids: Vec<&str> = found.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(found_ids, vec!["A", "C"]);
    }

    #[test]
    fn edges_in_path_match_consecutive_pairs() {
        let es = edges(&[("A", "B"), ("B", "C"), ("A", "C")]);
        let path = ids(&["A", "B", "C"]);
        let found = get_edges_in_path(&es, &path);
        assert_eq!(found.len(), 2);
        assert!(found[0].connects("A", "B"));
        assert!(found[1].connects("B", "C"));
    }

    #[test]
    fn edges_in_path_skip_missing_pairs() {
        let es = edges(&[("A", "B")]);
        let found = get_edges_in_path(&es, &ids(&["A", "B", "Z"]));
        assert_eq!(found.len(), 1);
        assert!(get_edges_in_path(&es, &ids(&["A"])).is_empty());
        assert!(get_edges_in_path(&es, &[]).is_empty());
    }

    #[test]
    fn edges_in_path_use_first_parallel_edge() {
        let mut first = Edge::new("A", "B");
        first.id = Some("e1".into());
        let mut second = Edge::new("A", "B");
        second.id = Some("e2".into());
        let es = vec![first, second];

        let found = get_edges_in_path(&es, &ids(&["A", "B"]));
        assert_eq!(found[0].id.as_deref(), Some("e1"));
    }
}
