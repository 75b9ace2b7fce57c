//! Property tests for projection invariants and the rules' membership gates.

use std::collections::HashSet;

use proptest::prelude::*;

use dsep_core::CausalGraph;
use dsep_rules::rules::{chain, collider, fork};
use dsep_rules::{project, ConditioningSet};

const NODES: usize = 10;

fn name(i: usize) -> String {
    format!("n{i}")
}

/// Build a DAG over `NODES` nodes. Edges are forced low-index → high-index,
/// so no self-loops and no cycles.
fn build_dag(edges: &[(usize, usize)]) -> CausalGraph {
    let mut g = CausalGraph::new();
    for i in 0..NODES {
        g.ensure_node(&name(i));
    }
    for &(a, b) in edges {
        if a == b {
            continue;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        g.add_edge(&name(lo), &name(hi));
    }
    g
}

fn edge_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..NODES * 2)
}

fn path_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..NODES, 0..8)
}

fn sorted_edges(g: &CausalGraph) -> Vec<(String, String)> {
    let mut edges: Vec<(String, String)> = g
        .edge_list()
        .iter()
        .map(|(s, t, _)| (s.to_string(), t.to_string()))
        .collect();
    edges.sort_unstable();
    edges
}

proptest! {
    #[test]
    fn projection_nodes_are_a_subset_of_the_path(
        edges in edge_strategy(),
        path in path_strategy(),
    ) {
        let g = build_dag(&edges);
        let names: Vec<String> = path.iter().map(|&i| name(i)).collect();
        let path_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let path_set: HashSet<&str> = path_refs.iter().copied().collect();

        let sub = project(&g, &path_refs).unwrap();
        for node in sub.node_names() {
            prop_assert!(path_set.contains(node), "{node} not on the path");
        }
    }

    #[test]
    fn projected_edges_exist_in_the_source_with_same_orientation(
        edges in edge_strategy(),
        path in path_strategy(),
    ) {
        let g = build_dag(&edges);
        let names: Vec<String> = path.iter().map(|&i| name(i)).collect();
        let path_refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let sub = project(&g, &path_refs).unwrap();
        for (source, target, _) in sub.edge_list() {
            prop_assert!(g.has_edge(source, target));
        }
    }

    #[test]
    fn projection_is_idempotent(
        edges in edge_strategy(),
        path in path_strategy(),
    ) {
        let g = build_dag(&edges);
        let names: Vec<String> = path.iter().map(|&i| name(i)).collect();
        let path_refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let first = project(&g, &path_refs).unwrap();
        let second = project(&g, &path_refs).unwrap();
        prop_assert_eq!(sorted_edges(&first), sorted_edges(&second));
    }

    #[test]
    fn chain_and_fork_need_the_node_conditioned(
        edges in edge_strategy(),
        path in path_strategy(),
        node in 0..NODES,
    ) {
        let g = build_dag(&edges);
        let names: Vec<String> = path.iter().map(|&i| name(i)).collect();
        let path_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let empty = ConditioningSet::new();
        let n = name(node);

        prop_assert!(!chain::is_blocker(&n, &empty, &g, &path_refs).unwrap());
        prop_assert!(!fork::is_blocker(&n, &empty, &g, &path_refs).unwrap());
    }

    #[test]
    fn conditioned_collider_never_blocks(
        edges in edge_strategy(),
        path in path_strategy(),
        node in 0..NODES,
    ) {
        let g = build_dag(&edges);
        let names: Vec<String> = path.iter().map(|&i| name(i)).collect();
        let path_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let n = name(node);
        let s: ConditioningSet = [n.clone()].into_iter().collect();

        prop_assert!(!collider::is_blocker(&n, &s, &g, &path_refs).unwrap());
    }
}
