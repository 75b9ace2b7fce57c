//! Shared test graphs for the dsep workspace.
//!
//! Builder functions for the DAGs the rule tests exercise, so every crate
//! tests against the same topologies.

use dsep_core::CausalGraph;

/// The DAG from figure 4.7 of Judea Pearl's "The Book of Why".
pub fn book_of_why_fig_4_7() -> CausalGraph {
    let mut g = CausalGraph::new();
    g.add_edges_from([
        ("D", "A"),
        ("D", "C"),
        ("F", "C"),
        ("A", "B"),
        ("C", "B"),
        ("C", "Y"),
        ("F", "X"),
        ("F", "Y"),
        ("C", "E"),
        ("A", "X"),
        ("E", "X"),
        ("E", "Y"),
        ("B", "X"),
        ("X", "Y"),
        ("G", "X"),
        ("G", "Y"),
    ]);
    g
}

/// Five-variable DAG with a diamond through x4/x3/x1 into x5.
pub fn five_variable_dag() -> CausalGraph {
    let mut g = CausalGraph::new();
    g.add_edges_from([
        ("x2", "x1"),
        ("x3", "x1"),
        ("x4", "x3"),
        ("x4", "x5"),
        ("x1", "x5"),
    ]);
    g
}

/// Single-letter-variable DAG with two roots (x, v) joining at t.
pub fn letter_dag() -> CausalGraph {
    let mut g = CausalGraph::new();
    g.add_edges_from([
        ("x", "r"),
        ("r", "w"),
        ("r", "s"),
        ("s", "t"),
        ("t", "p"),
        ("u", "t"),
        ("v", "u"),
        ("v", "q"),
        ("v", "y"),
    ]);
    g
}
