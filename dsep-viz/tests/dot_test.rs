//! Tests for DOT rendering.

use dsep_core::CausalGraph;
use dsep_viz::render_dot;
use test_fixtures::book_of_why_fig_4_7;

#[test]
fn directed_graph_renders_as_digraph() {
    let g = book_of_why_fig_4_7();
    let dot = render_dot(&g, None);
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("\"X\" -> \"Y\";"));
    assert!(dot.contains("\"D\" -> \"A\";"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn undirected_graph_uses_edge_operator() {
    let mut g = CausalGraph::undirected();
    g.add_edge("a", "b");
    let dot = render_dot(&g, None);
    assert!(dot.starts_with("graph {"));
    assert!(dot.contains("\"a\" -- \"b\";"));
}

#[test]
fn edge_label_key_pulls_attribute_values() {
    let mut g = CausalGraph::new();
    let mut attrs = dsep_core::EdgeAttrs::new();
    attrs.insert("weight".to_string(), serde_json::json!(0.7));
    g.add_edge_with_attrs("a", "b", attrs);
    g.add_edge("b", "c");

    let dot = render_dot(&g, Some("weight"));
    assert!(dot.contains("\"a\" -> \"b\" [label=\"0.7\"];"));
    // Edges without the attribute stay unlabeled.
    assert!(dot.contains("\"b\" -> \"c\";"));
}

#[test]
fn string_attributes_render_unquoted() {
    let mut g = CausalGraph::new();
    let mut attrs = dsep_core::EdgeAttrs::new();
    attrs.insert("relation".to_string(), serde_json::json!("causes"));
    g.add_edge_with_attrs("a", "b", attrs);

    let dot = render_dot(&g, Some("relation"));
    assert!(dot.contains("[label=\"causes\"]"));
}

#[test]
fn names_with_quotes_are_escaped() {
    let mut g = CausalGraph::new();
    g.add_edge("a\"b", "c");
    let dot = render_dot(&g, None);
    assert!(dot.contains("\"a\\\"b\""));
}
