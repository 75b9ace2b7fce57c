//! # dsep-viz
//!
//! DOT rendering of [`CausalGraph`] values. Layout is the DOT consumer's
//! job (Graphviz and friends); this crate only emits the graph text, with an
//! optional per-edge label pulled from a named edge attribute.
//!
//! Shares only the graph value type with the rule engine — nothing in
//! `dsep-rules` depends on this crate.

use std::fmt::Write;

use dsep_core::{CausalGraph, GraphKind};

/// Render `graph` as DOT text.
///
/// When `edge_label` names an edge attribute, edges carrying that attribute
/// get it as their label; edges without it stay unlabeled. Node and edge
/// order follows the graph's internal order, so output is deterministic for
/// a given construction sequence.
pub fn render_dot(graph: &CausalGraph, edge_label: Option<&str>) -> String {
    let (header, arrow) = match graph.kind() {
        GraphKind::Directed => ("digraph", "->"),
        GraphKind::Undirected => ("graph", "--"),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{header} {{");
    for name in graph.node_names() {
        let _ = writeln!(out, "    \"{}\";", escape(name));
    }
    for (source, target, attrs) in graph.edge_list() {
        let label = edge_label
            .and_then(|key| attrs.get(key))
            .map(attr_text)
            .map(|text| format!(" [label=\"{}\"]", escape(&text)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "    \"{}\" {arrow} \"{}\"{label};",
            escape(source),
            escape(target)
        );
    }
    out.push_str("}\n");
    out
}

/// Attribute value as plain label text: strings unquoted, everything else in
/// its JSON form.
fn attr_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
