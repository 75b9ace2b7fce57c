//! Path restriction: project a graph onto the edges linking consecutive
//! path nodes.

use dsep_core::{CausalGraph, DsepError, DsepResult, GraphKind};

/// Build the minimal directed subgraph induced by consecutive connections
/// along `path`.
///
/// For each consecutive pair `(a, b)`: the edge `a→b` is copied if the full
/// graph has it, else `b→a` if present, else the pair contributes no edge.
/// Orientation always follows the full graph, never the walk direction, so
/// the same subgraph comes out of the path and its reversal. A disconnected
/// segment is skipped silently — degree counts in the result reflect only
/// connected segments. A path shorter than two nodes yields an empty graph.
///
/// Errors with [`DsepError::InvalidGraphKind`] when `graph` is not directed.
pub fn project(graph: &CausalGraph, path: &[&str]) -> DsepResult<CausalGraph> {
    if graph.kind() != GraphKind::Directed {
        return Err(DsepError::InvalidGraphKind {
            expected: GraphKind::Directed,
            found: graph.kind(),
        });
    }

    let mut sub = CausalGraph::new();
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if graph.has_edge(a, b) {
            sub.add_edge_with_attrs(a, b, graph.edge_attrs(a, b).cloned().unwrap_or_default());
        } else if graph.has_edge(b, a) {
            sub.add_edge_with_attrs(b, a, graph.edge_attrs(b, a).cloned().unwrap_or_default());
        }
    }

    tracing::debug!(
        path_len = path.len(),
        edges = sub.edge_count(),
        "projected path subgraph"
    );
    Ok(sub)
}
