//! Collider rule: `x → n ← y` — conditioning *opens* rather than blocks.

use dsep_core::{CausalGraph, DsepResult};

use super::ConditioningSet;
use crate::projector::project;

/// Whether `node` blocks the path as an unconditioned collider.
///
/// A collider (two incoming edges within the path subgraph) blocks the path
/// by default. Conditioning on the collider itself, or on any of its direct
/// successors in the full graph, opens the path and forces the result to
/// false — the inverse of the chain and fork rules.
///
/// Known scope limitation: the descendant check looks one hop down
/// (`successors` in the full graph), not at the full descendant closure.
/// Extending it to multi-hop conditioning is an open question, not something
/// this predicate does.
pub fn is_blocker(
    node: &str,
    conditioning: &ConditioningSet,
    graph: &CausalGraph,
    path: &[&str],
) -> DsepResult<bool> {
    let sub = project(graph, path)?;
    Ok(applies(&sub, graph, node, conditioning))
}

pub(crate) fn applies(
    sub: &CausalGraph,
    graph: &CausalGraph,
    node: &str,
    conditioning: &ConditioningSet,
) -> bool {
    let is_collider = sub.in_degree(node) == 2;
    let descendant_conditioned = graph
        .successors(node)
        .into_iter()
        .any(|d| conditioning.contains(d));
    is_collider && !(conditioning.contains(node) || descendant_conditioned)
}
