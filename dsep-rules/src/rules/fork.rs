//! Fork rule: `y ← n → x` — the common-cause pattern.

use dsep_core::{CausalGraph, DsepResult};

use super::ConditioningSet;
use crate::projector::project;

/// Whether `node` blocks the path as a conditioned-on common cause.
///
/// True iff the node is in the conditioning set and has exactly two outgoing
/// edges within the path subgraph. In-degree is deliberately not checked
/// (asymmetric with the chain rule): a node with one outgoing and one
/// incoming edge is not a fork under this rule.
pub fn is_blocker(
    node: &str,
    conditioning: &ConditioningSet,
    graph: &CausalGraph,
    path: &[&str],
) -> DsepResult<bool> {
    let sub = project(graph, path)?;
    Ok(applies(&sub, node, conditioning))
}

pub(crate) fn applies(sub: &CausalGraph, node: &str, conditioning: &ConditioningSet) -> bool {
    conditioning.contains(node) && sub.out_degree(node) == 2
}
