//! Chain rule: `x → n → y` (topologically the same as `x ← n ← y`).

use dsep_core::{CausalGraph, DsepResult};

use super::ConditioningSet;
use crate::projector::project;

/// Whether `node` blocks the path as the conditioned-on middle of a chain.
///
/// True iff the node is in the conditioning set and has exactly one incoming
/// and one outgoing edge within the path subgraph. Path endpoints can never
/// qualify: one side of the degree check is always zero for them.
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
    conditioning.contains(node) && sub.in_degree(node) == 1 && sub.out_degree(node) == 1
}
