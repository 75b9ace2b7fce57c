//! The three blocking rules, one module each, plus a classifier that
//! evaluates all three over a single projection.

pub mod chain;
pub mod collider;
pub mod fork;

use std::collections::HashSet;

use dsep_core::{CausalGraph, DsepResult};

use crate::projector::project;

/// Nodes treated as observed/controlled-for in the analysis.
pub type ConditioningSet = HashSet<String>;

/// Which local pattern makes a node a blocker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockerKind {
    Chain,
    Fork,
    Collider,
}

/// Evaluate all three rules for `node`, projecting the path once.
///
/// The three patterns demand incompatible degree shapes within the path
/// subgraph, so at most one can apply; `None` means the node does not block
/// the path under any rule.
pub fn classify(
    node: &str,
    conditioning: &ConditioningSet,
    graph: &CausalGraph,
    path: &[&str],
) -> DsepResult<Option<BlockerKind>> {
    let sub = project(graph, path)?;
    if chain::applies(&sub, node, conditioning) {
        return Ok(Some(BlockerKind::Chain));
    }
    if fork::applies(&sub, node, conditioning) {
        return Ok(Some(BlockerKind::Fork));
    }
    if collider::applies(&sub, graph, node, conditioning) {
        return Ok(Some(BlockerKind::Collider));
    }
    Ok(None)
}
