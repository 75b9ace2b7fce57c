//! # dsep-rules
//!
//! The blocking-rule engine: decide whether a node on a causal path blocks
//! that path with respect to a conditioning set, per the three classical
//! d-separation patterns (chain `→ n →`, fork `← n →`, collider `→ n ←`).
//!
//! Each predicate restricts the full graph to the edges linking consecutive
//! path nodes ([`projector::project`]) and then pattern-matches the node's
//! local degrees in that subgraph. All predicates are pure and total over
//! well-formed directed graphs; the only error is the projector's
//! directed-graph precondition.

pub mod projector;
pub mod rules;

pub use projector::project;
pub use rules::{classify, BlockerKind, ConditioningSet};
