//! # dsep-core
//!
//! Foundation crate for the dsep workspace.
//! Defines the name-indexed causal graph value type and the error taxonomy.
//! Every other crate in the workspace depends on this.

pub mod errors;
pub mod graph;

// Re-export the most commonly used types at the crate root.
pub use errors::{DsepError, DsepResult};
pub use graph::{CausalGraph, EdgeAttrs, GraphKind, Variable};
