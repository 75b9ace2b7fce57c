//! Error taxonomy for the dsep workspace.

use crate::graph::GraphKind;

/// Errors raised by the blocking-rule engine.
#[derive(Debug, thiserror::Error)]
pub enum DsepError {
    #[error("invalid graph kind: expected {expected}, found {found}")]
    InvalidGraphKind {
        expected: GraphKind,
        found: GraphKind,
    },
}

/// Result alias used across the workspace.
pub type DsepResult<T> = Result<T, DsepError>;
