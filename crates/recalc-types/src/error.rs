//! Construction-time error types.

use crate::Operator;
use thiserror::Error;

/// Errors reported while building an expression tree.
///
/// Evaluation itself has no recoverable-error paths: once a tree is
/// built, both passes are infallible. Everything that can go wrong is
/// rejected here, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An operator was given the wrong number of children.
    #[error("operator `{op}` takes {expected} operand(s), got {got}")]
    ArityMismatch {
        op: Operator,
        expected: usize,
        got: usize,
    },

    /// An expression node was constructed with no children at all.
    #[error("expression node must have at least one child")]
    EmptyExpression,
}

/// Result alias for tree-construction operations.
pub type BuildResult<T> = Result<T, BuildError>;
