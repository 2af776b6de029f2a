//! Operator tags for expression nodes.
//!
//! Each tag has a fixed arity, set once at node construction and never
//! re-checked during evaluation.

use crate::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An arithmetic combinator applied by an expression node to its
/// children's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// unary `-a`
    Neg,
}

impl Operator {
    /// Number of children a node carrying this tag must have.
    pub fn arity(self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
            Self::Neg => 1,
        }
    }

    /// Source-style symbol, used by the pretty-printer.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Neg => "neg",
        }
    }

    /// Apply this combinator to freshly evaluated child results.
    ///
    /// `args.len()` must equal [`arity`](Self::arity) — node
    /// construction rejects mismatched child lists, and the assertion
    /// below catches direct misuse. Negation is the additive inverse
    /// through the base contract: `T::default() - x`.
    pub fn apply<T: Scalar>(self, args: &[T]) -> T {
        debug_assert_eq!(
            args.len(),
            self.arity(),
            "argument count must match operator arity"
        );
        match self {
            Self::Add => args[0].clone() + args[1].clone(),
            Self::Sub => args[0].clone() - args[1].clone(),
            Self::Mul => args[0].clone() * args[1].clone(),
            Self::Div => args[0].clone() / args[1].clone(),
            Self::Neg => T::default() - args[0].clone(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
