//! Tree node types and natural-syntax construction.
//!
//! A tree is structurally immutable once built: the operator tag and
//! child list are set at construction and never change. Only the cached
//! result and dirty flag mutate afterward, and only the two evaluation
//! passes touch them.

use crate::input::Terminal;
use recalc_types::{BuildError, BuildResult, Operator, Scalar};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// One node of an expression tree: either a terminal leaf or an
/// operator application over owned child subtrees.
///
/// The recursive payload is boxed to keep the enum size flat.
pub enum Node<T> {
    Terminal(Terminal<T>),
    Expr(Box<ExprNode<T>>),
}

/// An internal node: an operator over an ordered, fixed-arity child
/// list, with a cached result and a dirty flag.
///
/// A fresh node starts dirty, so the default-initialized result slot is
/// never observed before the first evaluation writes it.
pub struct ExprNode<T> {
    pub(crate) op: Operator,
    pub(crate) children: Vec<Node<T>>,
    pub(crate) result: T,
    pub(crate) dirty: bool,
}

impl<T: Scalar> Node<T> {
    /// Build an expression node, validating the child count against the
    /// operator's arity.
    ///
    /// This is the explicit builder surface; the operator overloads
    /// below construct the same shapes with arity guaranteed by the
    /// signature.
    pub fn expr(op: Operator, children: Vec<Node<T>>) -> BuildResult<Self> {
        if children.is_empty() {
            return Err(BuildError::EmptyExpression);
        }
        if children.len() != op.arity() {
            return Err(BuildError::ArityMismatch {
                op,
                expected: op.arity(),
                got: children.len(),
            });
        }
        Ok(Self::combine(op, children))
    }

    /// Infallible constructor for the operator overloads, which supply
    /// the correct child count by construction.
    fn combine(op: Operator, children: Vec<Node<T>>) -> Self {
        Node::Expr(Box::new(ExprNode {
            op,
            children,
            result: T::default(),
            dirty: true,
        }))
    }
}

impl<T: Scalar + fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Terminal(t) => f.debug_tuple("Terminal").field(t).finish(),
            Node::Expr(node) => f.debug_tuple("Expr").field(node).finish(),
        }
    }
}

impl<T: Scalar + fmt::Debug> fmt::Debug for ExprNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprNode")
            .field("op", &self.op)
            .field("children", &self.children)
            .field("result", &self.result)
            .field("dirty", &self.dirty)
            .finish()
    }
}

// ── Natural-syntax construction ──────────────────────────────────────
//
// `a.bind() + b.bind() * c.bind()` builds the tree directly; chains of
// the same operator fold left-to-right into a left-leaning tree.

impl<T: Scalar> Add for Node<T> {
    type Output = Node<T>;

    fn add(self, rhs: Node<T>) -> Node<T> {
        Node::combine(Operator::Add, vec![self, rhs])
    }
}

impl<T: Scalar> Sub for Node<T> {
    type Output = Node<T>;

    fn sub(self, rhs: Node<T>) -> Node<T> {
        Node::combine(Operator::Sub, vec![self, rhs])
    }
}

impl<T: Scalar> Mul for Node<T> {
    type Output = Node<T>;

    fn mul(self, rhs: Node<T>) -> Node<T> {
        Node::combine(Operator::Mul, vec![self, rhs])
    }
}

impl<T: Scalar> Div for Node<T> {
    type Output = Node<T>;

    fn div(self, rhs: Node<T>) -> Node<T> {
        Node::combine(Operator::Div, vec![self, rhs])
    }
}

impl<T: Scalar> Neg for Node<T> {
    type Output = Node<T>;

    fn neg(self) -> Node<T> {
        Node::combine(Operator::Neg, vec![self])
    }
}
