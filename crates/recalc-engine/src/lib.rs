//! Incremental re-evaluation engine for arithmetic expression trees.
//!
//! A tree is built once from [`Input`] handles combined with ordinary
//! arithmetic operators, then wrapped in a [`Memo`] driver. Every
//! [`Memo::refresh`] runs two passes over the tree:
//!
//! 1. **dirty propagation** — post-order walk that diffs each terminal's
//!    cached copy against its live source and ORs staleness upward;
//! 2. **cache evaluation** — recomputes only the subtrees the first pass
//!    marked dirty; a clean node returns its cached result in O(1)
//!    without visiting children.
//!
//! The model is pull-based poll-and-diff: inputs are mutated directly
//! between refreshes and nothing is notified — the cost is one value
//! comparison per reachable terminal per refresh, the payoff is that
//! callers never have to announce which inputs changed.
//!
//! Everything here is single-threaded by construction: inputs share
//! their value cell via `Rc`, so a tree and its inputs cannot cross a
//! thread boundary.

mod display;
mod evaluator;
mod input;
mod memo;
mod node;
mod renderer;

pub use evaluator::RefreshStats;
pub use input::{Input, Terminal};
pub use memo::Memo;
pub use node::{ExprNode, Node};
pub use renderer::{Refresh, Renderer};

pub use recalc_types::{BuildError, BuildResult, Operator, Scalar};
