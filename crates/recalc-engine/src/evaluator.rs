//! The two evaluation passes: dirty propagation and cache evaluation.
//!
//! Both passes are depth-first, post-order walks over the tree. The
//! propagation pass runs first and only mutates dirty flags; the
//! evaluation pass then recomputes exactly the subtrees the first pass
//! marked, returning the root value.

use crate::node::Node;
use recalc_types::Scalar;
use serde::{Deserialize, Serialize};

/// Work counters for a single refresh, reset at the start of each one.
///
/// These are the observability surface of the engine: a no-op refresh
/// shows up as `ops_applied == 0`, a skipped subtree as a shortfall in
/// `terminals_refreshed`, and a propagation short-circuit as zero
/// `terminals_compared`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshStats {
    /// Terminal cache-vs-source comparisons during dirty propagation.
    pub terminals_compared: usize,
    /// Terminals whose cache was re-copied during evaluation.
    pub terminals_refreshed: usize,
    /// Operator applications during evaluation.
    pub ops_applied: usize,
}

impl<T: Scalar> Node<T> {
    /// Dirty-propagation pass.
    ///
    /// Returns whether this subtree is stale. Terminals derive staleness
    /// by value comparison; expression nodes OR their children's
    /// staleness into their own flag. The pass has no other output —
    /// its purpose is the flag mutations it leaves behind for
    /// [`evaluate`](Self::evaluate).
    ///
    /// Normally invoked by [`Memo::refresh`](crate::Memo::refresh),
    /// which orchestrates both passes.
    pub fn mark_dirty(&mut self, stats: &mut RefreshStats) -> bool {
        match self {
            Node::Terminal(t) => {
                stats.terminals_compared += 1;
                t.is_stale()
            }
            Node::Expr(node) => {
                // Already marked: nothing below can change the answer,
                // and the children's flags were set when it was marked.
                if node.dirty {
                    return true;
                }
                let mut stale = false;
                for child in &mut node.children {
                    // `|=`, not `||`: every child must be visited so
                    // nested expression flags get set even when an
                    // earlier sibling is already stale.
                    stale |= child.mark_dirty(stats);
                }
                node.dirty = stale;
                stale
            }
        }
    }

    /// Cache-evaluation pass.
    ///
    /// Terminals refresh unconditionally — re-copying an unchanged
    /// source is cheap and the propagation pass already decided which
    /// ancestors recompute. A dirty expression node re-applies its
    /// operator to freshly evaluated children and clears its flag; a
    /// clean one returns its cached result without visiting children.
    pub fn evaluate(&mut self, stats: &mut RefreshStats) -> T {
        match self {
            Node::Terminal(t) => {
                stats.terminals_refreshed += 1;
                t.refresh()
            }
            Node::Expr(node) => {
                if node.dirty {
                    let args: Vec<T> = node
                        .children
                        .iter_mut()
                        .map(|child| child.evaluate(stats))
                        .collect();
                    node.result = node.op.apply(&args);
                    stats.ops_applied += 1;
                    node.dirty = false;
                }
                node.result.clone()
            }
        }
    }
}
