//! The re-evaluation driver.

use crate::evaluator::RefreshStats;
use crate::node::Node;
use recalc_types::Scalar;

/// Owns a built tree and re-derives its root value on demand.
///
/// [`refresh`](Self::refresh) runs dirty propagation followed by cache
/// evaluation and returns the up-to-date root value. It is idempotent:
/// with no input mutation in between, a second refresh finds nothing
/// stale and performs zero operator applications.
pub struct Memo<T> {
    root: Node<T>,
    last_stats: RefreshStats,
}

impl<T: Scalar> Memo<T> {
    /// Wrap a built tree.
    pub fn new(root: Node<T>) -> Self {
        Self {
            root,
            last_stats: RefreshStats::default(),
        }
    }

    /// Recompute whatever became stale since the last refresh and
    /// return the root value.
    pub fn refresh(&mut self) -> T {
        let mut stats = RefreshStats::default();
        self.root.mark_dirty(&mut stats);
        let value = self.root.evaluate(&mut stats);
        self.last_stats = stats;
        value
    }

    /// Work counters recorded by the most recent refresh.
    pub fn last_stats(&self) -> RefreshStats {
        self.last_stats
    }

    /// The wrapped tree, e.g. for the pretty-printer.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }
}

impl<T: Scalar> From<Node<T>> for Memo<T> {
    fn from(root: Node<T>) -> Self {
        Self::new(root)
    }
}
