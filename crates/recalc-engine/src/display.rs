//! Diagnostic pretty-printer for tree structure.
//!
//! Not part of the evaluation contract — a debugging aid only.

use crate::node::Node;
use recalc_types::Scalar;
use std::fmt;

impl<T: Scalar + fmt::Debug> Node<T> {
    /// Render the tree structure as indented text, one node per line.
    ///
    /// Terminals show their current source value; expression nodes show
    /// their operator symbol and whether they are pending recomputation.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            Node::Terminal(t) => {
                out.push_str(&format!("in({:?})\n", t.source_value()));
            }
            Node::Expr(node) => {
                out.push_str(node.op.symbol());
                if node.dirty {
                    out.push_str(" (dirty)");
                }
                out.push('\n');
                for child in &node.children {
                    child.pretty_into(out, depth + 1);
                }
            }
        }
    }
}
