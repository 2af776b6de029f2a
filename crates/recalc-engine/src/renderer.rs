//! Type-erased refresh handles.
//!
//! A holder (a UI element, say) needs to re-render from trees of
//! varying shape and value type through one fixed call signature. The
//! erasure is a plain trait object: one concrete wrapper per bound
//! tree, a single no-argument method.

use crate::memo::Memo;
use crate::node::Node;
use recalc_types::Scalar;

/// A bound tree that can be refreshed without knowing its shape.
pub trait Refresh {
    /// Recompute whatever is stale and deliver the result.
    fn refresh(&mut self);
}

/// A [`Memo`] paired with the callback that consumes its value.
struct Bound<T, F> {
    memo: Memo<T>,
    on_value: F,
}

impl<T: Scalar, F: FnMut(T)> Refresh for Bound<T, F> {
    fn refresh(&mut self) {
        let value = self.memo.refresh();
        (self.on_value)(value);
    }
}

/// A re-bindable holder for one type-erased tree.
///
/// Created empty, bound once to an expression and a value callback,
/// then invoked many times via [`render`](Self::render). Rendering
/// while unbound is a no-op.
#[derive(Default)]
pub struct Renderer {
    bound: Option<Box<dyn Refresh>>,
}

impl Renderer {
    /// Create an unbound renderer.
    pub fn new() -> Self {
        Self { bound: None }
    }

    /// Bind an expression tree; `on_value` receives the root value on
    /// every render. Replaces any previous binding.
    pub fn bind<T, F>(&mut self, expr: Node<T>, on_value: F)
    where
        T: Scalar + 'static,
        F: FnMut(T) + 'static,
    {
        self.bound = Some(Box::new(Bound {
            memo: Memo::new(expr),
            on_value,
        }));
    }

    /// Refresh the bound tree, if any.
    pub fn render(&mut self) {
        if let Some(bound) = &mut self.bound {
            bound.refresh();
        }
    }

    /// Whether a tree has been bound.
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }
}
