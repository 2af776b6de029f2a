//! Caller-facing input handles and the engine-side terminal leaf.

use crate::node::Node;
use recalc_types::Scalar;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A handle to an externally mutable value that a tree can observe.
///
/// The value lives in a shared cell: the caller keeps the `Input` and
/// mutates it freely between refreshes; every terminal bound from it
/// observes the same cell. Cloning an `Input` clones the handle, not
/// the value.
#[derive(Clone)]
pub struct Input<T> {
    cell: Rc<RefCell<T>>,
}

impl<T: Scalar> Input<T> {
    /// Create a new input holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }

    /// Replace the current value.
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }

    /// Mutate the current value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.cell.borrow_mut());
    }

    /// Wrap this input as a terminal leaf for inclusion in a tree.
    ///
    /// Each call produces a fresh terminal with its own cache; all of
    /// them observe the same underlying cell.
    pub fn bind(&self) -> Node<T> {
        Node::Terminal(Terminal::new(Rc::clone(&self.cell)))
    }
}

impl<T: Scalar + fmt::Debug> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Input").field(&*self.cell.borrow()).finish()
    }
}

/// A leaf node: a shared source cell plus an owned cached copy.
///
/// A terminal has no dirty flag — its staleness is derived on demand by
/// comparing the cache against the live source. The cache starts out
/// `None` ("never evaluated"), so a fresh terminal is stale on its first
/// refresh even when the source happens to hold `T::default()`.
pub struct Terminal<T> {
    source: Rc<RefCell<T>>,
    cache: Option<T>,
}

impl<T: Scalar> Terminal<T> {
    pub(crate) fn new(source: Rc<RefCell<T>>) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    /// Whether the cached copy has diverged from the live source.
    pub fn is_stale(&self) -> bool {
        match &self.cache {
            Some(cached) => *cached != *self.source.borrow(),
            None => true,
        }
    }

    /// Copy the live source into the cache and return the new value.
    pub(crate) fn refresh(&mut self) -> T {
        let value = self.source.borrow().clone();
        self.cache = Some(value.clone());
        value
    }

    pub(crate) fn source_value(&self) -> T {
        self.source.borrow().clone()
    }
}

impl<T: Scalar + fmt::Debug> fmt::Debug for Terminal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("source", &*self.source.borrow())
            .field("cache", &self.cache)
            .finish()
    }
}
