//! Call-recording test doubles.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

/// Records every call made through it.
///
/// Clones share the same log, so one clone can live inside a click handler
/// while the test keeps another to assert on.
///
/// ```ignore
/// let delete = Spy::<Product>::named("delete_product");
/// let recorder = delete.clone();
/// let button = MockElement::new("button").on_click(move || recorder.record(product.clone()));
/// // ... click ...
/// assert_eq!(delete.call_count(), 1);
/// ```
pub struct Spy<A> {
    name: Rc<str>,
    calls: Rc<RefCell<Vec<A>>>,
}

impl<A> Clone for Spy<A> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Spy<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spy")
            .field("name", &self.name)
            .field("calls", &self.calls.borrow())
            .finish()
    }
}

impl<A> Default for Spy<A> {
    fn default() -> Self {
        Self::named("spy")
    }
}

impl<A> Spy<A> {
    /// Create an anonymous spy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spy with a name used in logs
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Rc::from(name),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Name given at creation
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record one call
    pub fn record(&self, args: A) {
        let mut calls = self.calls.borrow_mut();
        calls.push(args);
        trace!(spy = %self.name, count = calls.len(), "called");
    }

    /// Number of recorded calls
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether any call was recorded
    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Forget all recorded calls
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl<A: Clone> Spy<A> {
    /// Snapshot of the recorded arguments, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<A> {
        self.calls.borrow().clone()
    }

    /// Arguments of the most recent call
    #[must_use]
    pub fn last_call(&self) -> Option<A> {
        self.calls.borrow().last().cloned()
    }
}

impl<A: PartialEq> Spy<A> {
    /// Whether some call had exactly these arguments
    #[must_use]
    pub fn was_called_with(&self, args: &A) -> bool {
        self.calls.borrow().iter().any(|a| a == args)
    }
}
