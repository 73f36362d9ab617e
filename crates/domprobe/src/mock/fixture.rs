//! Component fixture backed by a [`MockTree`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::element::MockElement;
use super::tree::MockTree;
use crate::result::DomResult;
use crate::tree::ComponentFixture;

/// Template that turns component state into a host element
pub type Template<C> = Box<dyn Fn(&Rc<RefCell<C>>) -> DomResult<MockElement>>;

/// A component instance, its template, and the tree it renders into.
///
/// Nothing is rendered until [`MockFixture::detect_changes`] runs, mirroring
/// a framework test bed: change the component, then detect changes, then
/// query. The template receives the shared component handle so that click
/// handlers it binds can call back into the component.
pub struct MockFixture<C> {
    component: Rc<RefCell<C>>,
    tree: MockTree,
    template: Template<C>,
}

impl<C> fmt::Debug for MockFixture<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockFixture")
            .field("component", &std::any::type_name::<C>())
            .field("tree", &self.tree)
            .finish()
    }
}

impl<C: 'static> MockFixture<C> {
    /// Create a fixture; the tree stays unrendered until the first
    /// [`MockFixture::detect_changes`]
    pub fn new<T>(component: C, template: T) -> Self
    where
        T: Fn(&Rc<RefCell<C>>) -> DomResult<MockElement> + 'static,
    {
        Self {
            component: Rc::new(RefCell::new(component)),
            tree: MockTree::new(),
            template: Box::new(template),
        }
    }

    /// Shared handle to the component
    #[must_use]
    pub fn component(&self) -> &Rc<RefCell<C>> {
        &self.component
    }

    /// Mutate the component without rendering
    pub fn update<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.component.borrow_mut())
    }

    /// The tree
    #[must_use]
    pub fn tree(&self) -> &MockTree {
        &self.tree
    }

    /// Re-run the template and render its output.
    ///
    /// A failing template leaves the previous output in place.
    ///
    /// # Errors
    ///
    /// Returns whatever the template returns.
    pub fn detect_changes(&self) -> DomResult<()> {
        let host = (self.template)(&self.component)?;
        self.tree.render(host);
        debug!(
            component = std::any::type_name::<C>(),
            pass = self.tree.render_count(),
            "detect_changes"
        );
        Ok(())
    }

    /// Number of completed render passes
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.tree.render_count()
    }
}

impl<C: 'static> ComponentFixture for MockFixture<C> {
    type Component = Rc<RefCell<C>>;
    type Tree = MockTree;

    fn component_instance(&self) -> &Rc<RefCell<C>> {
        &self.component
    }

    fn debug_element(&self) -> &MockTree {
        &self.tree
    }

    fn detect_changes(&self) -> DomResult<()> {
        MockFixture::detect_changes(self)
    }
}
