//! The queryable node tree boundary.
//!
//! The helper never talks to a rendering engine directly. A test harness
//! hands it a [`ComponentFixture`], whose [`RenderedTree`] answers selector
//! queries with [`RenderedNode`] handles. A real framework binding and the
//! in-memory [`crate::mock`] tree both sit behind these traits.

use crate::selector::Selector;

/// A single rendered node.
pub trait RenderedNode {
    /// Tag name as rendered (e.g. `"button"`)
    fn tag_name(&self) -> String;

    /// Concatenated text of the node and all its descendants, untrimmed
    fn text_content(&self) -> String;

    /// Simulate a user activation, running whatever handlers are bound
    fn click(&self);
}

/// A tree of rendered nodes that can be searched by selector.
pub trait RenderedTree {
    /// Handle type returned by queries
    type Node: RenderedNode;

    /// Failure raised by the tree itself (e.g. queried before rendering)
    type Error;

    /// All nodes matching `selector`, in document order.
    ///
    /// Zero matches is `Ok(vec![])`, never an error.
    ///
    /// # Errors
    ///
    /// Whatever the tree reports; callers pass it through untouched.
    fn query_all(&self, selector: &Selector) -> Result<Vec<Self::Node>, Self::Error>;

    /// First node matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Same as [`RenderedTree::query_all`].
    fn query(&self, selector: &Selector) -> Result<Option<Self::Node>, Self::Error> {
        Ok(self.query_all(selector)?.into_iter().next())
    }
}

/// A rendered component under test together with its tree.
pub trait ComponentFixture {
    /// The component type under test
    type Component;

    /// The tree the component renders into
    type Tree: RenderedTree;

    /// The component instance
    fn component_instance(&self) -> &Self::Component;

    /// The root of the rendered output
    fn debug_element(&self) -> &Self::Tree;

    /// Run a render pass so the tree reflects current component state
    ///
    /// # Errors
    ///
    /// Whatever the tree reports for a failed render.
    fn detect_changes(&self) -> Result<(), <Self::Tree as RenderedTree>::Error>;
}

/// Error type of a fixture's tree
pub type TreeError<F> = <<F as ComponentFixture>::Tree as RenderedTree>::Error;

/// Node handle type of a fixture's tree
pub type TreeNode<F> = <<F as ComponentFixture>::Tree as RenderedTree>::Node;
