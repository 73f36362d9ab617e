//! DOM inspection helper.
//!
//! [`DomHelper`] wraps a [`ComponentFixture`] and answers the questions
//! component tests ask over and over: what does the first `h2` say, how many
//! `li` are there, how many buttons read "Delete", click the "+" button.
//!
//! Every call re-queries the fixture's tree; nothing is cached between
//! calls. Zero matches are reported as `None` / `0` / empty, never as an
//! error. Errors only come from the tree itself and are returned untouched.
//!
//! The helper never waits for rendering. After [`DomHelper::click_button`]
//! the caller runs [`ComponentFixture::detect_changes`] before querying
//! again.
//!
//! # Example
//!
//! ```ignore
//! let fixture = MockFixture::new(ProductsList::default(), render_products);
//! fixture.detect_changes()?;
//! let dh = DomHelper::new(&fixture);
//!
//! assert_eq!(dh.single_text("h2")?.as_deref(), Some("List all Products"));
//! assert_eq!(dh.count("li")?, 0);
//! dh.click_button("+")?;
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::config::{ClickPolicy, DomHelperConfig};
use crate::selector::Selector;
use crate::tree::{ComponentFixture, RenderedNode, RenderedTree, TreeError, TreeNode};

/// Query facade over a component fixture's rendered tree.
pub struct DomHelper<'f, F: ComponentFixture> {
    fixture: &'f F,
    config: DomHelperConfig,
}

impl<F: ComponentFixture> fmt::Debug for DomHelper<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomHelper")
            .field("fixture", &std::any::type_name::<F>())
            .field("config", &self.config)
            .finish()
    }
}

impl<'f, F: ComponentFixture> DomHelper<'f, F> {
    /// Wrap a fixture with the default configuration
    #[must_use]
    pub fn new(fixture: &'f F) -> Self {
        Self::with_config(fixture, DomHelperConfig::default())
    }

    /// Wrap a fixture with a custom configuration
    #[must_use]
    pub fn with_config(fixture: &'f F, config: DomHelperConfig) -> Self {
        Self { fixture, config }
    }

    /// The wrapped fixture
    #[must_use]
    pub fn fixture(&self) -> &'f F {
        self.fixture
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &DomHelperConfig {
        &self.config
    }

    /// Text content of the first node matching `tag`, or `None`.
    pub fn single_text(&self, tag: impl Into<Selector>) -> Result<Option<String>, TreeError<F>> {
        let selector = tag.into();
        let text = self
            .fixture
            .debug_element()
            .query(&selector)?
            .map(|node| node.text_content());
        debug!(selector = %selector, found = text.is_some(), "single_text");
        Ok(text)
    }

    /// Number of nodes matching `tag`.
    pub fn count(&self, tag: impl Into<Selector>) -> Result<usize, TreeError<F>> {
        let selector = tag.into();
        let count = self.query_all(&selector)?.len();
        debug!(selector = %selector, count, "count");
        Ok(count)
    }

    /// Number of nodes matching `tag` whose text content is exactly `text`.
    ///
    /// No trimming: `" Delete "` does not count as `"Delete"`.
    pub fn count_text(&self, tag: impl Into<Selector>, text: &str) -> Result<usize, TreeError<F>> {
        let selector = tag.into();
        let count = self
            .query_all(&selector)?
            .iter()
            .filter(|node| node.text_content() == text)
            .count();
        debug!(selector = %selector, text, count, "count_text");
        Ok(count)
    }

    /// Activate the buttons whose text content is exactly `text`.
    ///
    /// With the default [`ClickPolicy::All`] every match is clicked, in
    /// document order, so two "Delete" buttons mean two activations.
    pub fn click_button(&self, text: &str) -> Result<(), TreeError<F>> {
        let limit = match self.config.click_policy {
            ClickPolicy::All => usize::MAX,
            ClickPolicy::FirstMatch => 1,
        };
        let buttons = self.query_all(&self.config.button_selector)?;
        let mut clicked = 0usize;
        for button in buttons
            .iter()
            .filter(|b| b.text_content() == text)
            .take(limit)
        {
            trace!(tag = %button.tag_name(), text, "activating");
            button.click();
            clicked += 1;
        }
        debug!(text, clicked, policy = ?self.config.click_policy, "click_button");
        Ok(())
    }

    /// All nodes matching `tag`, in document order.
    pub fn find_all(&self, tag: impl Into<Selector>) -> Result<Vec<TreeNode<F>>, TreeError<F>> {
        let selector = tag.into();
        let nodes = self.query_all(&selector)?;
        debug!(selector = %selector, count = nodes.len(), "find_all");
        Ok(nodes)
    }

    fn query_all(&self, selector: &Selector) -> Result<Vec<TreeNode<F>>, TreeError<F>> {
        self.fixture.debug_element().query_all(selector)
    }
}
