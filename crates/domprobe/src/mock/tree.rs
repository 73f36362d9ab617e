//! In-memory rendered tree.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use scraper::Html;
use tracing::trace;

use super::element::{MockChild, MockElement, MockNode};
use crate::result::{DomError, DomResult};
use crate::selector::Selector;
use crate::tree::RenderedTree;

/// Marks each mirrored element with its preorder position in the mock tree
const INDEX_ATTR: &str = "data-domprobe-index";

/// Elements that take no end tag
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A rendered tree held in memory.
///
/// The tree has a host element (the component's own tag). Queries search
/// the host's descendants in document order, never the host itself.
/// Querying before the first [`MockTree::render`] fails with
/// [`DomError::NotRendered`].
///
/// Selectors are evaluated by `scraper` against an HTML mirror of the
/// tree, so the mirror follows HTML parsing rules: a `p` is closed by a
/// block child, table parts outside a `table` are dropped, and `script`,
/// `style`, `textarea` and `title` hold text only. Elements the parser
/// drops or moves never match.
#[derive(Default)]
pub struct MockTree {
    host: RefCell<Option<Rc<MockElement>>>,
    renders: Cell<usize>,
}

impl fmt::Debug for MockTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTree")
            .field("host", &self.host.borrow().as_ref().map(|h| h.tag().to_string()))
            .field("renders", &self.renders.get())
            .finish()
    }
}

impl MockTree {
    /// Create an unrendered tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree already rendered with `host`
    #[must_use]
    pub fn rendered(host: MockElement) -> Self {
        let tree = Self::new();
        tree.render(host);
        tree
    }

    /// Replace the whole tree with a new host element
    pub fn render(&self, host: MockElement) {
        trace!(host = %host.tag(), "render");
        *self.host.borrow_mut() = Some(Rc::new(host));
        self.renders.set(self.renders.get() + 1);
    }

    /// Drop the rendered output; queries fail until the next render
    pub fn clear(&self) {
        *self.host.borrow_mut() = None;
    }

    /// Whether a render has happened since creation or the last clear
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.host.borrow().is_some()
    }

    /// Number of completed renders
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    /// Handle to the host element
    #[must_use]
    pub fn host(&self) -> Option<MockNode> {
        self.host.borrow().as_ref().map(|h| MockNode::new(Rc::clone(h)))
    }
}

impl RenderedTree for MockTree {
    type Node = MockNode;
    type Error = DomError;

    fn query_all(&self, selector: &Selector) -> DomResult<Vec<MockNode>> {
        let parsed = selector.parse()?;
        // Release the borrow before returning so click handlers may re-render.
        let host = self.host.borrow().clone().ok_or(DomError::NotRendered)?;

        let mut mirror = Mirror::default();
        mirror.element(&host);
        let document = Html::parse_fragment(&mirror.markup);

        let mut positions: Vec<usize> = document
            .select(&parsed)
            .filter_map(|el| el.value().attr(INDEX_ATTR))
            .filter_map(|index| index.parse().ok())
            .filter(|&index| index != 0)
            .collect();
        positions.sort_unstable();
        positions.dedup();

        let found: Vec<MockNode> = positions
            .into_iter()
            .filter_map(|index| mirror.nodes.get(index))
            .map(|element| MockNode::new(Rc::clone(element)))
            .collect();
        trace!(selector = %selector, matches = found.len(), "query_all");
        Ok(found)
    }
}

/// HTML rendition of a mock tree plus the elements in preorder
#[derive(Default)]
struct Mirror {
    markup: String,
    nodes: Vec<Rc<MockElement>>,
}

impl Mirror {
    fn element(&mut self, element: &Rc<MockElement>) {
        let index = self.nodes.len();
        self.nodes.push(Rc::clone(element));

        self.markup.push('<');
        self.markup.push_str(element.tag());
        self.attribute(INDEX_ATTR, &index.to_string());
        for (name, value) in element.attributes() {
            if is_attribute_name(name) && !name.eq_ignore_ascii_case(INDEX_ATTR) {
                self.attribute(name, value);
            }
        }
        self.markup.push('>');

        for child in element.child_nodes() {
            match child {
                MockChild::Text(text) => escape_into(&mut self.markup, text, false),
                MockChild::Element(nested) => self.element(nested),
            }
        }

        if !VOID_TAGS.iter().any(|tag| element.tag().eq_ignore_ascii_case(tag)) {
            self.markup.push_str("</");
            self.markup.push_str(element.tag());
            self.markup.push('>');
        }
    }

    fn attribute(&mut self, name: &str, value: &str) {
        self.markup.push(' ');
        self.markup.push_str(name);
        self.markup.push_str("=\"");
        escape_into(&mut self.markup, value, true);
        self.markup.push('"');
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}

fn escape_into(out: &mut String, text: &str, in_attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
