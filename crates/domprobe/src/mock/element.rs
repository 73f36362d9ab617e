//! In-memory elements and node handles.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::tree::RenderedNode;

/// Click handler bound to an element
pub type ClickHandler = Rc<dyn Fn()>;

/// A child of a [`MockElement`]: a text run or a nested element
#[derive(Clone)]
pub enum MockChild {
    /// Literal text
    Text(String),
    /// Nested element
    Element(Rc<MockElement>),
}

impl fmt::Debug for MockChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Element(element) => fmt::Debug::fmt(element, f),
        }
    }
}

/// An element in a mock rendered tree.
///
/// Built with chained `with_*` calls, the way a template would emit it.
/// `id` and `class` are ordinary attributes: `with_id` and `with_class` are
/// shorthands for them, so every accessor and selector sees one value.
///
///
/// ```ignore
/// let item = MockElement::new("li")
///     .child(MockElement::new("span").text("Alpha -- 1"))
///     .child(MockElement::new("button").text("Delete").on_click(move || spy.record(())));
/// ```
#[derive(Clone)]
pub struct MockElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<MockChild>,
    handlers: Vec<ClickHandler>,
}

impl fmt::Debug for MockElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockElement")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl MockElement {
    /// Creates an empty element with the given tag
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// Sets the `id` attribute
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    /// Appends a class to the `class` attribute
    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        if self.has_class(&class) {
            return self;
        }
        let list = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class,
        };
        self.with_attr("class", list)
    }

    /// Sets an attribute, replacing any previous value
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter().position(|(n, _)| *n == name) {
            Some(i) => self.attributes[i].1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Appends a text run
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MockChild::Text(text.into()));
        self
    }

    /// Appends a child element
    #[must_use]
    pub fn child(mut self, child: MockElement) -> Self {
        self.children.push(MockChild::Element(Rc::new(child)));
        self
    }

    /// Appends several child elements
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = MockElement>) -> Self {
        self.children
            .extend(children.into_iter().map(|c| MockChild::Element(Rc::new(c))));
        self
    }

    /// Binds a click handler; handlers run in the order they were bound
    #[must_use]
    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.handlers.push(Rc::new(handler));
        self
    }

    /// Tag name
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `id` attribute, if set
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Classes from the `class` attribute, in order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    /// Whether the `class` attribute lists `class`
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Attributes in the order they were first set
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Attribute value, if set
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element is disabled
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.attribute("disabled").is_some()
    }

    /// Direct children, text runs included
    #[must_use]
    pub fn child_nodes(&self) -> &[MockChild] {
        &self.children
    }

    /// Direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Rc<MockElement>> {
        self.children.iter().filter_map(|c| match c {
            MockChild::Element(e) => Some(e),
            MockChild::Text(_) => None,
        })
    }

    /// Number of bound click handlers
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// All descendant text concatenated in document order, untrimmed
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.append_text(&mut out);
        out
    }

    fn append_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                MockChild::Text(text) => out.push_str(text),
                MockChild::Element(element) => element.append_text(out),
            }
        }
    }

    /// Dispatches a click: runs every handler once, unless disabled
    pub fn click(&self) {
        if self.is_disabled() {
            trace!(tag = %self.tag, "click ignored on disabled element");
            return;
        }
        trace!(tag = %self.tag, handlers = self.handlers.len(), "click");
        // Clone first so a handler that re-renders can't invalidate the list.
        let handlers = self.handlers.clone();
        for handler in handlers {
            handler();
        }
    }
}

/// Handle to an element returned by a [`super::MockTree`] query.
///
/// Holds its own reference, so it stays usable after the tree re-renders.
#[derive(Debug, Clone)]
pub struct MockNode(Rc<MockElement>);

impl MockNode {
    pub(crate) fn new(element: Rc<MockElement>) -> Self {
        Self(element)
    }

    /// The underlying element
    #[must_use]
    pub fn element(&self) -> &MockElement {
        &self.0
    }

    /// Attribute value, if set
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.0.attribute(name)
    }
}

impl RenderedNode for MockNode {
    fn tag_name(&self) -> String {
        self.0.tag.clone()
    }

    fn text_content(&self) -> String {
        self.0.text_content()
    }

    fn click(&self) {
        self.0.click();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_text_content_concatenates_descendants() {
        let li = MockElement::new("li")
            .text("[")
            .child(MockElement::new("span").text("Alpha -- 1"))
            .child(MockElement::new("button").text("Delete"))
            .text("]");
        assert_eq!(li.text_content(), "[Alpha -- 1Delete]");
    }

    #[test]
    fn test_text_content_keeps_whitespace() {
        let span = MockElement::new("span").text("  padded ");
        assert_eq!(span.text_content(), "  padded ");
    }

    #[test]
    fn test_empty_element_has_empty_text() {
        assert_eq!(MockElement::new("ul").text_content(), "");
    }

    #[test]
    fn test_click_runs_each_handler_once_in_order() {
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));
        let button = MockElement::new("button")
            .on_click(move || a.borrow_mut().push("first"))
            .on_click(move || b.borrow_mut().push("second"));
        button.click();
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_disabled_element_ignores_click() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let button = MockElement::new("button")
            .with_attr("disabled", "")
            .on_click(move || counter.set(counter.get() + 1));
        button.click();
        assert_eq!(hits.get(), 0);
        assert!(button.is_disabled());
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el = MockElement::new("input")
            .with_attr("type", "text")
            .with_attr("type", "submit");
        assert_eq!(el.attribute("type"), Some("submit"));
    }

    #[test]
    fn test_duplicate_class_ignored() {
        let el = MockElement::new("li").with_class("item").with_class("item");
        assert_eq!(el.classes().collect::<Vec<_>>(), vec!["item"]);
        assert_eq!(el.attribute("class"), Some("item"));
    }

    #[test]
    fn test_id_and_class_shorthands_write_attributes() {
        let el = MockElement::new("a").with_id("home").with_class("nav").with_class("top");
        assert_eq!(el.attribute("id"), Some("home"));
        assert_eq!(el.attribute("class"), Some("nav top"));
        assert_eq!(MockElement::new("a").id(), None);
    }

    #[test]
    fn test_raw_id_and_class_attributes_are_visible() {
        let el = MockElement::new("a")
            .with_attr("id", "home")
            .with_attr("class", " nav  primary ");
        assert_eq!(el.id(), Some("home"));
        assert!(el.has_class("nav"));
        assert!(el.has_class("primary"));
        assert!(!el.has_class("nav primary"));
        assert_eq!(el.classes().collect::<Vec<_>>(), vec!["nav", "primary"]);
    }

    #[test]
    fn test_class_attr_replaces_shorthand_classes() {
        let el = MockElement::new("a")
            .with_class("old")
            .with_attr("class", "new")
            .with_class("extra");
        assert!(!el.has_class("old"));
        assert_eq!(el.attribute("class"), Some("new extra"));
    }

    #[test]
    fn test_node_handle_delegates() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let node = MockNode::new(Rc::new(
            MockElement::new("button")
                .text("+")
                .on_click(move || counter.set(counter.get() + 1)),
        ));
        assert_eq!(node.tag_name(), "button");
        assert_eq!(node.text_content(), "+");
        node.click();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_child_elements_skips_text() {
        let ul = MockElement::new("ul")
            .text("\n")
            .children((0..3).map(|_| MockElement::new("li")));
        assert_eq!(ul.child_elements().count(), 3);
        assert_eq!(ul.child_nodes().len(), 4);
    }
}
