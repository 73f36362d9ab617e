//! domprobe: DOM inspection helper for component tests
//!
//! A small query facade over a rendered component's node tree. Tests ask
//! for the text of the first `h2`, the number of `li` elements, how many
//! buttons read "Delete", and click buttons by their text. The helper is
//! generic over the component fixture, so one helper serves every
//! component under test.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌───────────────────┐
//! │ Test         │     │ DomHelper<F>     │     │ RenderedTree      │
//! │ (#[test])    │────►│ single_text      │────►│ query_all(sel)    │
//! │              │     │ count/count_text │     │  -> RenderedNode  │
//! │              │     │ click_button     │     │     text / click  │
//! └──────┬───────┘     └──────────────────┘     └─────────▲─────────┘
//!        │ detect_changes()                               │
//!        └──────────────► ComponentFixture ───────────────┘
//! ```
//!
//! The rendering engine sits behind [`RenderedTree`]; [`mock`] provides an
//! in-memory tree and fixture so the helper can be exercised without one.
//! The mock evaluates CSS selectors with `scraper`.

#![warn(missing_docs)]

mod config;
#[allow(clippy::missing_errors_doc)]
mod helper;
/// Test-time log output
pub mod logging;
/// In-memory tree, fixture and spies
#[allow(clippy::missing_errors_doc, clippy::must_use_candidate)]
pub mod mock;
mod result;
mod selector;
mod tree;

pub use config::{ClickPolicy, DomHelperConfig, DEFAULT_BUTTON_SELECTOR};
pub use helper::DomHelper;
pub use result::{DomError, DomResult};
pub use selector::Selector;
pub use tree::{ComponentFixture, RenderedNode, RenderedTree, TreeError, TreeNode};

/// Everything a component test usually needs
pub mod prelude {
    pub use super::config::*;
    pub use super::helper::*;
    pub use super::mock::{MockElement, MockFixture, MockNode, MockTree, Spy};
    pub use super::result::*;
    pub use super::selector::Selector;
    pub use super::tree::*;
}
