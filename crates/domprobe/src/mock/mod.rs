//! In-memory collaborators for testing without a UI framework.
//!
//! [`MockTree`] and [`MockElement`] stand in for a framework's rendered
//! output, [`MockFixture`] for its component test bed, and [`Spy`] for a
//! call-recording double.
//!
//! ## Example
//!
//! ```rust,ignore
//! use domprobe::mock::{MockElement, MockFixture, Spy};
//! use domprobe::DomHelper;
//!
//! let deleted = Spy::named("delete_product");
//! let recorder = deleted.clone();
//! let fixture = MockFixture::new((), move |_| {
//!     let recorder = recorder.clone();
//!     Ok(MockElement::new("app-list").child(
//!         MockElement::new("button").text("Delete").on_click(move || recorder.record(())),
//!     ))
//! });
//! fixture.detect_changes()?;
//! DomHelper::new(&fixture).click_button("Delete")?;
//! assert_eq!(deleted.call_count(), 1);
//! ```

pub mod element;
pub mod fixture;
pub mod spy;
pub mod tree;

pub use element::{ClickHandler, MockChild, MockElement, MockNode};
pub use fixture::{MockFixture, Template};
pub use spy::Spy;
pub use tree::MockTree;
