//! Selectors for querying a rendered tree.
//!
//! A [`Selector`] is the raw CSS query handed across the tree boundary.
//! Trees that evaluate it locally (the mock tree does) call
//! [`Selector::parse`], which compiles it with `scraper`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::result::{DomError, DomResult};

/// A query for nodes in a rendered tree.
///
/// Construction never fails; parsing happens in the tree that evaluates it,
/// so a malformed selector surfaces as that tree's error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// Create a selector from CSS query text
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// The raw query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compile into a matchable `scraper` selector
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] when the text is not a valid
    /// CSS selector list.
    pub fn parse(&self) -> DomResult<scraper::Selector> {
        scraper::Selector::parse(&self.0)
            .map_err(|e| DomError::invalid_selector(&self.0, e.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self::css(value)
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&Selector> for Selector {
    fn from(value: &Selector) -> Self {
        value.clone()
    }
}
