//! Result and error types for domprobe.

use thiserror::Error;

/// Result type for domprobe operations
pub type DomResult<T> = Result<T, DomError>;

/// Errors raised by the in-memory collaborators and configuration loaders.
///
/// The helper itself never produces a not-found error; zero matches are
/// reported as empty results.
#[derive(Debug, Error)]
pub enum DomError {
    /// Selector could not be parsed
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// The raw selector text
        selector: String,
        /// What went wrong
        message: String,
    },

    /// Tree queried before any render pass
    #[error("Tree has not been rendered yet; call detect_changes() first")]
    NotRendered,

    /// Template failed to produce a tree
    #[error("Render failed: {message}")]
    RenderFailed {
        /// Error message
        message: String,
    },

    /// Configuration rejected
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl DomError {
    /// Build an [`DomError::InvalidSelector`]
    pub(crate) fn invalid_selector(selector: &str, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            message: message.into(),
        }
    }
}
