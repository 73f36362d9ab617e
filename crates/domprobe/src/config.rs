//! Helper configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::result::{DomError, DomResult};
use crate::selector::Selector;

/// Default selector for activatable buttons
pub const DEFAULT_BUTTON_SELECTOR: &str = "button";

/// Which matching buttons `click_button` activates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickPolicy {
    /// Every button whose text matches, in document order
    #[default]
    All,
    /// Only the first matching button
    FirstMatch,
}

/// Configuration for [`crate::DomHelper`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomHelperConfig {
    /// Selector that identifies buttons for `click_button`
    pub button_selector: Selector,
    /// How many matching buttons get activated
    pub click_policy: ClickPolicy,
}

impl Default for DomHelperConfig {
    fn default() -> Self {
        Self {
            button_selector: Selector::css(DEFAULT_BUTTON_SELECTOR),
            click_policy: ClickPolicy::All,
        }
    }
}

impl DomHelperConfig {
    /// Create the default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button selector
    #[must_use]
    pub fn with_button_selector(mut self, selector: impl Into<Selector>) -> Self {
        self.button_selector = selector.into();
        self
    }

    /// Set the click policy
    #[must_use]
    pub const fn with_click_policy(mut self, policy: ClickPolicy) -> Self {
        self.click_policy = policy;
        self
    }

    /// Check the config is usable
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Config`] if the button selector is blank.
    pub fn validate(&self) -> DomResult<()> {
        if self.button_selector.as_str().trim().is_empty() {
            return Err(DomError::Config {
                message: "button_selector must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Load from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json_str(json: &str) -> DomResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML document
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or fails validation.
    pub fn from_yaml_str(yaml: &str) -> DomResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown
    /// extension, or fails to parse.
    pub fn from_file(path: impl AsRef<Path>) -> DomResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let contents = fs::read_to_string(path)?;
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents),
            Some("yaml" | "yml") => Self::from_yaml_str(&contents),
            _ => Err(DomError::Config {
                message: format!("unsupported config file: {}", path.display()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default() {
        let config = DomHelperConfig::default();
        assert_eq!(config.button_selector.as_str(), "button");
        assert_eq!(config.click_policy, ClickPolicy::All);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DomHelperConfig::new()
            .with_button_selector("[role=button]")
            .with_click_policy(ClickPolicy::FirstMatch);
        assert_eq!(config.button_selector.as_str(), "[role=button]");
        assert_eq!(config.click_policy, ClickPolicy::FirstMatch);
    }

    #[test]
    fn test_blank_selector_rejected() {
        let config = DomHelperConfig::new().with_button_selector("  ");
        assert!(matches!(config.validate(), Err(DomError::Config { .. })));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = DomHelperConfig::from_json_str(r#"{"click_policy": "first_match"}"#).unwrap();
        assert_eq!(config.click_policy, ClickPolicy::FirstMatch);
        assert_eq!(config.button_selector.as_str(), "button");
    }

    #[test]
    fn test_button_selector_serializes_as_plain_string() {
        let config = DomHelperConfig::new().with_button_selector("a.btn");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["button_selector"], "a.btn");
        assert_eq!(json["click_policy"], "all");
        let back: DomHelperConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_json_rejects_blank_selector() {
        let err = DomHelperConfig::from_json_str(r#"{"button_selector": ""}"#).unwrap_err();
        assert!(matches!(err, DomError::Config { .. }));
    }

    #[test]
    fn test_from_yaml() {
        let config =
            DomHelperConfig::from_yaml_str("button_selector: \"a.btn\"\nclick_policy: all\n")
                .unwrap();
        assert_eq!(config.button_selector.as_str(), "a.btn");
        assert_eq!(config.click_policy, ClickPolicy::All);
    }

    #[test]
    fn test_from_yaml_unknown_policy() {
        let err = DomHelperConfig::from_yaml_str("click_policy: sometimes\n").unwrap_err();
        assert!(matches!(err, DomError::Yaml(_)));
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("dom.json");
        fs::write(&json_path, r#"{"button_selector": "input[type=submit]"}"#).unwrap();
        let config = DomHelperConfig::from_file(&json_path).unwrap();
        assert_eq!(config.button_selector.as_str(), "input[type=submit]");

        let yaml_path = dir.path().join("dom.yml");
        let mut file = fs::File::create(&yaml_path).unwrap();
        writeln!(file, "click_policy: first_match").unwrap();
        let config = DomHelperConfig::from_file(&yaml_path).unwrap();
        assert_eq!(config.click_policy, ClickPolicy::FirstMatch);
    }

    #[test]
    fn test_from_file_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dom.toml");
        fs::write(&path, "click_policy = 'all'").unwrap();
        assert!(matches!(
            DomHelperConfig::from_file(&path),
            Err(DomError::Config { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DomHelperConfig::from_file(dir.path().join("absent.json")),
            Err(DomError::Io(_))
        ));
    }
}
