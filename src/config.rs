//! View Configuration
//!
//! Registration and re-render settings for the todo item element.

use serde::{Deserialize, Serialize};

/// Tag the element is registered under by default
pub const DEFAULT_TAG_NAME: &str = "todo-item";

/// When an attached element renders again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPolicy {
    /// Render once on attach; later attribute changes need an explicit render
    #[default]
    OnAttach,
    /// Also render whenever `title` or `checked` changes after attach
    Observe,
}

/// Element configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Tag name matched in the document
    pub tag_name: String,
    pub render_policy: RenderPolicy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            render_policy: RenderPolicy::default(),
        }
    }
}

impl ViewConfig {
    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn observes_attributes(&self) -> bool {
        self.render_policy == RenderPolicy::Observe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewConfig::default();
        assert_eq!(config.tag_name, "todo-item");
        assert_eq!(config.render_policy, RenderPolicy::OnAttach);
        assert!(!config.observes_attributes());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ViewConfig::from_json(r#"{"render_policy":"observe"}"#).unwrap();
        assert_eq!(config.tag_name, DEFAULT_TAG_NAME);
        assert!(config.observes_attributes());

        let config = ViewConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewConfig::default());

        let config = ViewConfig::from_json(r#"{"tag_name":"task-row"}"#).unwrap();
        assert_eq!(config.tag_name, "task-row");
        assert_eq!(config.render_policy, RenderPolicy::OnAttach);
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        assert!(ViewConfig::from_json(r#"{"render_policy":"always"}"#).is_err());
        assert!(ViewConfig::from_json("not json").is_err());
    }
}
