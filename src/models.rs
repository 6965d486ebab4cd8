//! Frontend Models
//!
//! Typed view state for a todo item row and its attribute encoding.

use serde::{Deserialize, Serialize};

/// Attribute holding the label text
pub const TITLE_ATTR: &str = "title";
/// Attribute holding the checkbox state ("true" means checked)
pub const CHECKED_ATTR: &str = "checked";

/// View state of a single todo row
///
/// Derived entirely from the `title` and `checked` attributes of the
/// backing element; nothing else feeds the rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    pub title: String,
    pub checked: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>, checked: bool) -> Self {
        Self {
            title: title.into(),
            checked,
        }
    }

    /// Decode the state from raw attribute values
    ///
    /// A missing title becomes an empty label. Only the exact string
    /// `"true"` counts as checked.
    pub fn from_attributes(title: Option<&str>, checked: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or_default().to_string(),
            checked: parse_checked(checked),
        }
    }

    /// Attribute string for the checked flag
    pub fn checked_attribute(&self) -> &'static str {
        if self.checked { "true" } else { "false" }
    }

    /// Encode the state as `(name, value)` attribute pairs
    pub fn to_attributes(&self) -> [(&'static str, String); 2] {
        [
            (TITLE_ATTR, self.title.clone()),
            (CHECKED_ATTR, self.checked_attribute().to_string()),
        ]
    }
}

/// Interpret a raw `checked` attribute value
pub fn parse_checked(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        let item = TodoItem::from_attributes(Some("Buy milk"), Some("true"));
        assert_eq!(item, TodoItem::new("Buy milk", true));

        let empty = TodoItem::from_attributes(None, None);
        assert_eq!(empty.title, "");
        assert!(!empty.checked);
    }

    #[test]
    fn test_only_literal_true_is_checked() {
        assert!(parse_checked(Some("true")));
        for value in ["false", "", "TRUE", "True", " true", "1", "checked"] {
            assert!(!parse_checked(Some(value)), "{:?} should be unchecked", value);
        }
        assert!(!parse_checked(None));
    }

    #[test]
    fn test_to_attributes() {
        let attrs = TodoItem::new("Walk dog", false).to_attributes();
        assert_eq!(attrs[0], (TITLE_ATTR, "Walk dog".to_string()));
        assert_eq!(attrs[1], (CHECKED_ATTR, "false".to_string()));

        let item = TodoItem::new("Walk dog", true);
        let [(_, title), (_, checked)] = item.to_attributes();
        assert_eq!(TodoItem::from_attributes(Some(&title), Some(&checked)), item);
    }

    #[test]
    fn test_serde_shape() {
        let item: TodoItem = serde_json::from_str(r#"{"title":"Read","checked":true}"#).unwrap();
        assert_eq!(item, TodoItem::new("Read", true));
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"title":"Read","checked":true}"#
        );
    }
}
