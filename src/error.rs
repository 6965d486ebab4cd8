//! View Errors
//!
//! Failures of the browser binding. Rendering itself never fails.

use wasm_bindgen::JsValue;

/// Common result type for binding operations
pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// No global `window` (not running in a browser page)
    NoWindow,
    /// The window has no document
    NoDocument,
    /// The tag was already registered on this page
    AlreadyDefined(String),
    /// A DOM call threw
    Js(String),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::NoWindow => write!(f, "No window available"),
            ViewError::NoDocument => write!(f, "No document available"),
            ViewError::AlreadyDefined(tag) => write!(f, "Element already defined: {}", tag),
            ViewError::Js(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<JsValue> for ViewError {
    fn from(value: JsValue) -> Self {
        ViewError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ViewError::NoWindow.to_string(), "No window available");
        assert_eq!(
            ViewError::AlreadyDefined("todo-item".to_string()).to_string(),
            "Element already defined: todo-item"
        );
        assert_eq!(ViewError::Js("boom".to_string()).to_string(), "DOM error: boom");
    }
}
