//! Item View Element
//!
//! The todo row element: attribute-backed properties, a one-way attach
//! lifecycle and an explicit render entry point. Storage and inner content
//! live in an [`ElementHost`], so the same element drives a browser node or
//! an in-memory one.

use std::collections::BTreeMap;

use crate::config::RenderPolicy;
use crate::markup::render_fragment;
use crate::models::{TodoItem, CHECKED_ATTR, TITLE_ATTR};

/// Backing storage of an element: attributes and inner markup
pub trait ElementHost {
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&mut self, name: &str, value: &str);

    fn inner_html(&self) -> String;

    /// Replace the element's content
    fn set_inner_html(&mut self, html: &str);
}

/// Detached element kept in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    attributes: BTreeMap<String, String>,
    inner_html: String,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element with attributes preset, as if parsed from markup
    pub fn with_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            attributes: attrs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            inner_html: String::new(),
        }
    }
}

impl ElementHost for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn inner_html(&self) -> String {
        self.inner_html.clone()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.inner_html = html.to_string();
    }
}

/// Attach state of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unattached,
    /// Attached to a live document and rendered at least once
    Attached,
}

/// A todo row bound to a host element
#[derive(Debug)]
pub struct ItemView<H: ElementHost> {
    host: H,
    lifecycle: Lifecycle,
    policy: RenderPolicy,
}

impl<H: ElementHost> ItemView<H> {
    pub fn new(host: H, policy: RenderPolicy) -> Self {
        Self {
            host,
            lifecycle: Lifecycle::Unattached,
            policy,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn title(&self) -> Option<String> {
        self.host.attribute(TITLE_ATTR)
    }

    /// Store the title attribute verbatim
    pub fn set_title(&mut self, value: impl ToString) {
        self.host.set_attribute(TITLE_ATTR, &value.to_string());
        self.attribute_changed(TITLE_ATTR);
    }

    pub fn checked(&self) -> Option<String> {
        self.host.attribute(CHECKED_ATTR)
    }

    /// Store the checked attribute; only `"true"` renders as checked
    pub fn set_checked(&mut self, value: impl ToString) {
        self.host.set_attribute(CHECKED_ATTR, &value.to_string());
        self.attribute_changed(CHECKED_ATTR);
    }

    pub fn is_checked(&self) -> bool {
        self.state().checked
    }

    /// Typed view of the current attributes
    pub fn state(&self) -> TodoItem {
        TodoItem::from_attributes(self.title().as_deref(), self.checked().as_deref())
    }

    /// Write both attributes from a typed state
    pub fn set_state(&mut self, item: &TodoItem) {
        for (name, value) in item.to_attributes() {
            self.host.set_attribute(name, &value);
        }
        self.attribute_changed(TITLE_ATTR);
    }

    /// Attach hook: renders on the first call only
    pub fn connected(&mut self) {
        if self.lifecycle == Lifecycle::Attached {
            return;
        }
        self.lifecycle = Lifecycle::Attached;
        log::debug!("todo item attached: {:?}", self.title());
        self.render();
    }

    /// Removal hook: the view ends here and the host is handed back
    pub fn disconnected(self) -> H {
        log::debug!("todo item detached: {:?}", self.title());
        self.host
    }

    /// Attribute mutation hook
    ///
    /// Re-renders only an attached view under [`RenderPolicy::Observe`],
    /// and only for the two attributes the row reads.
    pub fn attribute_changed(&mut self, name: &str) {
        let observed = name == TITLE_ATTR || name == CHECKED_ATTR;
        if observed && self.lifecycle == Lifecycle::Attached && self.policy == RenderPolicy::Observe {
            self.render();
        }
    }

    /// Replace the inner content with the row for the current attributes
    pub fn render(&mut self) {
        let html = render_fragment(&self.state());
        self.host.set_inner_html(&html);
    }

    pub fn inner_html(&self) -> String {
        self.host.inner_html()
    }
}
