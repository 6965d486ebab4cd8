//! Browser Binding
//!
//! Registers the todo item tag on the page. Elements found in the document
//! are attached right away; a `MutationObserver` attaches elements inserted
//! later, drops removed ones and forwards attribute changes.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, MutationRecord, NodeList};

use crate::config::ViewConfig;
use crate::element::{ElementHost, ItemView};
use crate::error::{ViewError, ViewResult};
use crate::models::{CHECKED_ATTR, TITLE_ATTR};

/// Id of the optional JSON config block in the page
pub const CONFIG_SCRIPT_ID: &str = "todo-item-config";

impl ElementHost for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Err(e) = Element::set_attribute(self, name, value) {
            log::warn!("set_attribute({}) failed: {:?}", name, e);
        }
    }

    fn inner_html(&self) -> String {
        Element::inner_html(self)
    }

    fn set_inner_html(&mut self, html: &str) {
        Element::set_inner_html(self, html);
    }
}

/// Live views of the page, one per attached element
struct Registry {
    config: ViewConfig,
    views: Vec<ItemView<Element>>,
}

impl Registry {
    fn position(&self, element: &Element) -> Option<usize> {
        self.views.iter().position(|view| view.host() == element)
    }

    fn attach(&mut self, element: Element) {
        if self.position(&element).is_some() {
            return;
        }
        let mut view = ItemView::new(element, self.config.render_policy);
        view.connected();
        self.views.push(view);
    }

    fn detach(&mut self, element: &Element) {
        if let Some(index) = self.position(element) {
            self.views.swap_remove(index).disconnected();
        }
    }

    fn attribute_changed(&mut self, element: &Element, name: &str) {
        if let Some(index) = self.position(element) {
            self.views[index].attribute_changed(name);
        }
    }

    /// Render a registered element, or a transient view of an unregistered one
    fn render(&mut self, element: &Element) {
        match self.position(element) {
            Some(index) => self.views[index].render(),
            None => ItemView::new(element.clone(), self.config.render_policy).render(),
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<Option<Registry>> = const { RefCell::new(None) };
}

fn with_registry<R>(f: impl FnOnce(&mut Registry) -> R) -> Option<R> {
    REGISTRY.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn document() -> ViewResult<Document> {
    web_sys::window()
        .ok_or(ViewError::NoWindow)?
        .document()
        .ok_or(ViewError::NoDocument)
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The element itself if it matches the tag, followed by matching descendants
fn matching_elements(root: &Element, tag: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if root.matches(tag).unwrap_or(false) {
        found.push(root.clone());
    }
    match root.query_selector_all(tag) {
        Ok(list) => found.extend(elements(&list)),
        Err(e) => log::warn!("query_selector_all({}) failed: {:?}", tag, e),
    }
    found
}

/// Read the page config block, falling back to defaults
pub fn page_config() -> ViewConfig {
    let text = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(text) => ViewConfig::from_json(&text).unwrap_or_else(|e| {
            log::warn!("invalid #{} block, using defaults: {}", CONFIG_SCRIPT_ID, e);
            ViewConfig::default()
        }),
        None => ViewConfig::default(),
    }
}

/// Register the tag and attach every matching element in the document
pub fn define(config: ViewConfig) -> ViewResult<()> {
    let document = document()?;
    let tag = config.tag_name.clone();

    REGISTRY.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return Err(ViewError::AlreadyDefined(tag.clone()));
        }
        *slot = Some(Registry {
            config: config.clone(),
            views: Vec::new(),
        });
        Ok(())
    })?;

    let existing = elements(&document.query_selector_all(&tag)?);
    let count = existing.len();
    with_registry(|registry| {
        for element in existing {
            registry.attach(element);
        }
    });

    observe(&document, &config)?;
    log::info!("defined <{}> ({} on page, policy {:?})", tag, count, config.render_policy);
    Ok(())
}

fn observe(document: &Document, config: &ViewConfig) -> ViewResult<()> {
    let tag = config.tag_name.clone();
    let on_mutation = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            for record in records.iter() {
                if let Ok(record) = record.dyn_into::<MutationRecord>() {
                    handle_record(&record, &tag);
                }
            }
        },
    );

    let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    if config.observes_attributes() {
        init.set_attributes(true);
        let filter = js_sys::Array::of2(&JsValue::from_str(TITLE_ATTR), &JsValue::from_str(CHECKED_ATTR));
        init.set_attribute_filter(&filter);
    }
    observer.observe_with_options(document, &init)?;
    on_mutation.forget();
    Ok(())
}

fn handle_record(record: &MutationRecord, tag: &str) {
    match record.type_().as_str() {
        "childList" => {
            for removed in elements(&record.removed_nodes()) {
                for element in matching_elements(&removed, tag) {
                    with_registry(|registry| registry.detach(&element));
                }
            }
            for added in elements(&record.added_nodes()) {
                // Nodes inserted and removed in the same batch are not live
                if !added.is_connected() {
                    continue;
                }
                for element in matching_elements(&added, tag) {
                    with_registry(|registry| registry.attach(element));
                }
            }
        }
        "attributes" => {
            let target = record.target().and_then(|node| node.dyn_into::<Element>().ok());
            if let (Some(element), Some(name)) = (target, record.attribute_name()) {
                with_registry(|registry| registry.attribute_changed(&element, &name));
            }
        }
        _ => {}
    }
}

/// Re-render an element from its current attributes
#[wasm_bindgen]
pub fn todo_item_render(element: &Element) {
    let rendered = with_registry(|registry| registry.render(element));
    if rendered.is_none() {
        ItemView::new(element.clone(), Default::default()).render();
    }
}

/// Typed state of an element as a `{ title, checked }` object
#[wasm_bindgen]
pub fn todo_item_state(element: &Element) -> Result<JsValue, JsValue> {
    let state = ItemView::new(element.clone(), Default::default()).state();
    serde_wasm_bindgen::to_value(&state).map_err(Into::into)
}
