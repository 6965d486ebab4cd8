//! Demo Page State Store
//!
//! Uses Leptos reactive_stores for the rows shown by the demo app.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::TodoItem;

/// Rows rendered by the demo list
#[derive(Clone, Debug, Default, Store)]
pub struct DemoState {
    pub items: Vec<TodoItem>,
}

impl DemoState {
    pub fn new() -> Self {
        Self {
            items: vec![
                TodoItem::new("Buy milk", true),
                TodoItem::new("Walk the dog", false),
                TodoItem::new("<b>Markup</b> stays text", false),
            ],
        }
    }
}

/// Type alias for the store
pub type DemoStore = Store<DemoState>;

/// Get the demo store from context
pub fn use_demo_store() -> DemoStore {
    expect_context::<DemoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the rows, tracked by the calling effect
pub fn store_items(store: &DemoStore) -> Vec<TodoItem> {
    store.items().get()
}

/// Number of checked rows, tracked by the calling effect
pub fn store_done_count(store: &DemoStore) -> usize {
    store.items().read().iter().filter(|item| item.checked).count()
}

/// Append an unchecked row
pub fn store_add_item(store: &DemoStore, title: String) {
    store.items().write().push(TodoItem::new(title, false));
}

/// Set the checked flag of the row at `index`
pub fn store_set_checked(store: &DemoStore, index: usize, checked: bool) {
    if let Some(item) = store.items().write().get_mut(index) {
        item.checked = checked;
    }
}
