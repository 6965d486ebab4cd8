//! UI Components
//!
//! Reusable Leptos components.

mod todo_item_row;
mod new_item_form;

pub use todo_item_row::TodoItemRow;
pub use new_item_form::NewItemForm;
