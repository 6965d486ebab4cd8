//! New Item Form Component
//!
//! Text input that appends a row to the demo list.

use leptos::prelude::*;

use crate::store::{store_add_item, use_demo_store};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_demo_store();
    let (new_title, set_new_title) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() { return; }
        store_add_item(&store, title);
        set_new_title.set(String::new());
    };

    view! {
        <form class="new-item-form d-flex gap-2 mb-3" on:submit=add_item>
            <input
                class="form-control"
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" type="submit">"Add"</button>
        </form>
    }
}
