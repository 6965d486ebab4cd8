//! Todo Item Demo App
//!
//! Reactive list of todo rows next to the statically declared elements.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewItemForm, TodoItemRow};
use crate::store::{store_done_count, store_items, store_set_checked, DemoState, DemoStore};

#[component]
pub fn App() -> impl IntoView {
    let store: DemoStore = Store::new(DemoState::new());
    provide_context(store);

    let rows = move || store_items(&store).into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <main class="container py-4">
            <h2>"Reactive rows"</h2>

            <NewItemForm />

            <For
                each=rows
                // Any field change re-creates the row
                key=|(index, item)| (*index, item.clone())
                children=move |(index, item)| {
                    let on_toggle = Callback::new(move |checked: bool| {
                        log::debug!("row {} toggled to {}", index, checked);
                        store_set_checked(&store, index, checked);
                    });
                    view! { <TodoItemRow item=item on_toggle=on_toggle /> }
                }
            />

            <p class="item-count">
                {move || format!("{} items, {} done", store_items(&store).len(), store_done_count(&store))}
            </p>
        </main>
    }
}
