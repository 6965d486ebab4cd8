//! Todo Item Row Component
//!
//! Leptos rendition of the checkbox row, same layout and classes as the
//! custom element markup.

use leptos::prelude::*;

use crate::markup::classes;
use crate::models::TodoItem;

/// A checkbox next to the item title
///
/// Without `on_toggle` the row only displays the state.
#[component]
pub fn TodoItemRow(
    item: TodoItem,
    #[prop(optional, into)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let label = item.title.clone();

    view! {
        <ul class=classes::LIST>
            <li class=classes::CHECK_CELL>
                <div class=classes::CHECK>
                    <input
                        class=classes::INPUT
                        type="checkbox"
                        checked=item.checked
                        aria-label=label
                        on:change=move |ev| {
                            if let Some(on_toggle) = on_toggle {
                                on_toggle.run(event_target_checked(&ev));
                            }
                        }
                    />
                </div>
            </li>
            <li class=classes::LABEL_CELL>
                <p class=classes::LABEL>{item.title}</p>
            </li>
        </ul>
    }
}
