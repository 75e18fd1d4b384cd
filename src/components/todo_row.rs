//! Todo Row Component
//!
//! Renders one item. Every control forwards to the item store; the
//! ordering never sees these mutations directly.

use leptos::prelude::*;

use list_order::{Item, Label};

use crate::store::{store_delete_item, store_set_status, store_toggle_label, use_app_store};

/// A single item row
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.completed;
    let description = item.description.clone();

    view! {
        <div class=if completed { "item-row completed" } else { "item-row" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| store_set_status(&store, id, !completed)
            />

            // Text
            <span class="item-text">{description}</span>

            // Label chips
            <span class="item-labels">
                {Label::ALL.iter().map(|&label| {
                    let active = item.has_label(label);
                    view! {
                        <button
                            type="button"
                            class=format!(
                                "label-chip {}{}",
                                label.as_str(),
                                if active { " active" } else { "" },
                            )
                            title=label.as_str()
                            on:click=move |_| store_toggle_label(&store, id, label)
                        />
                    }
                }).collect_view()}
            </span>

            // Delete button
            <button class="delete-btn" on:click=move |_| store_delete_item(&store, id)>"×"</button>
        </div>
    }
}
