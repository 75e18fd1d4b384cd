//! Filter Components
//!
//! Label picker and search box feeding the filter stage.

use leptos::prelude::*;

use list_order::Label;

use crate::context::use_app_context;

/// Row of label buttons; clicking the selected label clears the filter
#[component]
pub fn LabelFilter() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="label-filter">
            {Label::ALL.iter().map(|&label| {
                let is_selected = move || ctx.label.get() == Some(label);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("label-btn {} active", label.as_str())
                        } else {
                            format!("label-btn {}", label.as_str())
                        }
                        on:click=move |_| ctx.toggle_label(label)
                    >
                        {label.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Shown only while a filter is active
#[component]
pub fn ClearFilters() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.is_filtering()>
            <button type="button" class="clear-filters" on:click=move |_| ctx.clear_filters()>
                "Clear filters"
            </button>
        </Show>
    }
}

/// Search input; every whitespace-separated word must match
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <input
            class="search-box"
            type="search"
            placeholder="Search..."
            prop:value=move || ctx.search.get()
            on:input=move |ev| ctx.search.set(event_target_value(&ev))
        />
    }
}
