//! Todo App
//!
//! Filters the item store, splits it into two sections and hands each
//! section to its own ordered list.

use leptos::prelude::*;
use reactive_stores::Store;

use list_order::{filter_items, max_stored_id, split_sections, uniform_completion, Section};

use crate::components::{
    ClearFilters, LabelFilter, ListSection, LogPanel, NewItemForm, SearchBox,
};
use crate::context::{load_config, AppContext};
use crate::cookie::CookiePersistence;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Items live only for the page, but saved orders outlive it
    let stored_max = max_stored_id(
        &CookiePersistence::new(config.cookie_max_age_days),
        &config.key_prefix,
    );
    let store = Store::new(AppState::seeded(stored_max));
    provide_context(store);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Filter/search stage, upstream of both sections
    let filtered = Memo::new(move |_| {
        let criteria = ctx.criteria();
        store.items().with(|items| filter_items(items, &criteria))
    });
    let in_progress = Memo::new(move |_| filtered.with(|items| split_sections(items).in_progress));
    let completed = Memo::new(move |_| filtered.with(|items| split_sections(items).completed));
    let uniform = Memo::new(move |_| filtered.with(|items| uniform_completion(items)));

    view! {
        <main class="app-layout">
            <h1>"To-Do"</h1>

            <NewItemForm />

            <div class="filter-bar">
                <SearchBox />
                <LabelFilter />
                <ClearFilters />
            </div>

            <ListSection section=Section::InProgress title="In progress" items=in_progress />

            <Show when=move || !uniform.get()>
                <hr class="section-divider" />
            </Show>

            <ListSection section=Section::Completed title="Completed" items=completed />

            <p class="item-count">
                {move || format!(
                    "{} of {} items shown",
                    filtered.with(|items| items.len()),
                    store.items().with(|items| items.len()),
                )}
            </p>

            <LogPanel />
        </main>
    }
}
