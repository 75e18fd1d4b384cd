//! Item Source Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is the
//! upstream collection the ordered sections read from; rows call the
//! mutation helpers below without knowing what they do to the ordering.

use leptos::prelude::*;
use list_order::{Item, ItemId, Label};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, in creation order
    pub items: Vec<Item>,
    /// Id handed to the next created item
    pub next_id: ItemId,
}

impl AppState {
    /// Starter list; ids are fixed so stored orders keep matching across reloads.
    /// `stored_max` is the highest id any saved order remembers: items are not
    /// persisted, so new ids must start above it to stay unique.
    pub fn seeded(stored_max: Option<ItemId>) -> Self {
        let items = vec![
            Item::new(1, "Buy milk").with_label(Label::Blue),
            Item::new(2, "Buy bread").with_label(Label::Red),
            Item::new(3, "Call the plumber").with_label(Label::Yellow),
            Item::new(4, "Water the plants").with_label(Label::Green),
            Item::new(5, "Return library books").completed(),
        ];
        let next_id = items.iter().map(|i| i.id).chain(stored_max).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new incomplete item, returning its id
pub fn store_add_item(store: &AppStore, description: &str) -> ItemId {
    let id = store.next_id().get_untracked();
    store.next_id().set(id + 1);
    store.items().write().push(Item::new(id, description.trim()));
    log::debug!("[STORE] added item {}", id);
    id
}

/// Remove an item by ID
pub fn store_delete_item(store: &AppStore, item_id: ItemId) {
    store.items().write().retain(|item| item.id != item_id);
    log::debug!("[STORE] deleted item {}", item_id);
}

/// Set the completion flag of an item
pub fn store_set_status(store: &AppStore, item_id: ItemId, completed: bool) {
    if let Some(item) = store.items().write().iter_mut().find(|item| item.id == item_id) {
        item.completed = completed;
    }
}

/// Add or remove a label on an item
pub fn store_toggle_label(store: &AppStore, item_id: ItemId, label: Label) {
    if let Some(item) = store.items().write().iter_mut().find(|item| item.id == item_id) {
        item.toggle_label(label);
    }
}
