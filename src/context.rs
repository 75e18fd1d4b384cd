//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use list_order::{FilterCriteria, Label, OrderConfig};

/// Body attribute holding an optional JSON `OrderConfig`
const CONFIG_ATTRIBUTE: &str = "data-order-config";

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Free-form search text
    pub search: RwSignal<String>,
    /// Label the list is narrowed to, if any
    pub label: RwSignal<Option<Label>>,
    /// Ordering settings, fixed for the page lifetime
    pub config: StoredValue<OrderConfig>,
}

impl AppContext {
    pub fn new(config: OrderConfig) -> Self {
        Self {
            search: RwSignal::new(String::new()),
            label: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    /// Current filter criteria (tracked)
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_query(&self.search.get(), self.label.get())
    }

    /// Whether search text or a label currently narrows the list (tracked)
    pub fn is_filtering(&self) -> bool {
        !self.criteria().is_empty()
    }

    /// Drop search text and label selection
    pub fn clear_filters(&self) {
        self.search.set(String::new());
        self.label.set(None);
    }

    /// Select `label`, or clear it when it is already selected
    pub fn toggle_label(&self, label: Label) {
        self.label.update(|current| {
            *current = if *current == Some(label) { None } else { Some(label) };
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Read the ordering config from `<body data-order-config='{...}'>`.
/// Missing or malformed config falls back to defaults.
pub fn load_config() -> OrderConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    match raw {
        Some(raw) => OrderConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("[APP] {}: {}, using defaults", CONFIG_ATTRIBUTE, e);
            OrderConfig::default()
        }),
        None => OrderConfig::default(),
    }
}
