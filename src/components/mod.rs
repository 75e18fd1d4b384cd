//! UI Components
//!
//! Reusable Leptos components.

mod label_filter;
mod list_section;
mod log_panel;
mod new_item_form;
mod todo_row;

pub use label_filter::{ClearFilters, LabelFilter, SearchBox};
pub use list_section::ListSection;
pub use log_panel::LogPanel;
pub use new_item_form::NewItemForm;
pub use todo_row::TodoRow;
