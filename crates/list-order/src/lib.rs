//! List Order Core
//!
//! Manual ordering for to-do list sections:
//! - model: items, labels, sections
//! - order: the per-section ordered id sequence
//! - drag: the single active drag session
//! - persist / section: saving the order under a per-section key
//! - filter: label and search narrowing before the ordering join
//!
//! This crate has no browser dependencies so it can be tested natively.

mod config;
mod drag;
mod error;
mod filter;
mod model;
mod order;
mod persist;
mod section;

#[cfg(test)]
mod tests;

pub use config::OrderConfig;
pub use drag::{DragSession, DragState};
pub use error::{ConfigError, PersistError};
pub use filter::{filter_items, split_sections, uniform_completion, FilterCriteria, Sections};
pub use model::{Entity, Item, ItemId, Label, Section};
pub use order::{OrderEntry, OrderStore, Row};
pub use persist::{
    decode_order, encode_order, max_stored_id, section_key, MemoryPersistence, OrderPersistence,
};
pub use section::OrderedSection;
