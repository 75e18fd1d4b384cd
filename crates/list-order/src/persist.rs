//! Persistence Bridge
//!
//! Key-value storage of section orders. Values are JSON arrays of ids,
//! kept exactly as written: no sorting and no dedup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PersistError;
use crate::model::{ItemId, Section};

/// Storage for ordered id sequences, keyed by string
pub trait OrderPersistence {
    /// Read the order stored under `key`, `Ok(None)` when nothing is stored
    fn load(&self, key: &str) -> Result<Option<Vec<ItemId>>, PersistError>;

    /// Replace the order stored under `key`
    fn save(&self, key: &str, ids: &[ItemId]) -> Result<(), PersistError>;
}

/// `"<prefix>-<section>"`, e.g. `order-in-progress`
pub fn section_key(prefix: &str, section: Section) -> String {
    format!("{}-{}", prefix, section.as_str())
}

pub fn encode_order(ids: &[ItemId]) -> String {
    // A slice of integers always serializes
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode_order(key: &str, raw: &str) -> Result<Vec<ItemId>, PersistError> {
    serde_json::from_str(raw).map_err(|source| PersistError::Malformed {
        key: key.to_string(),
        source,
    })
}

/// Highest id remembered in any section order under `prefix`.
/// New items must be numbered above it, or a fresh item would inherit the
/// slot of a deleted one. Unreadable orders are skipped.
pub fn max_stored_id<P: OrderPersistence>(persistence: &P, prefix: &str) -> Option<ItemId> {
    Section::ALL
        .iter()
        .filter_map(|&section| persistence.load(&section_key(prefix, section)).ok().flatten())
        .flatten()
        .max()
}

/// In-process storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value as-is, bypassing encoding
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.slots.borrow_mut().insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl OrderPersistence for MemoryPersistence {
    fn load(&self, key: &str) -> Result<Option<Vec<ItemId>>, PersistError> {
        match self.slots.borrow().get(key) {
            Some(raw) => decode_order(key, raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, ids: &[ItemId]) -> Result<(), PersistError> {
        self.slots.borrow_mut().insert(key.to_string(), encode_order(ids));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_format() {
        assert_eq!(section_key("order", Section::InProgress), "order-in-progress");
        assert_eq!(section_key("todo", Section::Completed), "todo-completed");
    }

    #[test]
    fn test_round_trip_keeps_order_and_duplicates() {
        let store = MemoryPersistence::new();
        store.save("order-in-progress", &[5, 2, 9]).unwrap();
        assert_eq!(store.load("order-in-progress").unwrap(), Some(vec![5, 2, 9]));

        store.save("order-completed", &[3, 3, 1]).unwrap();
        assert_eq!(store.load("order-completed").unwrap(), Some(vec![3, 3, 1]));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryPersistence::new();
        assert_eq!(store.load("order-completed").unwrap(), None);
    }

    #[test]
    fn test_malformed_value_is_error() {
        let store = MemoryPersistence::new();
        store.insert_raw("order-in-progress", "not json");
        let err = store.load("order-in-progress").unwrap_err();
        assert!(matches!(
            err,
            PersistError::Malformed { ref key, .. } if key == "order-in-progress"
        ));
    }

    #[test]
    fn test_max_stored_id_spans_sections() {
        let store = MemoryPersistence::new();
        assert_eq!(max_stored_id(&store, "order"), None);

        store.save("order-in-progress", &[3, 9, 1]).unwrap();
        store.save("order-completed", &[4, 12]).unwrap();
        store.save("other-completed", &[40]).unwrap();
        assert_eq!(max_stored_id(&store, "order"), Some(12));
    }

    #[test]
    fn test_max_stored_id_skips_malformed() {
        let store = MemoryPersistence::new();
        store.insert_raw("order-in-progress", "[oops");
        store.save("order-completed", &[5]).unwrap();
        assert_eq!(max_stored_id(&store, "order"), Some(5));
    }

    #[test]
    fn test_clones_share_slots() {
        let a = MemoryPersistence::new();
        let b = a.clone();
        a.save("k", &[1]).unwrap();
        assert_eq!(b.raw("k").as_deref(), Some("[1]"));
    }
}
