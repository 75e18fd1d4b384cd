//! Ordered Section
//!
//! One section's order store, drag session and persistence slot. Every
//! reconcile or move that changes the order writes the full id sequence
//! back. Storage failures are logged and otherwise ignored: a failed read
//! falls back to natural order, a failed write is simply lost.

use log::{debug, warn};

use crate::config::OrderConfig;
use crate::drag::DragSession;
use crate::model::{Entity, ItemId, Section};
use crate::order::{OrderStore, Row};
use crate::persist::{section_key, OrderPersistence};

#[derive(Debug, Clone)]
pub struct OrderedSection<P> {
    key: String,
    prune_stale: bool,
    store: OrderStore,
    drag: DragSession,
    persistence: P,
}

impl<P: OrderPersistence> OrderedSection<P> {
    /// Read the persisted order once and seed the store from it,
    /// or from `natural` when nothing usable is stored.
    pub fn open(
        config: &OrderConfig,
        section: Section,
        persistence: P,
        natural: &[ItemId],
    ) -> Self {
        let key = section_key(&config.key_prefix, section);
        let persisted = match persistence.load(&key) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("[ORDER] {}: ignoring stored order: {}", key, e);
                None
            }
        };
        let source = if persisted.is_some() { "storage" } else { "natural order" };
        debug!("[ORDER] {}: seeded from {}", key, source);
        Self {
            key,
            prune_stale: config.prune_stale,
            store: OrderStore::seed(persisted, natural),
            drag: DragSession::new(),
            persistence,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Merge the current upstream ids into the order
    pub fn reconcile(&mut self, current: &[ItemId]) -> bool {
        let mut changed = self.store.reconcile(current);
        if self.prune_stale {
            changed |= self.store.prune(current);
        }
        if changed {
            debug!("[ORDER] {}: reconciled to {} entries", self.key, self.store.len());
            self.persist();
        }
        changed
    }

    /// Direct reposition outside a drag gesture
    pub fn move_to(&mut self, id: ItemId, target: usize) -> bool {
        let moved = self.store.move_to(id, target);
        if moved {
            self.persist();
        }
        moved
    }

    pub fn arm(&mut self, id: ItemId) {
        self.drag.arm(&mut self.store, id);
    }

    pub fn disarm(&mut self) {
        self.drag.disarm(&mut self.store);
    }

    pub fn drag_start(&mut self, id: ItemId) {
        debug!("[DND] {}: start {}", self.key, id);
        self.drag.start(&mut self.store, id);
    }

    pub fn drag_enter(&mut self, other: ItemId) -> bool {
        let moved = self.drag.enter(&mut self.store, other);
        if moved {
            debug!("[DND] {}: {:?} moved to the slot of {}", self.key, self.drag.active(), other);
            self.persist();
        }
        moved
    }

    /// Nothing to commit, the order was updated on each drag-enter
    pub fn drop_accepted(&self) -> bool {
        self.drag.accepts_drop()
    }

    pub fn drag_end(&mut self) {
        debug!("[DND] {}: end {:?}", self.key, self.drag.active());
        self.drag.end(&mut self.store);
    }

    pub fn rows<'a, T: Entity>(&self, items: &'a [T]) -> Vec<Row<'a, T>> {
        self.store.join(items)
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.key, &self.store.ids()) {
            warn!("[ORDER] {}: failed to save order: {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragState;
    use crate::error::PersistError;
    use crate::persist::MemoryPersistence;

    struct BrokenStorage;

    impl OrderPersistence for BrokenStorage {
        fn load(&self, _key: &str) -> Result<Option<Vec<ItemId>>, PersistError> {
            Err(PersistError::Unavailable("no document".to_string()))
        }

        fn save(&self, _key: &str, _ids: &[ItemId]) -> Result<(), PersistError> {
            Err(PersistError::Unavailable("no document".to_string()))
        }
    }

    #[test]
    fn test_open_reads_persisted_order() {
        let storage = MemoryPersistence::new();
        storage.save("order-in-progress", &[2, 1]).unwrap();
        let section =
            OrderedSection::open(&OrderConfig::default(), Section::InProgress, storage, &[1, 2, 3]);
        assert_eq!(section.store().ids(), vec![2, 1]);
        assert_eq!(section.key(), "order-in-progress");
    }

    #[test]
    fn test_malformed_storage_falls_back_to_natural() {
        let storage = MemoryPersistence::new();
        storage.insert_raw("order-completed", "{oops");
        let section =
            OrderedSection::open(&OrderConfig::default(), Section::Completed, storage, &[4, 5]);
        assert_eq!(section.store().ids(), vec![4, 5]);
    }

    fn open_in_progress(
        storage: &MemoryPersistence,
        natural: &[ItemId],
    ) -> OrderedSection<MemoryPersistence> {
        OrderedSection::open(&OrderConfig::default(), Section::InProgress, storage.clone(), natural)
    }

    #[test]
    fn test_reconcile_and_moves_are_written() {
        let storage = MemoryPersistence::new();
        let mut section = open_in_progress(&storage, &[1, 2]);
        assert_eq!(storage.raw("order-in-progress"), None);

        assert!(section.reconcile(&[1, 2, 3]));
        assert_eq!(storage.load("order-in-progress").unwrap(), Some(vec![1, 2, 3]));

        section.arm(3);
        section.drag_start(3);
        section.drag_enter(1);
        assert_eq!(storage.load("order-in-progress").unwrap(), Some(vec![3, 1, 2]));
        assert!(section.drop_accepted());
        section.drag_end();
        assert!(!section.drop_accepted());
        assert_eq!(storage.load("order-in-progress").unwrap(), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_unchanged_reconcile_does_not_write() {
        let storage = MemoryPersistence::new();
        let mut section = open_in_progress(&storage, &[1, 2]);
        assert!(!section.reconcile(&[2, 1]));
        assert_eq!(storage.raw("order-in-progress"), None);
    }

    #[test]
    fn test_prune_stale_when_configured() {
        let config = OrderConfig { prune_stale: true, ..OrderConfig::default() };
        let storage = MemoryPersistence::new();
        let mut section =
            OrderedSection::open(&config, Section::InProgress, storage.clone(), &[1, 2, 3]);
        assert!(section.reconcile(&[3, 1]));
        assert_eq!(section.store().ids(), vec![1, 3]);
        assert_eq!(storage.load("order-in-progress").unwrap(), Some(vec![1, 3]));
    }

    #[test]
    fn test_sections_do_not_collide() {
        let storage = MemoryPersistence::new();
        let config = OrderConfig::default();
        let mut open = OrderedSection::open(&config, Section::InProgress, storage.clone(), &[1]);
        let mut done = OrderedSection::open(&config, Section::Completed, storage.clone(), &[7]);
        open.reconcile(&[1, 2]);
        done.reconcile(&[7, 8]);
        assert_eq!(storage.load("order-in-progress").unwrap(), Some(vec![1, 2]));
        assert_eq!(storage.load("order-completed").unwrap(), Some(vec![7, 8]));
    }

    #[test]
    fn test_storage_failures_are_not_fatal() {
        let config = OrderConfig::default();
        let mut section =
            OrderedSection::open(&config, Section::InProgress, BrokenStorage, &[1, 2]);
        assert_eq!(section.store().ids(), vec![1, 2]);
        assert!(section.reconcile(&[1, 2, 3]));
        assert!(section.move_to(3, 0));
        assert_eq!(section.store().ids(), vec![3, 1, 2]);
    }

    #[test]
    fn test_pointer_released_without_drag_clears_row() {
        let storage = MemoryPersistence::new();
        let mut section = open_in_progress(&storage, &[1, 2, 3]);

        // Touch lands on row 2, then the gesture is cancelled before any drag
        section.arm(2);
        assert!(section.store().is_draggable(2));
        section.disarm();

        assert!(!section.store().is_draggable(2));
        assert_eq!(section.drag().state(), DragState::Idle);
        assert_eq!(section.store().ids(), vec![1, 2, 3]);
        assert_eq!(storage.raw("order-in-progress"), None);

        // A stray release with nothing armed is harmless
        section.disarm();
        assert_eq!(section.store().draggable_count(), 0);
    }
}
