//! Order Store
//!
//! The user-defined ranking of one section. Entries are only ever appended
//! (reconcile) or repositioned one at a time (move). Ids of items that left
//! the upstream collection stay in place and simply produce no row.

use std::collections::HashSet;

use crate::model::{Entity, ItemId};

/// One position in the section order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderEntry {
    pub id: ItemId,
    /// True only while this row is armed or being dragged
    pub draggable: bool,
}

impl OrderEntry {
    fn new(id: ItemId) -> Self {
        Self { id, draggable: false }
    }
}

/// A rendered row: an upstream item plus its drag hint
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a, T> {
    pub item: &'a T,
    pub draggable: bool,
}

/// Ordered sequence of unique ids with ephemeral drag flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderStore {
    entries: Vec<OrderEntry>,
}

impl OrderStore {
    /// Seed from the persisted order when there is one, else from natural order.
    /// Repeated ids keep their first occurrence.
    pub fn seed(persisted: Option<Vec<ItemId>>, natural: &[ItemId]) -> Self {
        let source = match persisted {
            Some(ids) => ids,
            None => natural.to_vec(),
        };
        let mut seen = HashSet::with_capacity(source.len());
        let entries = source
            .into_iter()
            .filter(|id| seen.insert(*id))
            .map(OrderEntry::new)
            .collect();
        Self { entries }
    }

    /// Append ids not yet in the store, in the order they appear in `current`.
    /// Returns whether anything was appended.
    pub fn reconcile(&mut self, current: &[ItemId]) -> bool {
        let mut known: HashSet<ItemId> = self.entries.iter().map(|e| e.id).collect();
        let before = self.entries.len();
        for &id in current {
            if known.insert(id) {
                self.entries.push(OrderEntry::new(id));
            }
        }
        self.entries.len() != before
    }

    /// Drop ids absent from `current`. Returns whether anything was removed.
    pub fn prune(&mut self, current: &[ItemId]) -> bool {
        let live: HashSet<ItemId> = current.iter().copied().collect();
        let before = self.entries.len();
        self.entries.retain(|e| live.contains(&e.id));
        self.entries.len() != before
    }

    pub fn set_draggable(&mut self, id: ItemId, value: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.draggable = value;
                true
            }
            None => false,
        }
    }

    pub fn is_draggable(&self, id: ItemId) -> bool {
        self.entries.iter().any(|e| e.id == id && e.draggable)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Move one entry to `target`, shifting the entries in between by one.
    /// Targets past the end land on the last position.
    pub fn move_to(&mut self, id: ItemId, target: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let to = target.min(self.entries.len() - 1);
        if from == to {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn draggable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.draggable).count()
    }

    /// Rows for `items` in store order. Stale ids yield nothing, and items the
    /// store has not seen yet wait for the next reconcile.
    pub fn join<'a, T: Entity>(&self, items: &'a [T]) -> Vec<Row<'a, T>> {
        self.entries
            .iter()
            .filter_map(|entry| {
                items
                    .iter()
                    .find(|item| item.id() == entry.id)
                    .map(|item| Row { item, draggable: entry.draggable })
            })
            .collect()
    }
}
