//! Drag Session
//!
//! Live reindexing while a row is dragged: every drag-enter on another row
//! moves the dragged entry to that row's position. There is no commit on
//! drop, the order is already final by then.
//!
//! At most one entry is draggable at a time. The armed slot remembers the
//! row whose pointer is down so the flag can be cleared before another row
//! takes it.

use crate::model::ItemId;
use crate::order::OrderStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
    armed: Option<ItemId>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn active(&self) -> Option<ItemId> {
        match self.state {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    #[cfg(test)]
    pub fn armed(&self) -> Option<ItemId> {
        self.armed
    }

    /// Pointer went down on a row
    pub fn arm(&mut self, store: &mut OrderStore, id: ItemId) {
        if self.active().is_some() {
            return;
        }
        self.release_armed(store);
        if store.set_draggable(id, true) {
            self.armed = Some(id);
        }
    }

    /// Pointer came up without a drag starting
    pub fn disarm(&mut self, store: &mut OrderStore) {
        if self.active().is_none() {
            self.release_armed(store);
        }
    }

    /// Idle -> Dragging(id). A drag still in progress is ended first.
    pub fn start(&mut self, store: &mut OrderStore, id: ItemId) {
        if self.active().is_some() {
            self.end(store);
        }
        if self.armed != Some(id) {
            self.release_armed(store);
            store.set_draggable(id, true);
            self.armed = Some(id);
        }
        self.state = DragState::Dragging(id);
    }

    /// The pointer entered row `other`. Returns whether the order changed.
    pub fn enter(&mut self, store: &mut OrderStore, other: ItemId) -> bool {
        let Some(dragged) = self.active() else {
            return false;
        };
        if dragged == other {
            return false;
        }
        match store.position(other) {
            Some(target) => store.move_to(dragged, target),
            None => false,
        }
    }

    /// Drops are accepted whenever a drag is active
    pub fn accepts_drop(&self) -> bool {
        self.active().is_some()
    }

    /// Dragging(id) -> Idle, also on cancel. The dragged id may already be gone.
    pub fn end(&mut self, store: &mut OrderStore) {
        if let DragState::Dragging(id) = self.state {
            store.set_draggable(id, false);
        }
        self.state = DragState::Idle;
        self.release_armed(store);
    }

    fn release_armed(&mut self, store: &mut OrderStore) {
        if let Some(prev) = self.armed.take() {
            store.set_draggable(prev, false);
        }
    }
}
