//! Domain Model
//!
//! Items as supplied by the list data source, their color labels,
//! and the two list sections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier of an item for its whole lifetime
pub type ItemId = u32;

/// Anything the ordering join can look up by id
pub trait Entity {
    fn id(&self) -> ItemId;
}

/// Color tag attached to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Red, Label::Green, Label::Blue, Label::Yellow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Red => "red",
            Label::Green => "green",
            Label::Blue => "blue",
            Label::Yellow => "yellow",
        }
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub labels: BTreeSet<Label>,
}

impl Item {
    /// Create an incomplete, unlabeled item
    pub fn new(id: ItemId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            labels: BTreeSet::new(),
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.insert(label);
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Add the label if missing, remove it otherwise
    pub fn toggle_label(&mut self, label: Label) {
        if !self.labels.remove(&label) {
            self.labels.insert(label);
        }
    }
}

impl Entity for Item {
    fn id(&self) -> ItemId {
        self.id
    }
}

/// The two independently ordered partitions of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    InProgress,
    Completed,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::InProgress, Section::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::InProgress => "in-progress",
            Section::Completed => "completed",
        }
    }

    /// Section an item belongs to by its completion flag
    pub fn of(item: &Item) -> Self {
        if item.completed {
            Section::Completed
        } else {
            Section::InProgress
        }
    }
}
