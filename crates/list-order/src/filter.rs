//! Filter/Search Stage
//!
//! Narrows the raw item collection by label and search words before it is
//! split into sections. Upstream order is kept; each section's order store
//! decides the final ranking.

use crate::model::{Item, Label, Section};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Lowercase words that must all appear in the description
    pub required_words: Vec<String>,
    pub label: Option<Label>,
}

impl FilterCriteria {
    /// Build criteria from free-form search text
    pub fn from_query(query: &str, label: Option<Label>) -> Self {
        Self {
            required_words: query.split_whitespace().map(str::to_lowercase).collect(),
            label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.required_words.is_empty() && self.label.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        let label_ok = self.label.map_or(true, |label| item.has_label(label));
        if !label_ok {
            return false;
        }
        let description = item.description.to_lowercase();
        self.required_words.iter().all(|word| description.contains(&word.to_lowercase()))
    }
}

pub fn filter_items(items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
    items.iter().filter(|item| criteria.matches(item)).cloned().collect()
}

/// True when every item has the same completion flag, vacuously for none
pub fn uniform_completion(items: &[Item]) -> bool {
    match items.first() {
        Some(first) => items.iter().all(|item| item.completed == first.completed),
        None => true,
    }
}

/// Items partitioned by completion flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub in_progress: Vec<Item>,
    pub completed: Vec<Item>,
}

pub fn split_sections(items: &[Item]) -> Sections {
    let (in_progress, completed): (Vec<Item>, Vec<Item>) = items
        .iter()
        .cloned()
        .partition(|item| Section::of(item) == Section::InProgress);
    Sections { in_progress, completed }
}
