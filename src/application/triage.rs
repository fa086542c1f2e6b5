//! Triage use case: classify due items and order them for display

use crate::domain::Priority;
use chrono::NaiveDate;

/// An outstanding item awaiting resolution on site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueItem {
    pub label: String,
    pub due: Option<NaiveDate>,
}

impl DueItem {
    pub fn new(label: String, due: Option<NaiveDate>) -> Self {
        DueItem { label, due }
    }
}

/// A due item with its computed urgency tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriagedItem {
    pub item: DueItem,
    pub priority: Priority,
}

/// Classify each item against `today` and sort high-priority first.
/// The sort is stable, so items within a tier keep their input order.
pub fn triage(items: Vec<DueItem>, today: NaiveDate) -> Vec<TriagedItem> {
    let mut triaged: Vec<TriagedItem> = items
        .into_iter()
        .map(|item| {
            let priority = Priority::classify(item.due, today);
            TriagedItem { item, priority }
        })
        .collect();

    triaged.sort_by_key(|entry| entry.priority);
    triaged
}
