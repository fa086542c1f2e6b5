//! Due-date priority classification

use chrono::NaiveDate;
use std::fmt;

/// Urgency tier for an outstanding item (activity, material, equipment
/// check, crew task). Declared high-first so the derived `Ord` sorts
/// urgent items to the front of mixed lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Due within 3 days, or already overdue
    High,
    /// Due within 4 to 7 days
    Medium,
    /// Due later than a week out, or no due date at all
    Low,
}

impl Priority {
    /// Classify a due date relative to an explicit "today".
    ///
    /// Callers inject `today` rather than reading the clock here, so the
    /// result is reproducible in tests. Items with no due date carry no
    /// urgency.
    pub fn classify(due: Option<NaiveDate>, today: NaiveDate) -> Priority {
        let Some(due) = due else {
            return Priority::Low;
        };

        let days_until = (due - today).num_days();

        if days_until <= 3 {
            // Overdue items land here too: negative days are still <= 3
            Priority::High
        } else if days_until <= 7 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
