//! Output formatting utilities

use crate::application::TriagedItem;
use crate::domain::MonthGrid;
use chrono::{Datelike, NaiveDate};

/// Format a month grid as text, Sunday-first. When `today` falls inside
/// the month its cell is marked with an asterisk.
pub fn format_month(grid: &MonthGrid, today: Option<NaiveDate>) -> String {
    let mut output = String::new();

    if let Some(first) = grid.dates().next() {
        let title = first.format("%B %Y").to_string();
        output.push_str(format!("{:^20}", title).trim_end());
        output.push('\n');
    }
    output.push_str("Su Mo Tu We Th Fr Sa\n");

    for week in &grid.weeks {
        let mut line = String::new();
        for slot in week {
            match slot {
                Some(date) => {
                    line.push_str(&format!("{:>2}", date.day()));
                    line.push(if Some(*date) == today { '*' } else { ' ' });
                }
                None => line.push_str("   "),
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Format triaged due items for display, one per line
pub fn format_triage(items: &[TriagedItem]) -> String {
    if items.is_empty() {
        return "No due items".to_string();
    }

    let mut output = String::new();
    for entry in items {
        let due = match entry.item.due {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<6}  {:<10}  {}\n",
            entry.priority, due, entry.item.label
        ));
    }
    output
}

/// Format decimal worked hours for display
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
