//! Timesheet use case: per-row and total worked hours

use crate::domain::compute_hours;

/// One line of a timesheet as entered on the form: raw time strings plus
/// the lunch deduction in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetRow {
    pub start: String,
    pub finish: String,
    pub lunch_minutes: i64,
}

impl TimesheetRow {
    pub fn new(start: String, finish: String, lunch_minutes: i64) -> Self {
        TimesheetRow {
            start,
            finish,
            lunch_minutes,
        }
    }

    /// Worked hours for this row; incomplete rows contribute 0
    pub fn hours(&self) -> f64 {
        compute_hours(&self.start, &self.finish, self.lunch_minutes)
    }
}

/// Total worked hours across all rows, for the timesheet footer
pub fn total_hours(rows: &[TimesheetRow]) -> f64 {
    rows.iter().map(TimesheetRow::hours).sum()
}
