//! Month view use case

use crate::domain::MonthGrid;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};

/// Build the grid for an explicitly requested month, falling back to the
/// month containing `today` when the caller gave no year/month.
pub fn month_view(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> Result<MonthGrid> {
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());
    MonthGrid::build(year, month)
}
