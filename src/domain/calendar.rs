//! Month-grid construction for calendar views

use crate::error::{Result, SitelogError};
use chrono::{Datelike, Duration, NaiveDate};

/// A single week row: seven slots, Sunday in column 0. Slots outside the
/// month are None padding.
pub type Week = [Option<NaiveDate>; 7];

/// A month laid out as week rows for rendering, in calendar order
/// (left-to-right, top-to-bottom).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Build the grid for a given year and month (1 = January).
    pub fn build(year: i32, month: u32) -> Result<MonthGrid> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(SitelogError::InvalidMonth(month))?;

        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];

        let mut date = first;
        while date.month() == month {
            let column = date.weekday().num_days_from_sunday() as usize;
            week[column] = Some(date);

            if column == 6 {
                weeks.push(week);
                week = [None; 7];
            }

            date += Duration::days(1);
        }

        // Final partial week, padded out to seven slots by the Nones
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        Ok(MonthGrid { year, month, weeks })
    }

    /// Number of days in the month
    pub fn day_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// All dates of the month in ascending order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().filter_map(|slot| *slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_february_leap_year() {
        let grid = MonthGrid::build(2024, 2).unwrap();

        assert_eq!(grid.day_count(), 29);
        assert_eq!(grid.weeks.len(), 5);

        // Feb 1 2024 is a Thursday, column 4 with Sunday as column 0
        let first_row = &grid.weeks[0];
        assert!(first_row[..4].iter().all(Option::is_none));
        assert_eq!(first_row[4], NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_february_non_leap_year() {
        let grid = MonthGrid::build(2025, 2).unwrap();
        assert_eq!(grid.day_count(), 28);
    }

    #[test]
    fn test_every_slot_weekday_matches_column() {
        for month in 1..=12 {
            let grid = MonthGrid::build(2025, month).unwrap();
            for week in &grid.weeks {
                for (column, slot) in week.iter().enumerate() {
                    if let Some(date) = slot {
                        assert_eq!(date.weekday().num_days_from_sunday() as usize, column);
                    }
                }
            }
        }
    }

    #[test]
    fn test_dates_are_ascending_and_complete() {
        let grid = MonthGrid::build(2025, 8).unwrap();
        let dates: Vec<NaiveDate> = grid.dates().collect();

        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(dates[30], NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_every_date_belongs_to_requested_month() {
        for month in 1..=12 {
            let grid = MonthGrid::build(2024, month).unwrap();
            for date in grid.dates() {
                assert_eq!(date.year(), 2024);
                assert_eq!(date.month(), month);
            }
        }
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_padding() {
        // June 1, 2025 is a Sunday
        let grid = MonthGrid::build(2025, 6).unwrap();
        assert_eq!(grid.weeks[0][0], NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn test_trailing_padding_fills_last_week() {
        // September 2025 ends on Tuesday the 30th
        let grid = MonthGrid::build(2025, 9).unwrap();
        let last = grid.weeks.last().unwrap();
        assert_eq!(last[2], NaiveDate::from_ymd_opt(2025, 9, 30));
        assert!(last[3..].iter().all(Option::is_none));
    }

    #[test]
    fn test_six_week_month() {
        // November 2025 starts on Saturday and has 30 days, spilling
        // into a sixth row
        let grid = MonthGrid::build(2025, 11).unwrap();
        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.day_count(), 30);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            MonthGrid::build(2025, 0),
            Err(SitelogError::InvalidMonth(0))
        ));
        assert!(matches!(
            MonthGrid::build(2025, 13),
            Err(SitelogError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_build_is_idempotent() {
        let first = MonthGrid::build(2024, 2).unwrap();
        let second = MonthGrid::build(2024, 2).unwrap();
        assert_eq!(first, second);
    }
}
