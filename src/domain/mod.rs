//! Domain layer - The pure computational core

pub mod calendar;
pub mod priority;
pub mod timeclock;

pub use calendar::MonthGrid;
pub use priority::Priority;
pub use timeclock::compute_hours;
