//! Application layer - Use cases and orchestration

pub mod manage_config;
pub mod month_view;
pub mod timesheet;
pub mod triage;

pub use manage_config::ConfigService;
pub use month_view::month_view;
pub use timesheet::{total_hours, TimesheetRow};
pub use triage::{triage, DueItem, TriagedItem};
