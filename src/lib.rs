//! sitelog - Construction-site daily log utilities
//!
//! A command-line companion for site crews: due-date triage for
//! outstanding items, worked-hours calculation for timesheets, and
//! month calendar grids for the log view.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SitelogError;
