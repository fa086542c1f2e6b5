//! CLI command definitions

use crate::error::{Result, SitelogError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sitelog")]
#[command(about = "Construction-site daily log utilities", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify due dates by urgency, most urgent first
    Due {
        /// Due dates (YYYY-MM-DD), or '-' for an undated item
        #[arg(value_name = "DATE", required = true)]
        dates: Vec<String>,

        /// Labels paired positionally with the dates
        #[arg(short, long)]
        label: Vec<String>,

        /// Reference date standing in for the current day (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },

    /// Compute worked hours from a start/finish time pair
    Hours {
        /// Shift start time (HH:MM, 24-hour)
        start: String,

        /// Shift finish time (HH:MM, 24-hour)
        finish: String,

        /// Lunch deduction in minutes (default: configured value, else 0)
        #[arg(short, long)]
        lunch: Option<i64>,
    },

    /// Print a month calendar grid
    Cal {
        /// Year (default: current year)
        year: Option<i32>,

        /// Month, 1-12 (default: current month)
        month: Option<u32>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse a YYYY-MM-DD date at the CLI boundary
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| SitelogError::InvalidDate(input.to_string()))
}
