//! Infrastructure layer - Configuration persistence

pub mod config;

pub use config::Config;
