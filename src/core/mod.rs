//! Core application functionality
//!
//! This module contains the application-facing logic, including:
//! - CLI parsing and validation
//! - User settings handling
//! - Typed library errors
//! - The harness runner and result rendering

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use errors::{Error, Result};
pub use runner::{run_app, Scenario};
