//! CLI module
//!
//! Command-line access to the library helpers.
//!
//! # Commands
//!
//! - `scale` - Format byte counts and durations
//! - `case` - Convert text between string cases
//! - `gcp-validate` - Validate a Google Cloud credentials file
//! - `allowed` - Check a value against an allow list
//! - `since-map` - Parse a since override map
//! - `report` - Describe and validate the common options

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, ScaleFamily};
pub use runner::Runner;
