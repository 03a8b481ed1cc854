//! CLI command handlers for kmlrestyle.
//!
//! This module provides the headless pipeline entry point used by the
//! binary and the end-to-end tests.

pub mod common;
pub mod convert;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use convert::ConvertArgs;
