// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for the studio.
//!
//! This module contains the command-line interface logic, including argument
//! parsing, logging macros, and the `edit` and `snapshot` commands.

// Modules
/// CLI arguments.
pub mod args;

/// Editor command.
pub mod edit;

/// Logging macros and verbosity state.
pub mod logging;

/// Headless snapshot command.
pub mod snapshot;
