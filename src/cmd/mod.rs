//! Command handlers for bundle-compare CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod compare;
pub mod completions;
pub mod init;

// Re-export command functions for convenient access
pub use compare::{cmd_compare, CompareOptions};
pub use completions::cmd_completions;
pub use init::cmd_init;
