//! Configuration for bundle-compare
//!
//! This module provides:
//! - .bundle-compare.toml config file support
//! - Defaults for threshold and report location

pub mod file;
pub mod loader;

pub use file::{ConfigFile, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR};
pub use loader::ConfigLoader;
