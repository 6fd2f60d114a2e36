//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for float comparisons
//! - Stats manifest fixtures written to temporary directories
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::StatsBuilder;
//!
//! let stats = StatsBuilder::new().chunk("main", "main.js").asset("main.js", 1024);
//! ```

pub mod assertions;
pub mod fixtures;
