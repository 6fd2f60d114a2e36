#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-compare library
//!
//! Compares two bundler stats manifests and classifies every build artifact
//! by how its size changed. The CLI is a thin wrapper around this library.
//!
//! # Basic Example
//!
//! Normalizing two manifests and classifying the artifacts:
//!
//! ```
//! use bundle_compare::compare::{classify, Bucket};
//! use bundle_compare::manifest::{normalize, RawManifest};
//!
//! let old = RawManifest::from_json(r#"{
//!     "assetsByChunkName": {"main": "main.a1b2.js", "vendor": "vendor.c3d4.js"},
//!     "assets": [
//!         {"name": "main.a1b2.js", "size": 102400},
//!         {"name": "vendor.c3d4.js", "size": 51200}
//!     ]
//! }"#)?;
//! let new = RawManifest::from_json(r#"{
//!     "assetsByChunkName": {"main": "main.e5f6.js"},
//!     "assets": [{"name": "main.e5f6.js", "size": 112640}]
//! }"#)?;
//!
//! let result = classify(&normalize(&old)?, &normalize(&new)?);
//!
//! let main = &result.bigger["main"];
//! assert_eq!(main.old_size_kb, Some(100.0));
//! assert_eq!(main.new_size_kb, Some(110.0));
//! assert_eq!(result.find("vendor").map(|(b, _)| b), Some(Bucket::OnlyOld));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Advanced Example: Rendering a Report
//!
//! ```
//! use bundle_compare::compare::Classifier;
//! use bundle_compare::manifest::CanonicalAssetMap;
//! use bundle_compare::report::{render_report, DEFAULT_TEMPLATE};
//!
//! let old = CanonicalAssetMap::from([("main".to_string(), 100 * 1024)]);
//! let new = CanonicalAssetMap::from([("main".to_string(), 103 * 1024)]);
//!
//! // 3% growth is "about the same" at 5%, but bigger at 1%
//! let strict = Classifier::with_threshold(1.0)?;
//! let result = strict.classify(&old, &new);
//! assert!(result.bigger.contains_key("main"));
//!
//! let html = render_report(DEFAULT_TEMPLATE, &result, strict.threshold_percent());
//! assert!(html.contains("<td>main</td>"));
//! # Ok::<(), bundle_compare::compare::CompareError>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Pairwise classification of artifacts
pub mod compare;
/// Configuration file management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Stats manifest loading and normalization
pub mod manifest;
/// HTML, terminal and JSON reports
pub mod report;
