//! Bundler stats manifests
//!
//! This module provides:
//! - Raw manifest types (`assetsByChunkName` + `assets`)
//! - Normalization into a display-name → bytes map
//! - Loading manifests from disk

mod error;
mod loader;
mod normalize;
mod raw;

pub use error::ManifestError;
pub use loader::ManifestLoader;
pub use normalize::{normalize, CanonicalAssetMap};
pub use raw::{ChunkFiles, ChunkNameMap, RawAsset, RawManifest};
