//! Manifest normalization
//!
//! Collapses a raw stats manifest into a flat map keyed by display name: the
//! chunk name when the emitted file belongs to a named chunk, otherwise the
//! file name itself. Hashed file names change from build to build while chunk
//! names stay stable, which is what makes two manifests comparable.

use super::error::ManifestError;
use super::raw::{ChunkNameMap, RawManifest};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Display name → size in bytes
pub type CanonicalAssetMap = BTreeMap<String, u64>;

/// Normalize a raw manifest into a [`CanonicalAssetMap`]
///
/// When two assets resolve to the same display name the later one in the
/// `assets` list wins.
///
/// # Examples
///
/// ```
/// use bundle_compare::manifest::{normalize, RawManifest};
///
/// let manifest = RawManifest::from_json(r#"{
///     "assetsByChunkName": {"main": "main.a1b2.js"},
///     "assets": [
///         {"name": "main.a1b2.js", "size": 102400},
///         {"name": "logo.svg", "size": 512}
///     ]
/// }"#)?;
///
/// let canonical = normalize(&manifest)?;
/// assert_eq!(canonical.get("main"), Some(&102400));
/// assert_eq!(canonical.get("logo.svg"), Some(&512));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`ManifestError::Malformed`] if `assetsByChunkName` or `assets`
/// is missing.
pub fn normalize(manifest: &RawManifest) -> Result<CanonicalAssetMap, ManifestError> {
    let chunks = manifest
        .assets_by_chunk_name
        .as_ref()
        .ok_or(ManifestError::Malformed {
            field: "assetsByChunkName",
        })?;
    let assets = manifest
        .assets
        .as_ref()
        .ok_or(ManifestError::Malformed { field: "assets" })?;

    let chunk_by_file = chunk_names_by_file(chunks);

    let mut canonical = CanonicalAssetMap::new();
    for asset in assets {
        let display_name = chunk_by_file
            .get(asset.name.as_str())
            .copied()
            .unwrap_or(asset.name.as_str());

        if let Some(previous) = canonical.insert(display_name.to_string(), asset.size) {
            debug!(
                "'{}' resolved more than once; {} bytes replaced by {} bytes from {}",
                display_name, previous, asset.size, asset.name
            );
        }
    }

    debug!(
        "Normalized {} assets into {} artifacts",
        assets.len(),
        canonical.len()
    );

    Ok(canonical)
}

/// Inverse of `assetsByChunkName`: file name → chunk name
///
/// Empty chunk names are skipped so such files keep their own name.
fn chunk_names_by_file(chunks: &ChunkNameMap) -> HashMap<&str, &str> {
    let mut lookup = HashMap::new();
    for (chunk_name, files) in chunks.iter().filter(|(name, _)| !name.is_empty()) {
        for file in files.files() {
            lookup.insert(file.as_str(), chunk_name);
        }
    }
    lookup
}
