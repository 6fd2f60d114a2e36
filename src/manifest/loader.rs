//! Manifest file loading

use super::error::ManifestError;
use super::normalize::{normalize, CanonicalAssetMap};
use super::raw::RawManifest;
use crate::infra::{FileSystem, RealFileSystem};
use log::debug;
use std::path::Path;

/// Reads stats manifests from disk
pub struct ManifestLoader;

impl ManifestLoader {
    /// Load and parse a manifest file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_compare::manifest::ManifestLoader;
    /// use std::path::Path;
    ///
    /// let manifest = ManifestLoader::load(Path::new("stats.json"))?;
    /// println!("{} assets", manifest.assets.map(|a| a.len()).unwrap_or(0));
    /// # Ok::<(), bundle_compare::manifest::ManifestError>(())
    /// ```
    pub fn load(path: &Path) -> Result<RawManifest, ManifestError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a manifest with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<RawManifest, ManifestError> {
        debug!("Reading manifest {}", path.display());

        let contents = fs.read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &contents)
    }

    /// Parse manifest contents that were already read from `path`
    ///
    /// `path` is only used for error reporting.
    pub fn parse(path: &Path, contents: &str) -> Result<RawManifest, ManifestError> {
        RawManifest::from_json(contents).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a manifest and normalize it in one step
    pub fn load_normalized(path: &Path) -> Result<CanonicalAssetMap, ManifestError> {
        Self::load_normalized_with_fs(path, &RealFileSystem)
    }

    /// Load and normalize with a custom filesystem implementation
    pub fn load_normalized_with_fs<FS: FileSystem>(
        path: &Path,
        fs: &FS,
    ) -> Result<CanonicalAssetMap, ManifestError> {
        let manifest = Self::load_with_fs(path, fs)?;
        normalize(&manifest)
    }
}
