//! Error types for manifest loading and normalization

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or normalizing a stats manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// A required top-level key is absent (or null)
    #[error("Malformed manifest: missing required field `{field}`")]
    Malformed {
        /// Name of the missing field as it appears in the JSON document
        field: &'static str,
    },

    /// Manifest file could not be read
    #[error("Failed to read manifest {}", .path.display())]
    Io {
        /// Path to the manifest
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON or has unexpected value types
    #[error("Failed to parse manifest {}", .path.display())]
    Parse {
        /// Path to the manifest
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },
}
