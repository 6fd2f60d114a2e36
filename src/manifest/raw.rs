//! Raw stats manifest types as emitted by the bundler
//!
//! Only the two keys the comparison needs are modelled; everything else in a
//! `stats.json` (modules, chunks, warnings, ...) is ignored on deserialization.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Physical files emitted for one chunk
///
/// Bundlers write a bare string when a chunk produced a single file and a list
/// when it produced several (e.g. `main.js` plus `main.js.map`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkFiles {
    /// Exactly one file
    Single(String),
    /// Ordered list of files
    Multiple(Vec<String>),
}

impl ChunkFiles {
    /// All file names of this chunk, in document order
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_compare::manifest::ChunkFiles;
    ///
    /// let single = ChunkFiles::Single("main.js".to_string());
    /// assert_eq!(single.files(), ["main.js"]);
    ///
    /// let multiple = ChunkFiles::Multiple(vec!["app.js".into(), "app.css".into()]);
    /// assert_eq!(multiple.files().len(), 2);
    /// ```
    pub fn files(&self) -> &[String] {
        match self {
            Self::Single(file) => std::slice::from_ref(file),
            Self::Multiple(files) => files,
        }
    }
}

/// `assetsByChunkName` with entries kept in document order
///
/// A `HashMap` would lose the order, which the inverse file lookup relies on
/// for a deterministic last-write-wins when one file is listed under several
/// chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkNameMap(Vec<(String, ChunkFiles)>);

impl ChunkNameMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk entry
    pub fn push(&mut self, chunk_name: impl Into<String>, files: ChunkFiles) {
        self.0.push((chunk_name.into(), files));
    }

    /// Iterate `(chunk name, files)` in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChunkFiles)> {
        self.0.iter().map(|(name, files)| (name.as_str(), files))
    }

    /// Number of chunk entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no chunk entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ChunkFiles)> for ChunkNameMap {
    fn from_iter<I: IntoIterator<Item = (String, ChunkFiles)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ChunkNameMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, files) in &self.0 {
            map.serialize_entry(name, files)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChunkNameMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChunkNameMapVisitor;

        impl<'de> Visitor<'de> for ChunkNameMapVisitor {
            type Value = ChunkNameMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from chunk name to a file name or list of file names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, ChunkFiles>()? {
                    entries.push(entry);
                }
                Ok(ChunkNameMap(entries))
            }
        }

        deserializer.deserialize_map(ChunkNameMapVisitor)
    }
}

/// One physical output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAsset {
    /// Emitted file name (usually content-hashed)
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl RawAsset {
    /// Create an asset record
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// The subset of a bundler stats file that the comparison consumes
///
/// Both fields are optional here so that a stats file lacking one of them
/// still parses; [`normalize`](super::normalize) reports the absence as
/// [`ManifestError::Malformed`](super::ManifestError::Malformed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawManifest {
    /// Chunk name → emitted file(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_by_chunk_name: Option<ChunkNameMap>,

    /// Every emitted file with its size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<RawAsset>>,
}

impl RawManifest {
    /// Parse a manifest from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
