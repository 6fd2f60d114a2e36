//! Stats manifest fixtures
//!
//! Builds webpack-style `stats.json` documents and writes them into
//! temporary directories.

#![allow(dead_code)]

use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for a stats document with `assetsByChunkName` and `assets`
#[derive(Debug, Default, Clone)]
pub struct StatsBuilder {
    chunks: Map<String, Value>,
    assets: Vec<Value>,
}

impl StatsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a chunk to a single emitted file
    pub fn chunk(mut self, name: &str, file: &str) -> Self {
        self.chunks.insert(name.to_string(), json!(file));
        self
    }

    /// Map a chunk to several emitted files
    pub fn chunk_files(mut self, name: &str, files: &[&str]) -> Self {
        self.chunks.insert(name.to_string(), json!(files));
        self
    }

    /// Add an emitted file
    pub fn asset(mut self, name: &str, size: u64) -> Self {
        self.assets.push(json!({ "name": name, "size": size, "emitted": true }));
        self
    }

    pub fn to_json(&self) -> String {
        json!({
            "hash": "0123456789abcdef",
            "assetsByChunkName": self.chunks,
            "assets": self.assets,
        })
        .to_string()
    }

    /// Write the document to `dir/name`
    pub fn write(&self, dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
        let path = dir.join(name);
        fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

/// Baseline build: main 100 KB, vendor 50 KB (with source map), styles 20 KB
pub fn old_stats() -> StatsBuilder {
    StatsBuilder::new()
        .chunk("main", "main.a1b2.js")
        .chunk_files("vendor", &["vendor.c3d4.js", "vendor.c3d4.js.map"])
        .chunk("styles", "styles.9f8e.css")
        .asset("main.a1b2.js", 100 * 1024)
        .asset("vendor.c3d4.js.map", 300 * 1024)
        .asset("vendor.c3d4.js", 50 * 1024)
        .asset("styles.9f8e.css", 20 * 1024)
}

/// Changed build: main grows to 110 KB, vendor removed, styles 3% larger,
/// a new `chart` chunk appears
pub fn new_stats() -> StatsBuilder {
    StatsBuilder::new()
        .chunk("main", "main.e5f6.js")
        .chunk("styles", "styles.7a6b.css")
        .chunk("chart", "chart.1122.js")
        .asset("main.e5f6.js", 110 * 1024)
        .asset("styles.7a6b.css", 20 * 1024 + 614)
        .asset("chart.1122.js", 8 * 1024)
}

/// Write the baseline/changed pair as `old.json` and `new.json`
pub fn create_stats_pair(dir: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let old = old_stats().write(dir, "old.json")?;
    let new = new_stats().write(dir, "new.json")?;
    Ok((old, new))
}
