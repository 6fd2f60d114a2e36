//! Configuration file data structures

use crate::compare::{Classifier, DEFAULT_THRESHOLD_PERCENT};
use crate::error::BundleCompareError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bundle-compare.toml";

/// Default report directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "compare";

/// bundle-compare configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Relative change (percent) below which an artifact is reported as unchanged
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: f64,

    /// Directory the HTML report is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Custom HTML report template (uses the built-in one when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

fn default_threshold_percent() -> f64 {
    DEFAULT_THRESHOLD_PERCENT
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            threshold_percent: default_threshold_percent(),
            output_dir: default_output_dir(),
            template: None,
        }
    }
}

impl ConfigFile {
    /// Validate config values
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_compare::config::ConfigFile;
    ///
    /// assert!(ConfigFile::default().validate().is_ok());
    ///
    /// let bad = ConfigFile {
    ///     threshold_percent: -3.0,
    ///     ..Default::default()
    /// };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        // Same rule and exit code as --threshold
        Classifier::with_threshold(self.threshold_percent).map_err(BundleCompareError::from)?;

        if self.output_dir.trim().is_empty() {
            anyhow::bail!("output-dir cannot be empty");
        }

        Ok(())
    }
}
