//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Documentation links
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```no_run
//! use bundle_compare::error::BundleCompareError;
//! use bundle_compare::manifest::ManifestLoader;
//! use std::path::Path;
//!
//! match ManifestLoader::load_normalized(Path::new("stats.json")) {
//!     Ok(assets) => println!("{} artifacts", assets.len()),
//!     Err(e) => {
//!         let err = BundleCompareError::from(e);
//!         eprintln!("{}", err);
//!         std::process::exit(err.exit_code());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::compare::CompareError;
use crate::manifest::ManifestError;

/// bundle-compare errors with contextual suggestions
#[derive(Error, Debug)]
pub enum BundleCompareError {
    /// Manifest path does not exist
    #[error("{label} manifest not found: {}", .path.display())]
    ManifestNotFound {
        /// Path to the manifest
        path: PathBuf,
        /// Which side of the comparison ("Old" or "New")
        label: String,
    },

    /// Manifest could not be read, parsed or normalized
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Classification settings are invalid
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// Custom report template could not be read
    #[error("Report template not readable: {}", .path.display())]
    TemplateNotReadable {
        /// Path to the template
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Artifacts grew past the threshold and `--check` was requested
    #[error("{count} artifact(s) grew by {threshold_percent}% or more")]
    SizeRegression {
        /// Number of artifacts in the `bigger` bucket
        count: usize,
        /// Threshold used for classification
        threshold_percent: f64,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BundleCompareError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_compare::error::BundleCompareError;
    /// use std::path::PathBuf;
    ///
    /// let error = BundleCompareError::ManifestNotFound {
    ///     path: PathBuf::from("stats.json"),
    ///     label: "Old".to_string(),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("--json"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ManifestNotFound { path, .. } => Some(format!(
                "Generate a stats file first, e.g. webpack --json > {}",
                path.display()
            )),
            Self::Manifest(ManifestError::Malformed { field }) => Some(format!(
                "The stats file has no `{}`. Export full stats (webpack --json) rather than a trimmed preset",
                field
            )),
            Self::Manifest(ManifestError::Parse { path, .. }) => Some(format!(
                "Check that {} is a JSON stats file produced by webpack --json",
                path.display()
            )),
            Self::Manifest(ManifestError::Io { path, .. }) => Some(format!(
                "Check file permissions and that {} is accessible",
                path.display()
            )),
            Self::Compare(_) => {
                Some("Use a non-negative percentage, e.g. --threshold 5".to_string())
            }
            Self::TemplateNotReadable { path, .. } => Some(format!(
                "Check the template path {} or remove `template` from .bundle-compare.toml to use the built-in report",
                path.display()
            )),
            Self::SizeRegression { .. } => Some(
                "Review the 'Bigger' section of the report, or raise --threshold if the growth is expected"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::ManifestNotFound { .. } | Self::Manifest(ManifestError::Malformed { .. }) => {
                Some("https://webpack.js.org/api/stats/")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_compare::error::BundleCompareError;
    ///
    /// let regression = BundleCompareError::SizeRegression {
    ///     count: 2,
    ///     threshold_percent: 5.0,
    /// };
    /// assert_eq!(regression.exit_code(), 1); // CI should fail
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ManifestNotFound { .. } => 66, // EX_NOINPUT
            Self::Manifest(ManifestError::Malformed { .. }) => 65, // EX_DATAERR
            Self::Manifest(ManifestError::Parse { .. }) => 65,
            Self::Manifest(ManifestError::Io { .. }) => 74, // EX_IOERR
            Self::Compare(_) => 64, // EX_USAGE
            Self::TemplateNotReadable { .. } => 66,
            Self::SizeRegression { .. } => 1, // Generic error (CI should fail)
            Self::Io { .. } => 74,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(bc_error) = Self::find(error) {
            if let Some(suggestion) = bc_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = bc_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, BundleCompareError::exit_code)
    }

    fn find(error: &anyhow::Error) -> Option<&BundleCompareError> {
        error.chain().find_map(|e| e.downcast_ref::<BundleCompareError>())
    }
}
