//! JSON output for CI/CD integration

use crate::compare::{Bucket, ClassificationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON output structure for CI/CD tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// True if at least one artifact grew past the threshold
    pub has_regression: bool,
    /// Threshold used for classification
    pub threshold_percent: f64,
    /// Where the HTML report was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    /// Artifact counts per bucket
    pub summary: BucketSummary,
    /// Full classification
    pub result: ClassificationResult,
}

/// Number of artifacts per bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// Artifacts that grew
    pub bigger: usize,
    /// Artifacts that shrank
    pub smaller: usize,
    /// Artifacts within the threshold
    pub same: usize,
    /// Removed artifacts
    pub only_old: usize,
    /// Added artifacts
    pub only_new: usize,
    /// All artifacts
    pub total: usize,
}

impl BucketSummary {
    /// Count the artifacts of a result
    pub fn from_result(result: &ClassificationResult) -> Self {
        let count = |bucket| result.bucket(bucket).len();
        Self {
            bigger: count(Bucket::Bigger),
            smaller: count(Bucket::Smaller),
            same: count(Bucket::Same),
            only_old: count(Bucket::OnlyOld),
            only_new: count(Bucket::OnlyNew),
            total: result.total(),
        }
    }
}

impl JsonReport {
    /// Build the JSON report for a classification
    pub fn new(
        result: &ClassificationResult,
        threshold_percent: f64,
        report_path: Option<&Path>,
    ) -> Self {
        Self {
            has_regression: result.has_growth(),
            threshold_percent,
            report_path: report_path.map(|p| p.display().to_string()),
            summary: BucketSummary::from_result(result),
            result: result.clone(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
