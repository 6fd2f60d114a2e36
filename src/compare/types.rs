//! Comparison result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Size comparison for one artifact
///
/// Sizes are kilobytes (bytes / 1024). `diff_kb` and `percent_diff` are only
/// set when the artifact exists in both manifests; `percent_diff` is also
/// unset when the old size is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Size in the old manifest
    #[serde(rename = "oldSizeKB")]
    pub old_size_kb: Option<f64>,
    /// Size in the new manifest
    #[serde(rename = "newSizeKB")]
    pub new_size_kb: Option<f64>,
    /// New minus old
    #[serde(rename = "diffKB")]
    pub diff_kb: Option<f64>,
    /// Relative change, positive means growth
    #[serde(rename = "percentDiff")]
    pub percent_diff: Option<f64>,
}

impl ComparisonRecord {
    /// Record for an artifact present in both manifests
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_compare::compare::ComparisonRecord;
    ///
    /// let record = ComparisonRecord::between(100.0, 110.0);
    /// assert_eq!(record.diff_kb, Some(10.0));
    /// assert!((record.percent_diff.unwrap() - 10.0).abs() < 1e-9);
    /// ```
    pub fn between(old_size_kb: f64, new_size_kb: f64) -> Self {
        let diff_kb = new_size_kb - old_size_kb;
        let percent_diff = (old_size_kb != 0.0).then(|| diff_kb / old_size_kb * 100.0);

        Self {
            old_size_kb: Some(old_size_kb),
            new_size_kb: Some(new_size_kb),
            diff_kb: Some(diff_kb),
            percent_diff,
        }
    }

    /// Record for an artifact that disappeared
    pub fn only_old(old_size_kb: f64) -> Self {
        Self {
            old_size_kb: Some(old_size_kb),
            new_size_kb: None,
            diff_kb: None,
            percent_diff: None,
        }
    }

    /// Record for an artifact that appeared
    pub fn only_new(new_size_kb: f64) -> Self {
        Self {
            old_size_kb: None,
            new_size_kb: Some(new_size_kb),
            diff_kb: None,
            percent_diff: None,
        }
    }
}

/// Classification category of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    /// Grew by at least the threshold
    Bigger,
    /// Shrank by at least the threshold
    Smaller,
    /// Changed by less than the threshold
    Same,
    /// Only in the old manifest
    OnlyOld,
    /// Only in the new manifest
    OnlyNew,
}

impl Bucket {
    /// Every bucket, in report order
    pub const ALL: [Bucket; 5] = [
        Bucket::Bigger,
        Bucket::Smaller,
        Bucket::Same,
        Bucket::OnlyOld,
        Bucket::OnlyNew,
    ];

    /// Serialized key, also used as the report placeholder name
    pub fn key(self) -> &'static str {
        match self {
            Self::Bigger => "bigger",
            Self::Smaller => "smaller",
            Self::Same => "same",
            Self::OnlyOld => "onlyOld",
            Self::OnlyNew => "onlyNew",
        }
    }

    /// Human-readable section heading
    pub fn title(self) -> &'static str {
        match self {
            Self::Bigger => "Bigger",
            Self::Smaller => "Smaller",
            Self::Same => "About the same",
            Self::OnlyOld => "Removed",
            Self::OnlyNew => "Added",
        }
    }
}

/// Artifacts partitioned into the five buckets, each keyed by artifact name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Artifacts that grew
    pub bigger: BTreeMap<String, ComparisonRecord>,
    /// Artifacts that shrank
    pub smaller: BTreeMap<String, ComparisonRecord>,
    /// Artifacts within the threshold
    pub same: BTreeMap<String, ComparisonRecord>,
    /// Artifacts removed in the new manifest
    pub only_old: BTreeMap<String, ComparisonRecord>,
    /// Artifacts added in the new manifest
    pub only_new: BTreeMap<String, ComparisonRecord>,
}

impl ClassificationResult {
    /// Records of one bucket
    pub fn bucket(&self, bucket: Bucket) -> &BTreeMap<String, ComparisonRecord> {
        match bucket {
            Bucket::Bigger => &self.bigger,
            Bucket::Smaller => &self.smaller,
            Bucket::Same => &self.same,
            Bucket::OnlyOld => &self.only_old,
            Bucket::OnlyNew => &self.only_new,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut BTreeMap<String, ComparisonRecord> {
        match bucket {
            Bucket::Bigger => &mut self.bigger,
            Bucket::Smaller => &mut self.smaller,
            Bucket::Same => &mut self.same,
            Bucket::OnlyOld => &mut self.only_old,
            Bucket::OnlyNew => &mut self.only_new,
        }
    }

    /// Place a record; callers insert each name once
    pub(crate) fn insert(&mut self, bucket: Bucket, name: String, record: ComparisonRecord) {
        self.bucket_mut(bucket).insert(name, record);
    }

    /// Iterate buckets in report order
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &BTreeMap<String, ComparisonRecord>)> {
        Bucket::ALL.into_iter().map(move |b| (b, self.bucket(b)))
    }

    /// Number of artifacts across all buckets
    pub fn total(&self) -> usize {
        self.iter().map(|(_, records)| records.len()).sum()
    }

    /// True if any artifact grew past the threshold
    pub fn has_growth(&self) -> bool {
        !self.bigger.is_empty()
    }

    /// Find which bucket an artifact landed in
    pub fn find(&self, name: &str) -> Option<(Bucket, &ComparisonRecord)> {
        self.iter()
            .find_map(|(bucket, records)| records.get(name).map(|record| (bucket, record)))
    }
}
