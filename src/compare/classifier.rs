//! Artifact classification between two normalized manifests

use super::types::{Bucket, ClassificationResult, ComparisonRecord};
use crate::manifest::CanonicalAssetMap;
use log::debug;
use std::collections::BTreeSet;
use thiserror::Error;

/// Relative change (in percent) below which an artifact counts as unchanged
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 5.0;

/// Errors from classifier construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    /// Threshold is negative, NaN or infinite
    #[error("Invalid threshold: {0}% (must be a finite number >= 0)")]
    InvalidThreshold(f64),
}

/// Buckets artifacts by how their size changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    threshold_percent: f64,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
        }
    }
}

impl Classifier {
    /// Create a classifier with the default 5% threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom threshold
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidThreshold`] for negative or non-finite values.
    pub fn with_threshold(threshold_percent: f64) -> Result<Self, CompareError> {
        if !threshold_percent.is_finite() || threshold_percent < 0.0 {
            return Err(CompareError::InvalidThreshold(threshold_percent));
        }
        Ok(Self { threshold_percent })
    }

    /// Threshold in percent
    pub fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    /// Classify every artifact named in either map
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_compare::compare::{Bucket, Classifier};
    /// use bundle_compare::manifest::CanonicalAssetMap;
    ///
    /// let old = CanonicalAssetMap::from([
    ///     ("main".to_string(), 102_400),
    ///     ("vendor".to_string(), 51_200),
    /// ]);
    /// let new = CanonicalAssetMap::from([("main".to_string(), 112_640)]);
    ///
    /// let result = Classifier::new().classify(&old, &new);
    /// assert_eq!(result.find("main").map(|(b, _)| b), Some(Bucket::Bigger));
    /// assert_eq!(result.find("vendor").map(|(b, _)| b), Some(Bucket::OnlyOld));
    /// ```
    pub fn classify(&self, old: &CanonicalAssetMap, new: &CanonicalAssetMap) -> ClassificationResult {
        let names: BTreeSet<&str> = old.keys().chain(new.keys()).map(String::as_str).collect();

        let mut result = ClassificationResult::default();
        for name in names {
            let old_bytes = old.get(name).copied();
            let new_bytes = new.get(name).copied();
            if let Some((bucket, record)) = self.classify_sizes(old_bytes, new_bytes) {
                debug!("{} -> {}", name, bucket.key());
                result.insert(bucket, name.to_string(), record);
            }
        }

        result
    }

    /// Classify one artifact from its byte sizes in each manifest
    ///
    /// Presence decides first: a one-sided artifact is `OnlyOld`/`OnlyNew`
    /// without any arithmetic. Returns `None` only when both sides are absent.
    pub fn classify_sizes(
        &self,
        old_bytes: Option<u64>,
        new_bytes: Option<u64>,
    ) -> Option<(Bucket, ComparisonRecord)> {
        match (old_bytes.map(to_kb), new_bytes.map(to_kb)) {
            (Some(old_kb), Some(new_kb)) => {
                let record = ComparisonRecord::between(old_kb, new_kb);
                Some((self.bucket_for(&record), record))
            }
            (Some(old_kb), None) => Some((Bucket::OnlyOld, ComparisonRecord::only_old(old_kb))),
            (None, Some(new_kb)) => Some((Bucket::OnlyNew, ComparisonRecord::only_new(new_kb))),
            (None, None) => None,
        }
    }

    fn bucket_for(&self, record: &ComparisonRecord) -> Bucket {
        if let Some(percent) = record.percent_diff {
            if percent.abs() < self.threshold_percent {
                return Bucket::Same;
            }
        }

        // No percent means the old size was zero; any growth from nothing counts
        match record.diff_kb {
            Some(diff) if diff > 0.0 => Bucket::Bigger,
            Some(diff) if diff < 0.0 => Bucket::Smaller,
            _ => Bucket::Same,
        }
    }
}

/// Classify with the default threshold
pub fn classify(old: &CanonicalAssetMap, new: &CanonicalAssetMap) -> ClassificationResult {
    Classifier::default().classify(old, new)
}

fn to_kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(entries: &[(&str, u64)]) -> CanonicalAssetMap {
        entries
            .iter()
            .map(|(name, size)| (name.to_string(), *size))
            .collect()
    }

    #[test]
    fn test_growth_over_threshold_is_bigger() {
        let old = assets(&[("main", 102_400)]);
        let new = assets(&[("main", 112_640)]);

        let result = classify(&old, &new);

        let record = result.bigger["main"];
        assert_eq!(record.old_size_kb, Some(100.0));
        assert_eq!(record.new_size_kb, Some(110.0));
        assert_eq!(record.diff_kb, Some(10.0));
        assert!((record.percent_diff.unwrap() - 10.0).abs() < 1e-9);
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_shrink_over_threshold_is_smaller() {
        let old = assets(&[("main", 200 * 1024)]);
        let new = assets(&[("main", 150 * 1024)]);

        let result = classify(&old, &new);

        let record = result.smaller["main"];
        assert_eq!(record.diff_kb, Some(-50.0));
        assert!((record.percent_diff.unwrap() + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_change_is_same_regardless_of_sign() {
        let old = assets(&[("up", 100 * 1024), ("down", 100 * 1024), ("flat", 100 * 1024)]);
        let new = assets(&[("up", 103 * 1024), ("down", 97 * 1024), ("flat", 100 * 1024)]);

        let result = classify(&old, &new);

        assert_eq!(result.same.len(), 3);
        assert!(result.bigger.is_empty());
        assert!(result.smaller.is_empty());
    }

    #[test]
    fn test_exactly_at_threshold_is_not_same() {
        let old = assets(&[("main", 100 * 1024)]);
        let new = assets(&[("main", 105 * 1024)]);

        let result = classify(&old, &new);
        assert!(result.bigger.contains_key("main"));
    }

    #[test]
    fn test_only_old_artifact() {
        let old = assets(&[("vendor", 50 * 1024)]);
        let new = assets(&[]);

        let result = classify(&old, &new);

        let record = result.only_old["vendor"];
        assert_eq!(record.old_size_kb, Some(50.0));
        assert_eq!(record.new_size_kb, None);
        assert_eq!(record.diff_kb, None);
        assert_eq!(record.percent_diff, None);
    }

    #[test]
    fn test_only_new_artifact() {
        let old = assets(&[]);
        let new = assets(&[("chart", 2048)]);

        let result = classify(&old, &new);

        let record = result.only_new["chart"];
        assert_eq!(record.old_size_kb, None);
        assert_eq!(record.new_size_kb, Some(2.0));
    }

    #[test]
    fn test_zero_sized_old_artifact() {
        let old = assets(&[("empty", 0), ("still-empty", 0)]);
        let new = assets(&[("empty", 1024), ("still-empty", 0)]);

        let result = classify(&old, &new);

        assert!(result.bigger.contains_key("empty"));
        assert!(result.same.contains_key("still-empty"));
        assert_eq!(result.bigger["empty"].percent_diff, None);
    }

    #[test]
    fn test_empty_maps_yield_empty_result() {
        let result = classify(&assets(&[]), &assets(&[]));
        assert_eq!(result, ClassificationResult::default());
    }

    #[test]
    fn test_custom_threshold() {
        let old = assets(&[("main", 100 * 1024)]);
        let new = assets(&[("main", 103 * 1024)]);

        let strict = Classifier::with_threshold(1.0).unwrap();
        assert!(strict.classify(&old, &new).bigger.contains_key("main"));

        let lenient = Classifier::with_threshold(10.0).unwrap();
        assert!(lenient.classify(&old, &new).same.contains_key("main"));
    }

    #[test]
    fn test_zero_threshold_keeps_identical_sizes_in_same() {
        let classifier = Classifier::with_threshold(0.0).unwrap();
        let (bucket, _) = classifier.classify_sizes(Some(4096), Some(4096)).unwrap();
        assert_eq!(bucket, Bucket::Same);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        assert_eq!(
            Classifier::with_threshold(-1.0),
            Err(CompareError::InvalidThreshold(-1.0))
        );
        assert!(Classifier::with_threshold(f64::NAN).is_err());
        assert!(Classifier::with_threshold(f64::INFINITY).is_err());
    }

    #[test]
    fn test_classify_sizes_both_absent_is_none() {
        assert!(Classifier::new().classify_sizes(None, None).is_none());
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(Classifier::new().threshold_percent(), DEFAULT_THRESHOLD_PERCENT);
    }
}
