//! Pairwise manifest comparison
//!
//! Takes two normalized manifests and partitions the union of their artifact
//! names into five buckets: bigger, smaller, same, only-old and only-new.

mod classifier;
mod types;

pub use classifier::{classify, Classifier, CompareError, DEFAULT_THRESHOLD_PERCENT};
pub use types::{Bucket, ClassificationResult, ComparisonRecord};
