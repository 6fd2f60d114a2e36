//! Terminal report formatting

use crate::compare::{Bucket, ClassificationResult, ComparisonRecord};
use crate::fmt::{format_kb, format_optional, format_percent, format_signed_kb, CHART};
use console::{style, Color};

const NAME_WIDTH: usize = 40;

fn bucket_color(bucket: Bucket) -> Color {
    match bucket {
        Bucket::Bigger => Color::Red,
        Bucket::Smaller => Color::Green,
        Bucket::Same => Color::White,
        Bucket::OnlyOld => Color::Yellow,
        Bucket::OnlyNew => Color::Cyan,
    }
}

/// Print the classification grouped by bucket
///
/// The `same` bucket is only counted, not listed, to keep the output focused
/// on what changed.
pub fn print_comparison_report(result: &ClassificationResult, threshold_percent: f64) {
    println!();
    println!("{} {}", CHART, style("Bundle Size Comparison").bold());
    println!("{}", style("━".repeat(80)).dim());
    println!("   {}", style(summary_line(result)).dim());
    println!(
        "   {}",
        style(format!("Threshold: {}%", threshold_percent)).dim()
    );

    for bucket in [Bucket::Bigger, Bucket::Smaller, Bucket::OnlyOld, Bucket::OnlyNew] {
        print_bucket(result, bucket);
    }

    println!();
    println!("{}", style("━".repeat(80)).dim());
}

fn print_bucket(result: &ClassificationResult, bucket: Bucket) {
    let records = result.bucket(bucket);
    if records.is_empty() {
        return;
    }

    println!();
    println!(
        "{} {}",
        style(bucket.title()).fg(bucket_color(bucket)).bold(),
        style(format!("({})", records.len())).dim()
    );
    println!(
        "   {:<width$} {:>12} {:>12} {:>12} {:>10}",
        "Artifact",
        "Old",
        "New",
        "Diff",
        "Diff %",
        width = NAME_WIDTH
    );

    for (name, record) in records {
        println!("   {}", format_row(name, record));
    }
}

/// One aligned table row for an artifact
pub fn format_row(name: &str, record: &ComparisonRecord) -> String {
    format!(
        "{:<width$} {:>12} {:>12} {:>12} {:>10}",
        truncate(name, NAME_WIDTH),
        format_optional(record.old_size_kb, format_kb),
        format_optional(record.new_size_kb, format_kb),
        format_optional(record.diff_kb, format_signed_kb),
        format_optional(record.percent_diff, format_percent),
        width = NAME_WIDTH
    )
}

/// Bucket counts in one line, e.g. "1 bigger, 0 smaller, 3 same, 0 removed, 2 added"
pub fn summary_line(result: &ClassificationResult) -> String {
    format!(
        "{} bigger, {} smaller, {} same, {} removed, {} added",
        result.bigger.len(),
        result.smaller.len(),
        result.same.len(),
        result.only_old.len(),
        result.only_new.len()
    )
}

/// Truncate to `max_len` characters, ending in "..." when shortened
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_counts_each_bucket() {
        let mut result = ClassificationResult::default();
        result.insert(Bucket::Bigger, "main".to_string(), ComparisonRecord::between(100.0, 120.0));
        result.insert(Bucket::OnlyNew, "a".to_string(), ComparisonRecord::only_new(1.0));
        result.insert(Bucket::OnlyNew, "b".to_string(), ComparisonRecord::only_new(2.0));

        assert_eq!(
            summary_line(&result),
            "1 bigger, 0 smaller, 0 same, 0 removed, 2 added"
        );
    }

    #[test]
    fn test_format_row_includes_all_columns() {
        let row = format_row("main", &ComparisonRecord::between(100.0, 110.0));
        assert!(row.starts_with("main"));
        assert!(row.contains("100.00 KB"));
        assert!(row.contains("110.00 KB"));
        assert!(row.contains("+10.00 KB"));
        assert!(row.contains("+10.00%"));
    }

    #[test]
    fn test_truncate_with_long_string_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a very long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_is_char_boundary_safe() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
