//! HTML report rendering
//!
//! Templates are plain HTML with `{{name}}` placeholders. Substitution is a
//! single pass over the template: inserted values are never scanned again, so
//! artifact names containing braces cannot introduce placeholders.

use crate::compare::{Bucket, ClassificationResult, ComparisonRecord};
use crate::error::BundleCompareError;
use crate::fmt::{format_kb, format_optional, format_percent, format_signed_kb};
use crate::infra::FileSystem;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Built-in report template
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{title}}</title>
  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 2rem; color: #24292f; }
    h1 { font-size: 1.5rem; }
    h2 { font-size: 1.15rem; margin-top: 2rem; }
    table { border-collapse: collapse; width: 100%; }
    th, td { padding: 0.35rem 0.75rem; border-bottom: 1px solid #d0d7de; text-align: right; }
    th:first-child, td:first-child { text-align: left; font-family: monospace; }
    .bigger h2 { color: #cf222e; }
    .smaller h2 { color: #1a7f37; }
    .note { color: #57606a; }
  </style>
</head>
<body>
  <h1>{{title}}</h1>
  <p class="note">Artifacts that changed by less than {{threshold}}% are listed as about the same.</p>

  <section class="bigger">
    <h2>Bigger ({{biggerCount}})</h2>
    <table>
      <thead><tr><th>Artifact</th><th>Old</th><th>New</th><th>Diff</th><th>Diff %</th></tr></thead>
      <tbody>{{bigger}}</tbody>
    </table>
  </section>

  <section class="smaller">
    <h2>Smaller ({{smallerCount}})</h2>
    <table>
      <thead><tr><th>Artifact</th><th>Old</th><th>New</th><th>Diff</th><th>Diff %</th></tr></thead>
      <tbody>{{smaller}}</tbody>
    </table>
  </section>

  <section class="same">
    <h2>About the same ({{sameCount}})</h2>
    <table>
      <thead><tr><th>Artifact</th><th>Old</th><th>New</th><th>Diff</th><th>Diff %</th></tr></thead>
      <tbody>{{same}}</tbody>
    </table>
  </section>

  <section class="only-old">
    <h2>Removed ({{onlyOldCount}})</h2>
    <table>
      <thead><tr><th>Artifact</th><th>Old</th><th>New</th><th>Diff</th><th>Diff %</th></tr></thead>
      <tbody>{{onlyOld}}</tbody>
    </table>
  </section>

  <section class="only-new">
    <h2>Added ({{onlyNewCount}})</h2>
    <table>
      <thead><tr><th>Artifact</th><th>Old</th><th>New</th><th>Diff</th><th>Diff %</th></tr></thead>
      <tbody>{{onlyNew}}</tbody>
    </table>
  </section>
</body>
</html>
"#;

/// Default report title
pub const DEFAULT_TITLE: &str = "Bundle size comparison";

/// Render one bucket as table rows, one `<tr>` per artifact
///
/// Absent values render as empty cells.
///
/// # Examples
///
/// ```
/// use bundle_compare::compare::ComparisonRecord;
/// use bundle_compare::report::html::render_group;
/// use std::collections::BTreeMap;
///
/// let group = BTreeMap::from([("vendor".to_string(), ComparisonRecord::only_old(50.0))]);
/// let rows = render_group(&group);
/// assert!(rows.contains("<td>vendor</td>"));
/// assert!(rows.contains("<td>50.00 KB</td>"));
/// ```
pub fn render_group(records: &BTreeMap<String, ComparisonRecord>) -> String {
    records
        .iter()
        .map(|(name, record)| render_row(name, record))
        .collect()
}

fn render_row(name: &str, record: &ComparisonRecord) -> String {
    format!(
        "\n  <tr>\n    <td>{}</td>\n    <td>{}</td>\n    <td>{}</td>\n    <td>{}</td>\n    <td>{}</td>\n  </tr>\n",
        escape_html(name),
        format_optional(record.old_size_kb, format_kb),
        format_optional(record.new_size_kb, format_kb),
        format_optional(record.diff_kb, format_signed_kb),
        format_optional(record.percent_diff, format_percent),
    )
}

/// Placeholder values for a classification result
///
/// Keys: `title`, `threshold`, one per bucket key (rendered rows) and
/// `<bucket>Count` (row count).
pub fn report_data(result: &ClassificationResult, threshold_percent: f64) -> HashMap<String, String> {
    let mut data = HashMap::new();
    data.insert("title".to_string(), DEFAULT_TITLE.to_string());
    data.insert("threshold".to_string(), format!("{}", threshold_percent));

    for bucket in Bucket::ALL {
        let records = result.bucket(bucket);
        data.insert(bucket.key().to_string(), render_group(records));
        data.insert(format!("{}Count", bucket.key()), records.len().to_string());
    }

    data
}

/// Substitute `{{name}}` placeholders in `template`
///
/// Unknown placeholders and unterminated `{{` are left as-is.
///
/// # Examples
///
/// ```
/// use bundle_compare::report::html::render;
/// use std::collections::HashMap;
///
/// let data = HashMap::from([("name".to_string(), "main".to_string())]);
/// assert_eq!(render("<b>{{name}}</b> {{other}}", &data), "<b>main</b> {{other}}");
/// ```
pub fn render(template: &str, data: &HashMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        match data.get(after_open[..end].trim()) {
            Some(value) => output.push_str(value),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}

/// Render a full report for `result`
pub fn render_report(template: &str, result: &ClassificationResult, threshold_percent: f64) -> String {
    render(template, &report_data(result, threshold_percent))
}

/// Read a template file, or return the built-in template when `path` is `None`
pub fn load_template<FS: FileSystem>(
    path: Option<&Path>,
    fs: &FS,
) -> Result<String, BundleCompareError> {
    let Some(path) = path else {
        return Ok(DEFAULT_TEMPLATE.to_string());
    };

    fs.read_to_string(path)
        .map_err(|source| BundleCompareError::TemplateNotReadable {
            path: path.to_path_buf(),
            source,
        })
}

/// Escape text for use in HTML element content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
