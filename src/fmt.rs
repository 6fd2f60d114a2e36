//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format kilobytes with two decimals
///
/// # Examples
///
/// ```
/// use bundle_compare::fmt::format_kb;
///
/// assert_eq!(format_kb(100.0), "100.00 KB");
/// assert_eq!(format_kb(0.5), "0.50 KB");
/// ```
pub fn format_kb(kb: f64) -> String {
    format!("{:.2} KB", kb)
}

/// Format a size delta in kilobytes with an explicit sign
pub fn format_signed_kb(kb: f64) -> String {
    format!("{:+.2} KB", kb)
}

/// Format a percentage with two decimals and an explicit sign
pub fn format_percent(percent: f64) -> String {
    format!("{:+.2}%", percent)
}

/// Format an optional value, empty when absent
pub fn format_optional(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_default()
}
