//! Report output for classification results
//!
//! The comparison core hands a [`ClassificationResult`](crate::compare::ClassificationResult)
//! to one of these renderers:
//! - HTML file from a placeholder template
//! - Console summary
//! - JSON for CI/CD

pub mod html;
pub mod json;
pub mod terminal;

pub use html::{load_template, render_report, DEFAULT_TEMPLATE};
pub use json::JsonReport;
pub use terminal::print_comparison_report;

use crate::error::BundleCompareError;
use crate::infra::FileSystem;
use log::info;
use std::path::{Path, PathBuf};

/// File name of the HTML report inside the output directory
pub const REPORT_FILE_NAME: &str = "index.html";

/// Write `html` to `<output_dir>/index.html`, creating the directory if needed
///
/// Returns the path of the written report.
pub fn write_html_report<FS: FileSystem>(
    output_dir: &Path,
    html: &str,
    fs: &FS,
) -> Result<PathBuf, BundleCompareError> {
    fs.create_dir_all(output_dir)
        .map_err(|source| BundleCompareError::Io {
            context: format!("creating output directory {}", output_dir.display()),
            source,
        })?;

    let report_path = output_dir.join(REPORT_FILE_NAME);
    fs.write(&report_path, html)
        .map_err(|source| BundleCompareError::Io {
            context: format!("writing {}", report_path.display()),
            source,
        })?;

    info!("Wrote report to {}", report_path.display());
    Ok(report_path)
}
