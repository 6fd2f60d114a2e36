//! Compare command implementation
//!
//! Handles the `bundle-compare compare` command which classifies every
//! artifact of two stats manifests and writes the HTML report

use anyhow::{Context, Result};
use console::style;
use log::info;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::compare::{ClassificationResult, Classifier};
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::BundleCompareError;
use crate::fmt::{CHECKMARK, WARNING};
use crate::infra::{FileSystem, RealFileSystem};
use crate::manifest::{normalize, CanonicalAssetMap, ManifestError, ManifestLoader};
use crate::report::{self, JsonReport};

/// Command-line overrides for a comparison
///
/// Unset values fall back to `.bundle-compare.toml`, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Directory for `index.html`
    pub output_dir: Option<PathBuf>,
    /// Custom HTML template
    pub template: Option<PathBuf>,
    /// Classification threshold in percent
    pub threshold_percent: Option<f64>,
    /// Print JSON instead of the console summary
    pub json: bool,
    /// Fail when any artifact grew past the threshold
    pub check: bool,
}

/// Outcome of a comparison run
#[derive(Debug)]
pub struct CompareOutcome {
    /// Classified artifacts
    pub result: ClassificationResult,
    /// Threshold that was applied
    pub threshold_percent: f64,
    /// Path of the written HTML report
    pub report_path: PathBuf,
}

/// Compare two stats manifests and report size changes
///
/// # Examples
///
/// ```no_run
/// use bundle_compare::cmd::compare::{cmd_compare, CompareOptions};
///
/// cmd_compare("stats-main.json", "stats-branch.json", &CompareOptions::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either manifest doesn't exist or is malformed
/// - The threshold is invalid
/// - The report can't be written
/// - `check` is set and an artifact grew past the threshold
pub fn cmd_compare(old: &str, new: &str, options: &CompareOptions) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = ConfigLoader::load(&project_root)?;

    let outcome = run_compare(
        Path::new(old),
        Path::new(new),
        options,
        &config,
        &RealFileSystem,
    )?;

    if options.json {
        let json = JsonReport::new(
            &outcome.result,
            outcome.threshold_percent,
            Some(&outcome.report_path),
        );
        println!("{}", json.to_json_pretty()?);
    } else {
        report::print_comparison_report(&outcome.result, outcome.threshold_percent);
        println!();
        println!(
            "{} Report written to {}",
            CHECKMARK,
            style(outcome.report_path.display()).cyan()
        );
    }

    check_regression(&outcome, options.check)?;

    Ok(())
}

/// Load, normalize, classify and write the HTML report
pub fn run_compare<FS: FileSystem>(
    old: &Path,
    new: &Path,
    options: &CompareOptions,
    config: &ConfigFile,
    fs: &FS,
) -> Result<CompareOutcome> {
    // Both manifests are read before any parsing; old first so its error wins
    let old_contents = read_manifest(old, "Old", fs)?;
    let new_contents = read_manifest(new, "New", fs)?;

    let threshold_percent = options.threshold_percent.unwrap_or(config.threshold_percent);
    let classifier =
        Classifier::with_threshold(threshold_percent).map_err(BundleCompareError::from)?;

    let old_assets = parse_manifest(old, &old_contents)
        .with_context(|| format!("Failed to load old manifest {}", old.display()))?;
    let new_assets = parse_manifest(new, &new_contents)
        .with_context(|| format!("Failed to load new manifest {}", new.display()))?;

    let result = classifier.classify(&old_assets, &new_assets);
    info!(
        "Classified {} artifacts ({} old, {} new)",
        result.total(),
        old_assets.len(),
        new_assets.len()
    );

    let template_path = options
        .template
        .clone()
        .or_else(|| config.template.as_ref().map(PathBuf::from));
    let template = report::load_template(template_path.as_deref(), fs)?;
    let html = report::render_report(&template, &result, threshold_percent);

    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));
    let report_path = report::write_html_report(&output_dir, &html, fs)?;

    Ok(CompareOutcome {
        result,
        threshold_percent,
        report_path,
    })
}

fn read_manifest<FS: FileSystem>(
    path: &Path,
    label: &str,
    fs: &FS,
) -> Result<String, BundleCompareError> {
    fs.read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            BundleCompareError::ManifestNotFound {
                path: path.to_path_buf(),
                label: label.to_string(),
            }
        } else {
            ManifestError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into()
        }
    })
}

fn parse_manifest(path: &Path, contents: &str) -> Result<CanonicalAssetMap, BundleCompareError> {
    let manifest = ManifestLoader::parse(path, contents)?;
    Ok(normalize(&manifest)?)
}

fn check_regression(outcome: &CompareOutcome, check: bool) -> Result<()> {
    let grown = outcome.result.bigger.len();
    if grown == 0 {
        return Ok(());
    }

    if check {
        return Err(BundleCompareError::SizeRegression {
            count: grown,
            threshold_percent: outcome.threshold_percent,
        }
        .into());
    }

    eprintln!(
        "{} {} artifact(s) grew by {}% or more",
        WARNING,
        style(grown).yellow().bold(),
        outcome.threshold_percent
    );
    Ok(())
}
