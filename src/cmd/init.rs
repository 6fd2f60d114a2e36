//! Init command implementation
//!
//! Handles the `bundle-compare init` command which writes a default
//! `.bundle-compare.toml` to the current directory

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::fmt::{CHECKMARK, INFO, SPARKLES, WARNING};

/// Create a `.bundle-compare.toml` with default settings
///
/// Does nothing if the file already exists.
///
/// # Examples
///
/// ```no_run
/// use bundle_compare::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    let project_root = env::current_dir()?;
    init_in(&project_root)?;
    Ok(())
}

/// Write the default config into `project_root`
///
/// Returns `false` if a config file was already present.
pub fn init_in(project_root: &Path) -> Result<bool> {
    if ConfigLoader::exists(project_root) {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(false);
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Settings:", INFO);
    println!(
        "   {} threshold-percent = {}",
        style("•").dim(),
        style(config.threshold_percent).green()
    );
    println!(
        "   {} output-dir = {}",
        style("•").dim(),
        style(&config.output_dir).green()
    );
    println!();
    println!(
        "{} Run {} to compare two builds",
        SPARKLES,
        style("bundle-compare compare <OLD> <NEW>").cyan()
    );

    Ok(true)
}
