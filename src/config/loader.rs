//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .bundle-compare.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_compare::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Reports go to {}", config.output_dir);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read directly instead of checking existence first
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .bundle-compare.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .bundle-compare.toml")?;

        config
            .validate()
            .context("Invalid .bundle-compare.toml configuration")?;

        debug!("Loaded {}", config_path.display());
        Ok(config)
    }

    /// Save config to .bundle-compare.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .bundle-compare.toml")?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(CONFIG_FILE_NAME).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct MockFileSystem {
        file_content: Option<String>,
        should_fail_read: bool,
        should_fail_write: bool,
        written_content: Arc<Mutex<Option<String>>>,
    }

    impl MockFileSystem {
        fn new() -> Self {
            Self {
                file_content: None,
                should_fail_read: false,
                should_fail_write: false,
                written_content: Arc::new(Mutex::new(None)),
            }
        }

        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                ..Self::new()
            }
        }

        fn with_read_error() -> Self {
            Self {
                should_fail_read: true,
                ..Self::new()
            }
        }

        fn with_write_error() -> Self {
            Self {
                should_fail_write: true,
                ..Self::new()
            }
        }

        fn get_written_content(&self) -> Option<String> {
            self.written_content.lock().unwrap().clone()
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if self.should_fail_read {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn write(&self, _path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
            if self.should_fail_write {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            let contents_str = String::from_utf8_lossy(contents.as_ref()).to_string();
            *self.written_content.lock().unwrap() = Some(contents_str);
            Ok(())
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        std::fs::write(&config_path, "threshold-percent = 2.0\noutput-dir = \"out\"\n").unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.threshold_percent, 2.0);
        assert_eq!(config.output_dir, "out");
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::new();
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_error() {
        let fs = MockFileSystem::with_content("invalid { toml syntax");
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);
        assert!(result.is_err(), "Expected error for invalid TOML");
    }

    #[test]
    fn test_loader_rejects_negative_threshold() {
        let fs = MockFileSystem::with_content("threshold-percent = -1.0");
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();
        assert!(err.to_string().contains("Invalid .bundle-compare.toml"));
        assert_eq!(crate::error::ErrorFormatter::exit_code(&err), 64);
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem::with_read_error();
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);

        // PermissionDenied must be propagated, not treated as a missing file
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_content("");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_handles_partial_config() {
        let fs = MockFileSystem::with_content("output-dir = \"size-report\"");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();

        assert_eq!(config.output_dir, "size-report");
        assert_eq!(config.threshold_percent, 5.0);
        assert!(config.template.is_none());
    }

    #[test]
    fn test_save_writes_valid_toml() {
        let config = ConfigFile {
            template: Some("report.html".to_string()),
            ..Default::default()
        };

        let fs = MockFileSystem::new();
        ConfigLoader::save_with_fs(&config, Path::new("/test"), &fs).unwrap();

        let content = fs.get_written_content().unwrap();
        assert!(content.contains("threshold-percent"));
        assert!(content.contains("report.html"));
    }

    #[test]
    fn test_save_with_write_error_returns_error() {
        let fs = MockFileSystem::with_write_error();
        let result = ConfigLoader::save_with_fs(&ConfigFile::default(), Path::new("/test"), &fs);

        assert!(result.unwrap_err().to_string().contains("Failed to write"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = tempfile::tempdir().unwrap();

        let config = ConfigFile {
            threshold_percent: 7.5,
            output_dir: "reports".to_string(),
            template: None,
        };

        ConfigLoader::save(&config, temp.path()).unwrap();
        assert!(ConfigLoader::exists(temp.path()));

        let loaded = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_exists_returns_false_for_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(!ConfigLoader::exists(temp.path()));
    }
}
