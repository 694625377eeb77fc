//! Directory resolution for config and log files.

use std::path::{Path, PathBuf};

use qsphere_config::default_config_dir;

use crate::CliError;

/// Directories used by one `qsph` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Debug-build JSON logs.
    pub log_dir: PathBuf,
}

impl AppDirs {
    /// Resolve directories, preferring an explicit config directory.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if no override is given and the OS does
    /// not expose a configuration directory.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self, CliError> {
        let config_dir = match config_override {
            Some(dir) => dir.to_path_buf(),
            None => default_config_dir()?,
        };
        Ok(Self::with_root(&config_dir))
    }

    /// Resolve directories and create them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if resolution or directory creation fails.
    pub fn resolve_and_create(config_override: Option<&Path>) -> Result<Self, CliError> {
        let dirs = Self::resolve(config_override)?;
        dirs.create_dirs()?;
        Ok(dirs)
    }

    /// Directories rooted at `config_dir`, without touching the filesystem.
    pub fn with_root(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            log_dir: config_dir.join("logs"),
        }
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), CliError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
