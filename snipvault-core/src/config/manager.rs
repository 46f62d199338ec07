//! Configuration manager for settings and state files
//!
//! This module provides the `ConfigManager` which locates the configuration
//! directory, loads and saves `config.toml`, and opens the state file the
//! snippet collection is persisted in.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::storage::FileKeyValueStore;

use super::settings::AppSettings;

/// File name of the settings file
const CONFIG_FILE: &str = "config.toml";

/// Directory name under the platform config directory
const APP_DIR: &str = "snipvault";

/// Configuration manager for `SnipVault`
///
/// Configuration is stored in `~/.config/snipvault/` by default.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Base directory for configuration files
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` with the default configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound(PathBuf::from("~/.config")))?
            .join(APP_DIR);
        Ok(Self { config_dir })
    }

    /// Creates a new `ConfigManager` with a custom configuration directory
    ///
    /// This is useful for testing or non-standard configurations.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Creates a `ConfigManager` from a user-supplied directory, expanding `~`
    #[must_use]
    pub fn from_user_path(path: &str) -> Self {
        Self::with_config_dir(PathBuf::from(shellexpand::tilde(path).as_ref()))
    }

    /// Returns the configuration directory path
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Ensures the configuration directory exists
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> ConfigResult<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).map_err(|e| {
                ConfigError::Write(format!(
                    "Failed to create config directory {}: {}",
                    self.config_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    // ========== Settings ==========

    /// Loads application settings from the configuration file
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.config_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read {}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Saves application settings to the configuration file
    ///
    /// Creates the configuration directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        self.ensure_config_dir()?;
        let path = self.config_dir.join(CONFIG_FILE);

        let content = toml::to_string_pretty(settings)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize: {e}")))?;

        fs::write(&path, content)
            .map_err(|e| ConfigError::Write(format!("Failed to write {}: {}", path.display(), e)))
    }

    // ========== State ==========

    /// Resolves the state file path from settings
    ///
    /// `~` is expanded; relative paths are taken from the config directory.
    #[must_use]
    pub fn state_file_path(&self, settings: &AppSettings) -> PathBuf {
        let raw = settings.storage.state_file.to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref());

        if expanded.is_absolute() {
            expanded
        } else {
            self.config_dir.join(expanded)
        }
    }

    /// Opens the file-backed key/value store for the snippet collection
    ///
    /// # Errors
    ///
    /// Returns an error if the state file exists but cannot be read.
    pub fn open_state_store(&self, settings: &AppSettings) -> ConfigResult<FileKeyValueStore> {
        let path = self.state_file_path(settings);
        Ok(FileKeyValueStore::open(&path)?)
    }
}
