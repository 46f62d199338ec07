//! Application settings model
//!
//! This module defines the application-wide settings stored in config.toml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::export::DEFAULT_EXPORT_FILE_NAME;

/// Application-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Persistence settings
    #[serde(default)]
    pub storage: StorageSettings,
    /// Export settings
    #[serde(default)]
    pub export: ExportSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// State file holding the snippet collection
    /// (relative to the config dir if not absolute)
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

fn default_state_file() -> PathBuf {
    PathBuf::from("state.json")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// File name suggested by the export dialog
    #[serde(default = "default_export_file_name")]
    pub default_file_name: String,
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            default_file_name: default_export_file_name(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Ask for confirmation before deleting a snippet picked from a menu
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            confirm_delete: default_true(),
        }
    }
}
