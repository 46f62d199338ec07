//! Configuration management for `SnipVault`
//!
//! This module provides the `ConfigManager` for loading and saving
//! settings in TOML format and locating the snippet state file.

mod manager;
pub mod settings;

pub use manager::ConfigManager;
pub use settings::{AppSettings, ExportSettings, StorageSettings, UiSettings};
