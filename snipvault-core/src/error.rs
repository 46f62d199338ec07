//! Error types for `SnipVault`
//!
//! This module defines all error types used throughout the `SnipVault` library,
//! providing one-line messages for persistence, configuration and snippet
//! command failures.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for `SnipVault` operations
#[derive(Debug, Error)]
pub enum SnipVaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Key/value persistence errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Snippet command errors
    #[error("Snippet error: {0}")]
    Snippet(#[from] SnippetError),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to configuration file operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration directory could not be determined
    #[error("Configuration directory not found: {0}")]
    NotFound(PathBuf),

    /// Failed to parse configuration file
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Failed to write configuration file
    #[error("Failed to write configuration: {0}")]
    Write(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// Failed to open the state file
    #[error("Failed to open state: {0}")]
    State(#[from] StoreError),
}

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the backing state
    #[error("Failed to read state: {0}")]
    Read(String),

    /// Failed to write the backing state
    #[error("Failed to write state: {0}")]
    Write(String),

    /// Failed to serialize a value for storage
    #[error("Failed to serialize value for '{key}': {reason}")]
    Serialize {
        /// The storage key being written
        key: String,
        /// The reason for the failure
        reason: String,
    },

    /// No id above the current high-water mark fits in a `u64`
    #[error("No snippet ids left above {0}")]
    IdsExhausted(u64),
}

/// Errors surfaced by snippet commands
///
/// Every variant renders as a single line suitable for a transient
/// user-facing message.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// There are no snippets to act on
    #[error("{0}")]
    EmptyCollection(String),

    /// No editor is active to receive a snippet
    #[error("No active editor to insert into.")]
    NoActiveTarget,

    /// Save was attempted with nothing selected
    #[error("Select code first.")]
    EmptySelection,

    /// A snippet was saved without a name
    #[error("Snippet name cannot be empty.")]
    EmptyName,

    /// Snippet name already exists in the collection
    #[error("Snippet name must be unique: \"{0}\" already exists.")]
    DuplicateName(String),

    /// Snippet failed validation
    #[error("Invalid snippet at position {index}: {reason}")]
    Validation {
        /// Position of the offending record
        index: usize,
        /// The reason for validation failure
        reason: String,
    },

    /// Reading or writing an import/export file failed
    #[error("Failed to access {path}: {reason}")]
    FileIo {
        /// The file being accessed
        path: PathBuf,
        /// The underlying I/O failure
        reason: String,
    },

    /// Import file is not valid JSON
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// The parser's message
        reason: String,
    },

    /// Persisting the collection failed
    #[error("Failed to save snippets: {0}")]
    Store(#[from] StoreError),
}

impl SnippetError {
    /// Returns true for conditions that are reported as information
    /// rather than failure.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyCollection(_))
    }
}

/// Result type alias for `SnipVault` operations
pub type Result<T> = std::result::Result<T, SnipVaultError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for key/value storage operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for snippet operations
pub type SnippetResult<T> = std::result::Result<T, SnippetError>;
