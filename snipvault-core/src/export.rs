//! JSON export of the snippet collection
//!
//! The export document is the snippet array itself, pretty-printed with
//! two-space indentation. There is no envelope or version field.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dialog_utils::with_json_extension;
use crate::error::{SnippetError, SnippetResult, StoreError};
use crate::models::Snippet;

/// Default file name suggested by the save dialog
pub const DEFAULT_EXPORT_FILE_NAME: &str = "snipvault-snippets.json";

/// Serializes snippets to the export document
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(snippets: &[Snippet]) -> SnippetResult<String> {
    serde_json::to_string_pretty(snippets).map_err(|e| {
        SnippetError::Store(StoreError::Serialize {
            key: "export".to_string(),
            reason: e.to_string(),
        })
    })
}

/// Writes snippets to `path`, appending `.json` when it has no extension
///
/// Returns the path actually written.
///
/// # Errors
///
/// Returns `FileIo` if the file cannot be written.
pub fn write_snippets(path: &Path, snippets: &[Snippet]) -> SnippetResult<PathBuf> {
    let path = with_json_extension(path);
    let content = to_json(snippets)?;

    fs::write(&path, content).map_err(|e| SnippetError::FileIo {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!("Exported {} snippets to {}", snippets.len(), path.display());
    Ok(path)
}
