//! JSON import of snippet files
//!
//! An import file must parse as a JSON array whose every element has the
//! snippet shape (`id`, `name`, `tags`, `code`) and a non-empty name. The
//! first record that fails these checks rejects the whole file, so nothing
//! malformed ever reaches the collection.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{SnippetError, SnippetResult};
use crate::models::Snippet;

/// Reads and validates the snippets in an import file
///
/// # Errors
///
/// Returns `FileIo` if the file cannot be read, `Parse` if it is not JSON,
/// or `Validation` for the first malformed record.
pub fn read_snippets(path: &Path) -> SnippetResult<Vec<Snippet>> {
    let content = fs::read_to_string(path).map_err(|e| SnippetError::FileIo {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let snippets = parse_snippets(&content, path)?;
    tracing::debug!("Read {} snippets from {}", snippets.len(), path.display());
    Ok(snippets)
}

/// Parses and validates an import document
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// Returns `Parse` if the content is not JSON or not an array, or
/// `Validation` for the first malformed record.
pub fn parse_snippets(content: &str, path: &Path) -> SnippetResult<Vec<Snippet>> {
    let document: Value = serde_json::from_str(content).map_err(|e| SnippetError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let Value::Array(records) = document else {
        return Err(SnippetError::Parse {
            path: path.to_path_buf(),
            reason: "expected a JSON array of snippets".to_string(),
        });
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

fn validate_record(index: usize, record: Value) -> SnippetResult<Snippet> {
    let snippet: Snippet =
        serde_json::from_value(record).map_err(|e| SnippetError::Validation {
            index,
            reason: e.to_string(),
        })?;

    if snippet.name.is_empty() {
        return Err(SnippetError::Validation {
            index,
            reason: "snippet name cannot be empty".to_string(),
        });
    }

    Ok(snippet)
}
