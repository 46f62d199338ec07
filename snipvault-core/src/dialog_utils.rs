//! Dialog utility functions for parsing and formatting snippet fields
//!
//! These functions handle the conversion between free-text prompt input and
//! the structured values stored on a [`Snippet`](crate::models::Snippet).

use std::path::{Path, PathBuf};

/// Parses a comma-separated tag list.
///
/// Each tag is trimmed of surrounding whitespace and empty segments are
/// dropped, so trailing commas do not produce blank tags.
///
/// # Examples
/// ```
/// use snipvault_core::dialog_utils::parse_tags;
///
/// let tags = parse_tags(" rust, cli ,, io ");
/// assert_eq!(tags, vec!["rust", "cli", "io"]);
/// ```
#[must_use]
pub fn parse_tags(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Formats tags for display, joined by `", "`.
///
/// This is the inverse of `parse_tags` for tags without commas.
///
/// # Examples
/// ```
/// use snipvault_core::dialog_utils::format_tags;
///
/// let tags = vec!["x".to_string(), "y".to_string()];
/// assert_eq!(format_tags(&tags), "x, y");
/// ```
#[must_use]
pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Appends a `.json` extension when the chosen path has none.
#[must_use]
pub fn with_json_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("json")
    }
}
