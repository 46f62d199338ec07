//! Snippet model for reusable blocks of code.

use serde::{Deserialize, Serialize};

use crate::dialog_utils::format_tags;

/// A named, tagged block of reusable text
///
/// Every field is required when deserializing, so a record missing any of
/// them is rejected rather than silently admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Identifier derived from the creation time in milliseconds
    pub id: u64,
    /// Unique, case-sensitive name
    pub name: String,
    /// Free-form tags in display order
    pub tags: Vec<String>,
    /// Captured text (may contain host placeholder syntax)
    pub code: String,
}

impl Snippet {
    /// Creates a new snippet with the given id, name and code
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Vec::new(),
            code: code.into(),
        }
    }

    /// Sets the tags for this snippet
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Tags joined the way list views display them
    #[must_use]
    pub fn tag_summary(&self) -> String {
        format_tags(&self.tags)
    }
}
