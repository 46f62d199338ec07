//! Snippet store
//!
//! This module provides the `SnippetStore`, the single source of truth for
//! the snippet collection. The collection is persisted as a whole through a
//! [`KeyValueStore`] under [`SNIPPETS_KEY`].

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{SnippetError, SnippetResult, StoreError};
use crate::models::Snippet;
use crate::storage::{KeyValueStore, SNIPPETS_KEY};

use super::ids::IdAllocator;

/// Outcome of a merge-import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of incoming snippets appended to the collection
    pub imported: usize,
    /// Names of incoming snippets skipped because the name already existed
    pub skipped: Vec<String>,
}

impl MergeReport {
    /// Returns a summary string of the merge
    #[must_use]
    pub fn summary(&self) -> String {
        if self.skipped.is_empty() {
            format!("Imported {} snippet(s).", self.imported)
        } else {
            format!(
                "Imported {} snippet(s), skipped {} with existing names.",
                self.imported,
                self.skipped.len()
            )
        }
    }
}

/// Canonical snippet collection backed by durable key/value storage
///
/// Every mutation performs its read-modify-write while holding a single
/// writer lock. Reads go straight to the backend.
pub struct SnippetStore {
    backend: Arc<dyn KeyValueStore>,
    ids: IdAllocator,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for SnippetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetStore")
            .field("location", &self.backend.location())
            .finish_non_exhaustive()
    }
}

impl SnippetStore {
    /// Creates a store over the given backend
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_id_allocator(backend, IdAllocator::new())
    }

    /// Creates a store with a custom id allocator
    #[must_use]
    pub fn with_id_allocator(backend: Arc<dyn KeyValueStore>, ids: IdAllocator) -> Self {
        Self {
            backend,
            ids,
            write_lock: Mutex::new(()),
        }
    }

    // ========== Reads ==========

    /// Returns the current collection
    ///
    /// Yields an empty collection when nothing has been persisted yet. A
    /// stored value that cannot be decoded is logged and treated as empty.
    #[must_use]
    pub fn list(&self) -> Vec<Snippet> {
        let Some(value) = self.backend.get(SNIPPETS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_value::<Vec<Snippet>>(value) {
            Ok(snippets) => snippets,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable snippet collection in {}: {}",
                    self.backend.location(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Returns the number of snippets in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.list().len()
    }

    /// Returns true if the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Finds a snippet by exact name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<Snippet> {
        self.list().into_iter().find(|s| s.name == name)
    }

    /// Finds a snippet by id
    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<Snippet> {
        self.list().into_iter().find(|s| s.id == id)
    }

    /// Returns true if a snippet with this exact name exists
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.list().iter().any(|s| s.name == name)
    }

    // ========== Mutations ==========

    /// Overwrites the persisted collection
    ///
    /// Does not refresh any view; callers do that.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn replace(&self, snippets: &[Snippet]) -> SnippetResult<()> {
        let _guard = self.lock();
        self.persist(snippets)
    }

    /// Creates a snippet, appends it and persists the collection
    ///
    /// Tags are trimmed and empty tags dropped.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is taken (the collection is left
    /// unchanged), `EmptyName` if the name is empty, or a store error if
    /// no id is left or persistence fails.
    pub fn create(&self, name: &str, tags: &[String], code: &str) -> SnippetResult<Snippet> {
        let _guard = self.lock();
        let mut snippets = self.list();

        if name.is_empty() {
            return Err(SnippetError::EmptyName);
        }

        if snippets.iter().any(|s| s.name == name) {
            return Err(SnippetError::DuplicateName(name.to_string()));
        }

        let floor = snippets.iter().map(|s| s.id).max().unwrap_or(0);
        let id = self.ids.allocate(self.backend.as_ref(), floor)?;

        let tags = tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect();
        let snippet = Snippet::new(id, name, code).with_tags(tags);

        snippets.push(snippet.clone());
        self.persist(&snippets)?;

        tracing::info!("Created snippet '{}' (ID: {})", snippet.name, snippet.id);
        Ok(snippet)
    }

    /// Removes the first snippet with the given id
    ///
    /// Returns whether a snippet was removed. An absent id is not an error
    /// and leaves the stored collection untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn delete_by_id(&self, id: u64) -> SnippetResult<bool> {
        let _guard = self.lock();
        let mut snippets = self.list();

        let Some(position) = snippets.iter().position(|s| s.id == id) else {
            tracing::debug!("Delete requested for unknown snippet ID {}", id);
            return Ok(false);
        };

        let removed = snippets.remove(position);
        self.persist(&snippets)?;

        tracing::info!("Deleted snippet '{}' (ID: {})", removed.name, removed.id);
        Ok(true)
    }

    /// Replaces the collection with an empty one
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn clear(&self) -> SnippetResult<()> {
        let _guard = self.lock();
        self.persist(&[])?;
        tracing::info!("Cleared all snippets");
        Ok(())
    }

    /// Appends incoming snippets whose names are not already present
    ///
    /// Names are checked against the collection as it was before the
    /// merge; incoming snippets that share a name with each other are all
    /// admitted. Import order is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn merge_import(&self, incoming: Vec<Snippet>) -> SnippetResult<MergeReport> {
        let _guard = self.lock();
        let mut snippets = self.list();

        let existing: HashSet<String> = snippets.iter().map(|s| s.name.clone()).collect();
        let mut report = MergeReport::default();

        for snippet in incoming {
            if existing.contains(&snippet.name) {
                report.skipped.push(snippet.name);
            } else {
                snippets.push(snippet);
                report.imported += 1;
            }
        }

        self.persist(&snippets)?;

        tracing::info!(
            "Merged import: {} added, {} skipped",
            report.imported,
            report.skipped.len()
        );
        Ok(report)
    }

    // ========== Persistence ==========

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, snippets: &[Snippet]) -> SnippetResult<()> {
        let value = serde_json::to_value(snippets).map_err(|e| StoreError::Serialize {
            key: SNIPPETS_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.backend.update(SNIPPETS_KEY, value)?;
        Ok(())
    }
}
