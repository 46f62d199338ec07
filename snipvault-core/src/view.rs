//! List view adapter
//!
//! Presents the snippet collection as selectable, labeled entries and
//! carries the change notification that tells the display layer to re-fetch
//! them. Entries are recomputed from the store on every call; the adapter
//! holds no snippet state of its own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::models::Snippet;
use crate::snippet::SnippetStore;

/// A selectable row in a snippet list or picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    /// Primary label (the snippet name)
    pub label: String,
    /// Secondary text (tags joined by ", ")
    pub description: String,
    /// Hover text (the snippet code)
    pub tooltip: String,
    /// The snippet this entry represents
    pub payload: Snippet,
}

impl From<Snippet> for DisplayEntry {
    fn from(snippet: Snippet) -> Self {
        Self {
            label: snippet.name.clone(),
            description: snippet.tag_summary(),
            tooltip: snippet.code.clone(),
            payload: snippet,
        }
    }
}

/// Handle returned by [`ListViewAdapter::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Adapter between the snippet store and a list display
pub struct ListViewAdapter {
    store: Arc<SnippetStore>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl std::fmt::Debug for ListViewAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListViewAdapter")
            .field("store", &self.store)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ListViewAdapter {
    /// Creates an adapter over the shared store
    #[must_use]
    pub fn new(store: Arc<SnippetStore>) -> Self {
        Self {
            store,
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Returns the store this adapter reads from
    #[must_use]
    pub fn store(&self) -> &Arc<SnippetStore> {
        &self.store
    }

    /// Returns the current entries, in collection order
    #[must_use]
    pub fn entries(&self) -> Vec<DisplayEntry> {
        self.store
            .list()
            .into_iter()
            .map(DisplayEntry::from)
            .collect()
    }

    /// Registers a listener invoked on every refresh
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Returns the number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Signals that previously obtained entries are stale
    pub fn refresh(&self) {
        // Listeners run outside the lock so they may call back into the adapter.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!("Refreshing snippet list ({} listeners)", listeners.len());
        for listener in listeners {
            listener();
        }
    }
}
