//! Test fixtures for store, view and command testing.
//!
//! This module provides sample snippets, memory-backed stores with a
//! deterministic clock, and a scripted host that answers prompts from
//! queues and records everything the commands hand back to it.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use snipvault_core::{
    DisplayEntry, Editor, IdAllocator, InputRequest, ListViewAdapter, MemoryKeyValueStore,
    Notice, Notifier, Prompter, Snippet, SnippetResult, SnippetStore,
};

/// Creates a memory-backed store whose clock starts at `start` and ticks
/// once per allocation.
#[must_use]
pub fn memory_store_from(start: u64) -> Arc<SnippetStore> {
    let tick = AtomicU64::new(start);
    Arc::new(SnippetStore::with_id_allocator(
        Arc::new(MemoryKeyValueStore::new()),
        IdAllocator::with_clock(move || tick.fetch_add(1, Ordering::SeqCst)),
    ))
}

/// Creates a memory-backed store with a deterministic clock.
#[must_use]
pub fn memory_store() -> Arc<SnippetStore> {
    memory_store_from(1_700_000_000_000)
}

/// Creates a list view over a fresh memory-backed store.
#[must_use]
pub fn memory_view() -> Arc<ListViewAdapter> {
    Arc::new(ListViewAdapter::new(memory_store()))
}

/// A shell one-liner with tags.
#[must_use]
pub fn sample_shell_snippet() -> Snippet {
    Snippet::new(101, "list-files", "ls -la ${1:dir}")
        .with_tags(vec!["shell".to_string(), "fs".to_string()])
}

/// A multi-line Rust snippet.
#[must_use]
pub fn sample_rust_snippet() -> Snippet {
    Snippet::new(
        102,
        "test-module",
        "#[cfg(test)]\nmod tests {\n    use super::*;\n}\n",
    )
    .with_tags(vec!["rust".to_string()])
}

/// A snippet without tags.
#[must_use]
pub fn sample_untagged_snippet() -> Snippet {
    Snippet::new(103, "todo", "// TODO: $0")
}

/// All sample snippets in a fixed order.
#[must_use]
pub fn sample_collection() -> Vec<Snippet> {
    vec![
        sample_shell_snippet(),
        sample_rust_snippet(),
        sample_untagged_snippet(),
    ]
}

/// Host double that answers prompts from queues.
///
/// A prompt with no queued answer is treated as dismissed.
#[derive(Debug)]
pub struct ScriptedHost {
    active: bool,
    selection: String,
    inputs: Mutex<VecDeque<Option<String>>>,
    picks: Mutex<VecDeque<Option<usize>>>,
    confirms: Mutex<VecDeque<bool>>,
    save_paths: Mutex<VecDeque<Option<PathBuf>>>,
    open_paths: Mutex<VecDeque<Option<PathBuf>>>,
    /// Input prompts shown, in order
    pub prompts: Mutex<Vec<InputRequest>>,
    /// Questions asked through `confirm`, in order
    pub questions: Mutex<Vec<String>>,
    /// Default names offered by `save_path`
    pub suggested_names: Mutex<Vec<String>>,
    /// Code handed to `insert_snippet`
    pub inserted: Mutex<Vec<String>>,
    /// Notices shown
    pub notices: Mutex<Vec<Notice>>,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self {
            active: true,
            selection: String::new(),
            inputs: Mutex::default(),
            picks: Mutex::default(),
            confirms: Mutex::default(),
            save_paths: Mutex::default(),
            open_paths: Mutex::default(),
            prompts: Mutex::default(),
            questions: Mutex::default(),
            suggested_names: Mutex::default(),
            inserted: Mutex::default(),
            notices: Mutex::default(),
        }
    }
}

impl ScriptedHost {
    /// Host with an active editor and nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with no focused editor
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            active: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_selection(mut self, text: &str) -> Self {
        self.selection = text.to_string();
        self
    }

    #[must_use]
    pub fn answer_input(self, answer: Option<&str>) -> Self {
        self.inputs
            .lock()
            .unwrap()
            .push_back(answer.map(ToString::to_string));
        self
    }

    #[must_use]
    pub fn answer_pick(self, answer: Option<usize>) -> Self {
        self.picks.lock().unwrap().push_back(answer);
        self
    }

    #[must_use]
    pub fn answer_confirm(self, answer: bool) -> Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }

    #[must_use]
    pub fn answer_save(self, answer: Option<PathBuf>) -> Self {
        self.save_paths.lock().unwrap().push_back(answer);
        self
    }

    #[must_use]
    pub fn answer_open(self, answer: Option<PathBuf>) -> Self {
        self.open_paths.lock().unwrap().push_back(answer);
        self
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn inserted(&self) -> Vec<String> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedHost {
    async fn input(&self, request: InputRequest) -> Option<String> {
        self.prompts.lock().unwrap().push(request);
        self.inputs.lock().unwrap().pop_front().flatten()
    }

    async fn pick(&self, _placeholder: &str, entries: &[DisplayEntry]) -> Option<usize> {
        self.picks
            .lock()
            .unwrap()
            .pop_front()
            .flatten()
            .filter(|index| *index < entries.len())
    }

    async fn confirm(&self, message: &str) -> bool {
        self.questions.lock().unwrap().push(message.to_string());
        self.confirms.lock().unwrap().pop_front().unwrap_or(false)
    }

    async fn save_path(&self, default_name: &str) -> Option<PathBuf> {
        self.suggested_names
            .lock()
            .unwrap()
            .push(default_name.to_string());
        self.save_paths.lock().unwrap().pop_front().flatten()
    }

    async fn open_path(&self) -> Option<PathBuf> {
        self.open_paths.lock().unwrap().pop_front().flatten()
    }
}

impl Editor for ScriptedHost {
    fn is_active(&self) -> bool {
        self.active
    }

    fn selected_text(&self) -> String {
        self.selection.clone()
    }

    fn insert_snippet(&self, code: &str) -> SnippetResult<()> {
        self.inserted.lock().unwrap().push(code.to_string());
        Ok(())
    }
}

impl Notifier for ScriptedHost {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
