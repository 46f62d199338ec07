//! `SnipVault` Core Library
//!
//! This crate provides the core functionality for the `SnipVault` snippet
//! manager: the persisted snippet store, the list view adapter kept in sync
//! with it, JSON import/export, and the user-facing commands that drive them
//! through host-provided prompts and editor access.

pub mod commands;
pub mod config;
pub mod dialog_utils;
pub mod error;
pub mod export;
pub mod host;
pub mod import;
pub mod models;
pub mod snippet;
pub mod storage;
pub mod view;

pub use commands::{Command, CommandOptions, CommandOutcome, SnippetCommands};
pub use config::{AppSettings, ConfigManager};
pub use error::{
    ConfigError, ConfigResult, SnipVaultError, SnippetError, SnippetResult, StoreError,
    StoreResult,
};
pub use host::{Editor, Host, InputKind, InputRequest, Notice, NoticeLevel, Notifier, Prompter};
pub use models::Snippet;
pub use snippet::{IdAllocator, MergeReport, SnippetStore};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use view::{DisplayEntry, ListViewAdapter, SubscriptionId};
