//! Host collaborator traits
//!
//! The embedding environment supplies prompts, the active editor and a
//! message area. Commands reach all three through these traits, so the same
//! command handlers drive an editor extension, a terminal or a test double.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::SnippetResult;
use crate::view::DisplayEntry;

/// What an input prompt is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A unique snippet name
    Name,
    /// Comma-separated tags
    Tags,
}

/// A free-text input prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    /// What the answer will be used for
    pub kind: InputKind,
    /// Text shown to the user
    pub prompt: String,
}

impl InputRequest {
    /// Creates a request for the given kind and prompt text
    #[must_use]
    pub fn new(kind: InputKind, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
        }
    }
}

/// Interactive prompts offered by the host
///
/// Every method returns `None` (or `false`) when the user dismisses the
/// prompt; callers abort without side effects in that case.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Asks for a line of text
    async fn input(&self, request: InputRequest) -> Option<String>;

    /// Asks the user to choose one of `entries`; returns its index
    async fn pick(&self, placeholder: &str, entries: &[DisplayEntry]) -> Option<usize>;

    /// Shows a modal yes/no question; true only for an explicit "Yes"
    async fn confirm(&self, message: &str) -> bool;

    /// Asks where to save a file, suggesting `default_name`
    async fn save_path(&self, default_name: &str) -> Option<PathBuf>;

    /// Asks which file to open
    async fn open_path(&self) -> Option<PathBuf>;
}

/// The host's active edit context
pub trait Editor: Send + Sync {
    /// Returns true if an editor is focused
    fn is_active(&self) -> bool;

    /// Returns the currently selected text (empty when nothing is selected)
    fn selected_text(&self) -> String;

    /// Expands `code` into the active editor at the cursor
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot accept the insertion.
    fn insert_snippet(&self, code: &str) -> SnippetResult<()>;
}

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Failure message
    Error,
}

/// A transient, dismissible one-line message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Message text
    pub message: String,
}

impl Notice {
    /// Creates an informational notice
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Creates an error notice
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Returns true for error notices
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Displays notices to the user
pub trait Notifier: Send + Sync {
    /// Shows one notice
    fn notify(&self, notice: &Notice);
}

/// Everything a command needs from its host
pub trait Host: Prompter + Editor + Notifier {}

impl<T: Prompter + Editor + Notifier> Host for T {}
