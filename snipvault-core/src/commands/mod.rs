//! User-facing snippet commands
//!
//! Each command reads the store, computes a new collection, writes it back
//! and refreshes the list view. Commands suspend only while waiting on host
//! prompts; a dismissed prompt aborts the command with nothing persisted and
//! no refresh.
//!
//! [`SnippetCommands::run`] is the command boundary: every outcome and error
//! becomes at most one [`Notice`] for the host, and nothing propagates
//! further.

mod handlers;

use std::sync::Arc;

use crate::config::AppSettings;
use crate::error::SnippetResult;
use crate::host::{Host, Notice};
use crate::view::{DisplayEntry, ListViewAdapter};

/// A user-facing command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save the active selection as a new snippet
    SaveSelection,
    /// Pick a snippet from a menu and insert it
    InsertViaPicker,
    /// Pick a snippet from a menu and delete it
    DeleteViaPicker,
    /// Delete every snippet after confirmation
    DeleteAll,
    /// Export the collection to a JSON file
    Export,
    /// Merge snippets from a JSON file
    Import,
    /// Insert the snippet behind a list entry
    InsertEntry(DisplayEntry),
    /// Delete the snippet behind a list entry
    DeleteEntry(DisplayEntry),
}

impl Command {
    /// Returns the host command identifier
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SaveSelection => "snipvault.saveSnippet",
            Self::InsertViaPicker => "snipvault.insertSnippetPopup",
            Self::DeleteViaPicker => "snipvault.deleteSnippetPopup",
            Self::DeleteAll => "snipvault.deleteAllSnippets",
            Self::Export => "snipvault.exportSnippets",
            Self::Import => "snipvault.importSnippets",
            Self::InsertEntry(_) => "snipvault.insertSnippet",
            Self::DeleteEntry(_) => "snipvault.deleteSnippet",
        }
    }

    /// Returns the human-readable title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SaveSelection => "Save Selection as Snippet",
            Self::InsertViaPicker => "Insert Snippet",
            Self::DeleteViaPicker => "Delete Snippet",
            Self::DeleteAll => "Delete All Snippets",
            Self::Export => "Export Snippets",
            Self::Import => "Import Snippets",
            Self::InsertEntry(_) => "Insert",
            Self::DeleteEntry(_) => "Delete",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// How a command ended when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran to completion, optionally with a message for the user
    Completed(Option<String>),
    /// The user dismissed a prompt; nothing changed
    Cancelled,
}

/// Per-host command options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    /// File name suggested by the export dialog
    pub default_export_name: String,
    /// Ask before deleting a snippet picked from a menu
    pub confirm_delete: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self::from(&AppSettings::default())
    }
}

impl From<&AppSettings> for CommandOptions {
    fn from(settings: &AppSettings) -> Self {
        Self {
            default_export_name: settings.export.default_file_name.clone(),
            confirm_delete: settings.ui.confirm_delete,
        }
    }
}

/// Command handlers over a shared store and list view
#[derive(Debug, Clone)]
pub struct SnippetCommands {
    view: Arc<ListViewAdapter>,
    options: CommandOptions,
}

impl SnippetCommands {
    /// Creates command handlers with default options
    #[must_use]
    pub fn new(view: Arc<ListViewAdapter>) -> Self {
        Self::with_options(view, CommandOptions::default())
    }

    /// Creates command handlers with explicit options
    #[must_use]
    pub const fn with_options(view: Arc<ListViewAdapter>, options: CommandOptions) -> Self {
        Self { view, options }
    }

    /// Returns the list view the handlers refresh
    #[must_use]
    pub fn view(&self) -> &Arc<ListViewAdapter> {
        &self.view
    }

    /// Runs a command and reports its result to the host
    ///
    /// Returns the notice shown, if any. Cancellation and silent
    /// completions (such as an insert) show nothing.
    pub async fn run<H: Host + ?Sized>(&self, command: Command, host: &H) -> Option<Notice> {
        let id = command.id();
        tracing::debug!("Running {}", id);

        let notice = match self.execute(command, host).await {
            Ok(CommandOutcome::Completed(message)) => message.map(Notice::info),
            Ok(CommandOutcome::Cancelled) => {
                tracing::debug!("{} cancelled", id);
                None
            }
            Err(e) if e.is_informational() => Some(Notice::info(e.to_string())),
            Err(e) => {
                tracing::warn!("{} failed: {}", id, e);
                Some(Notice::error(e.to_string()))
            }
        };

        if let Some(ref notice) = notice {
            host.notify(notice);
        }
        notice
    }

    /// Runs a command and returns its raw result
    ///
    /// # Errors
    ///
    /// Returns the `SnippetError` that stopped the command.
    pub async fn execute<H: Host + ?Sized>(
        &self,
        command: Command,
        host: &H,
    ) -> SnippetResult<CommandOutcome> {
        match command {
            Command::SaveSelection => self.save_selection(host).await,
            Command::InsertViaPicker => self.insert_via_picker(host).await,
            Command::DeleteViaPicker => self.delete_via_picker(host).await,
            Command::DeleteAll => self.delete_all(host).await,
            Command::Export => self.export(host).await,
            Command::Import => self.import(host).await,
            Command::InsertEntry(entry) => self.insert_entry(host, &entry),
            Command::DeleteEntry(entry) => self.delete_entry(&entry),
        }
    }
}
