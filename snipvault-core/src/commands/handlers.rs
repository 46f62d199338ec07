//! Command handler bodies

use crate::dialog_utils::parse_tags;
use crate::error::{SnippetError, SnippetResult};
use crate::export;
use crate::host::{Host, InputKind, InputRequest};
use crate::import;
use crate::view::DisplayEntry;

use super::{CommandOutcome, SnippetCommands};

const NAME_PROMPT: &str = "Enter unique snippet name";
const TAGS_PROMPT: &str = "Enter tags separated by comma";
const INSERT_PLACEHOLDER: &str = "Select snippet to insert";
const DELETE_PLACEHOLDER: &str = "Select snippet to delete";
const DELETE_ALL_QUESTION: &str = "Are you sure you want to delete ALL snippets?";

fn done(message: &str) -> SnippetResult<CommandOutcome> {
    Ok(CommandOutcome::Completed(Some(message.to_string())))
}

impl SnippetCommands {
    pub(super) async fn save_selection<H: Host + ?Sized>(
        &self,
        host: &H,
    ) -> SnippetResult<CommandOutcome> {
        if !host.is_active() {
            return Err(SnippetError::NoActiveTarget);
        }

        let code = host.selected_text();
        if code.is_empty() {
            return Err(SnippetError::EmptySelection);
        }

        let name = host
            .input(InputRequest::new(InputKind::Name, NAME_PROMPT))
            .await
            .filter(|name| !name.is_empty());
        let Some(name) = name else {
            return Ok(CommandOutcome::Cancelled);
        };

        let store = self.view.store();
        if store.contains_name(&name) {
            return Err(SnippetError::DuplicateName(name));
        }

        let Some(tags_input) = host
            .input(InputRequest::new(InputKind::Tags, TAGS_PROMPT))
            .await
        else {
            return Ok(CommandOutcome::Cancelled);
        };

        store.create(&name, &parse_tags(&tags_input), &code)?;
        self.view.refresh();
        done("Snippet saved.")
    }

    pub(super) async fn insert_via_picker<H: Host + ?Sized>(
        &self,
        host: &H,
    ) -> SnippetResult<CommandOutcome> {
        let entries = self.view.entries();
        if entries.is_empty() {
            return Err(SnippetError::EmptyCollection(
                "No snippets available.".to_string(),
            ));
        }

        let Some(entry) = pick(host, INSERT_PLACEHOLDER, entries).await else {
            return Ok(CommandOutcome::Cancelled);
        };

        self.insert_entry(host, &entry)
    }

    pub(super) async fn delete_via_picker<H: Host + ?Sized>(
        &self,
        host: &H,
    ) -> SnippetResult<CommandOutcome> {
        let entries = self.view.entries();
        if entries.is_empty() {
            return Err(SnippetError::EmptyCollection(
                "No snippets to delete.".to_string(),
            ));
        }

        let Some(entry) = pick(host, DELETE_PLACEHOLDER, entries).await else {
            return Ok(CommandOutcome::Cancelled);
        };

        if self.options.confirm_delete {
            let question = format!("Delete snippet \"{}\"?", entry.label);
            if !host.confirm(&question).await {
                return Ok(CommandOutcome::Cancelled);
            }
        }

        self.view.store().delete_by_id(entry.payload.id)?;
        self.view.refresh();
        done("Snippet deleted.")
    }

    pub(super) async fn delete_all<H: Host + ?Sized>(
        &self,
        host: &H,
    ) -> SnippetResult<CommandOutcome> {
        if !host.confirm(DELETE_ALL_QUESTION).await {
            return Ok(CommandOutcome::Cancelled);
        }

        self.view.store().clear()?;
        self.view.refresh();
        done("All snippets deleted.")
    }

    pub(super) async fn export<H: Host + ?Sized>(&self, host: &H) -> SnippetResult<CommandOutcome> {
        let snippets = self.view.store().list();
        if snippets.is_empty() {
            return Err(SnippetError::EmptyCollection(
                "No snippets to export.".to_string(),
            ));
        }

        let Some(path) = host.save_path(&self.options.default_export_name).await else {
            return Ok(CommandOutcome::Cancelled);
        };

        export::write_snippets(&path, &snippets)?;
        done("Exported successfully.")
    }

    pub(super) async fn import<H: Host + ?Sized>(&self, host: &H) -> SnippetResult<CommandOutcome> {
        let Some(path) = host.open_path().await else {
            return Ok(CommandOutcome::Cancelled);
        };

        let incoming = import::read_snippets(&path)?;
        let report = self.view.store().merge_import(incoming)?;
        self.view.refresh();

        Ok(CommandOutcome::Completed(Some(format!(
            "Imported successfully. {}",
            report.summary()
        ))))
    }

    pub(super) fn insert_entry<H: Host + ?Sized>(
        &self,
        host: &H,
        entry: &DisplayEntry,
    ) -> SnippetResult<CommandOutcome> {
        if !host.is_active() {
            return Err(SnippetError::NoActiveTarget);
        }

        host.insert_snippet(&entry.payload.code)?;
        tracing::debug!("Inserted snippet '{}'", entry.label);
        Ok(CommandOutcome::Completed(None))
    }

    pub(super) fn delete_entry(&self, entry: &DisplayEntry) -> SnippetResult<CommandOutcome> {
        self.view.store().delete_by_id(entry.payload.id)?;
        self.view.refresh();
        Ok(CommandOutcome::Completed(None))
    }
}

async fn pick<H: Host + ?Sized>(
    host: &H,
    placeholder: &str,
    entries: Vec<DisplayEntry>,
) -> Option<DisplayEntry> {
    let index = host.pick(placeholder, &entries).await?;
    entries.into_iter().nth(index)
}
