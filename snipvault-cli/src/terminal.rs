//! Terminal host for the snippet commands
//!
//! Answers supplied on the command line are used first; anything missing is
//! asked for on stderr and read from stdin. End of input counts as
//! dismissing the prompt.

use std::io::Write as _;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use snipvault_core::{
    DisplayEntry, Editor, InputKind, InputRequest, Notice, NoticeLevel, Notifier, Prompter,
    SnippetError, SnippetResult,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Answers taken from command-line arguments
#[derive(Debug, Default)]
pub struct Presets {
    /// Snippet name for the save command
    pub name: Option<String>,
    /// Raw tags text for the save command
    pub tags: Option<String>,
    /// Label to choose in a picker
    pub pick: Option<String>,
    /// Answer "yes" to every confirmation
    pub assume_yes: bool,
    /// File chosen in a save or open dialog
    pub path: Option<PathBuf>,
}

/// Where inserted code goes
#[derive(Debug, Clone, Default)]
pub enum InsertTarget {
    /// Write to standard output
    #[default]
    Stdout,
    /// Write to a file
    File(PathBuf),
}

/// Command host backed by the terminal
pub struct TerminalHost {
    presets: Mutex<Presets>,
    selection: String,
    target: InsertTarget,
    stdin: tokio::sync::Mutex<Lines<BufReader<Stdin>>>,
}

impl std::fmt::Debug for TerminalHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalHost")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl TerminalHost {
    /// Creates a host with the given preset answers
    #[must_use]
    pub fn new(presets: Presets) -> Self {
        Self {
            presets: Mutex::new(presets),
            selection: String::new(),
            target: InsertTarget::Stdout,
            stdin: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Sets the text the save command captures
    #[must_use]
    pub fn with_selection(mut self, selection: String) -> Self {
        self.selection = selection;
        self
    }

    /// Sets where inserted snippets are written
    #[must_use]
    pub fn with_target(mut self, target: InsertTarget) -> Self {
        self.target = target;
        self
    }

    fn presets(&self) -> std::sync::MutexGuard<'_, Presets> {
        self.presets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Prints a prompt on stderr and reads one line; `None` on end of input
    async fn read_line(&self, prompt: &str) -> Option<String> {
        eprint!("{prompt}: ");
        let mut lines = self.stdin.lock().await;
        match lines.next_line().await {
            Ok(Some(line)) => Some(line.trim_end_matches('\r').to_string()),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read from stdin: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl Prompter for TerminalHost {
    async fn input(&self, request: InputRequest) -> Option<String> {
        let preset = match request.kind {
            InputKind::Name => self.presets().name.take(),
            InputKind::Tags => self.presets().tags.take(),
        };
        if preset.is_some() {
            return preset;
        }
        self.read_line(&request.prompt).await
    }

    async fn pick(&self, placeholder: &str, entries: &[DisplayEntry]) -> Option<usize> {
        let preset = self.presets().pick.take();
        if let Some(label) = preset {
            return entries.iter().position(|entry| entry.label == label);
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.description.is_empty() {
                eprintln!("{:>3}) {}", index + 1, entry.label);
            } else {
                eprintln!("{:>3}) {}  [{}]", index + 1, entry.label, entry.description);
            }
        }

        let answer = self.read_line(placeholder).await?;
        let number: usize = answer.trim().parse().ok()?;
        number.checked_sub(1).filter(|index| *index < entries.len())
    }

    async fn confirm(&self, message: &str) -> bool {
        if self.presets().assume_yes {
            return true;
        }
        self.read_line(&format!("{message} [y/N]"))
            .await
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }

    async fn save_path(&self, default_name: &str) -> Option<PathBuf> {
        let preset = self.presets().path.take();
        if preset.is_some() {
            return preset;
        }

        let answer = self.read_line(&format!("Save to [{default_name}]")).await?;
        let answer = answer.trim();
        Some(PathBuf::from(if answer.is_empty() {
            default_name
        } else {
            answer
        }))
    }

    async fn open_path(&self) -> Option<PathBuf> {
        let preset = self.presets().path.take();
        if preset.is_some() {
            return preset;
        }

        let answer = self.read_line("File to import").await?;
        let answer = answer.trim();
        (!answer.is_empty()).then(|| PathBuf::from(answer))
    }
}

impl Editor for TerminalHost {
    fn is_active(&self) -> bool {
        true
    }

    fn selected_text(&self) -> String {
        self.selection.clone()
    }

    fn insert_snippet(&self, code: &str) -> SnippetResult<()> {
        match &self.target {
            InsertTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(code.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| SnippetError::FileIo {
                        path: PathBuf::from("<stdout>"),
                        reason: e.to_string(),
                    })
            }
            InsertTarget::File(path) => {
                std::fs::write(path, code).map_err(|e| SnippetError::FileIo {
                    path: path.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

impl Notifier for TerminalHost {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("Error: {}", notice.message),
        }
    }
}
