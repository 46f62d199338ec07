//! `SnipVault` CLI - Command-line host for the `SnipVault` snippet manager
//!
//! Runs the snippet commands against the persisted collection, taking
//! answers from arguments and falling back to terminal prompts.

mod format;
mod terminal;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use snipvault_core::{
    Command, CommandOptions, ConfigManager, ListViewAdapter, SnipVaultError, SnippetCommands,
    SnippetStore,
};
use tokio::io::AsyncReadExt;

use crate::terminal::{InsertTarget, Presets, TerminalHost};

/// `SnipVault` command-line interface for managing code snippets
#[derive(Parser)]
#[command(name = "snipvault")]
#[command(author, version, about = "SnipVault command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Save text as a new snippet
    #[command(about = "Save text from a file or stdin as a new snippet")]
    Save {
        /// Unique snippet name
        #[arg(short, long)]
        name: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,

        /// Read the snippet code from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Insert a snippet
    #[command(about = "Write a snippet's code to stdout or a file")]
    Insert {
        /// Snippet name (prompts with a menu if omitted)
        name: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a snippet
    #[command(about = "Delete a snippet")]
    Delete {
        /// Snippet name (prompts with a menu if omitted)
        name: Option<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every snippet
    #[command(about = "Delete all snippets")]
    DeleteAll {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Export snippets to a JSON file
    #[command(about = "Export all snippets to a JSON file")]
    Export {
        /// Output file path (".json" is appended if missing)
        path: Option<PathBuf>,
    },

    /// Import snippets from a JSON file
    #[command(about = "Merge snippets from a JSON file")]
    Import {
        /// Input file path
        path: Option<PathBuf>,
    },

    /// List all snippets
    #[command(about = "List all snippets")]
    List {
        /// Output format for the snippet list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for scripting
    Json,
    /// CSV format for spreadsheets
    Csv,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code);
}

/// Opens the collection and dispatches one subcommand
///
/// Returns the process exit code.
async fn run(cli: Cli) -> Result<i32, CliError> {
    let commands = open_commands(cli.config.as_deref())?;

    let (command, host) = match cli.command {
        Commands::List { format } => return cmd_list(&commands, format),
        Commands::Save { name, tags, file } => {
            let presets = save_presets(name, tags, file.as_ref())?;
            let selection = read_selection(file.as_ref()).await?;
            let host = TerminalHost::new(presets).with_selection(selection);
            (Command::SaveSelection, host)
        }
        Commands::Insert { name, output } => {
            ensure_exists(&commands, name.as_deref())?;
            let target = output.map_or(InsertTarget::Stdout, InsertTarget::File);
            let host = TerminalHost::new(Presets {
                pick: name,
                ..Presets::default()
            })
            .with_target(target);
            (Command::InsertViaPicker, host)
        }
        Commands::Delete { name, yes } => {
            ensure_exists(&commands, name.as_deref())?;
            let host = TerminalHost::new(Presets {
                pick: name,
                assume_yes: yes,
                ..Presets::default()
            });
            (Command::DeleteViaPicker, host)
        }
        Commands::DeleteAll { yes } => {
            let host = TerminalHost::new(Presets {
                assume_yes: yes,
                ..Presets::default()
            });
            (Command::DeleteAll, host)
        }
        Commands::Export { path } => {
            let host = TerminalHost::new(Presets {
                path,
                ..Presets::default()
            });
            (Command::Export, host)
        }
        Commands::Import { path } => {
            let host = TerminalHost::new(Presets {
                path,
                ..Presets::default()
            });
            (Command::Import, host)
        }
    };

    let notice = commands.run(command, &host).await;
    Ok(match notice {
        Some(notice) if notice.is_error() => exit_codes::GENERAL_ERROR,
        _ => exit_codes::SUCCESS,
    })
}

/// Loads settings and wires the state file, store, list view and command
/// handlers together
///
/// `config_dir` overrides the platform configuration directory.
fn open_commands(config_dir: Option<&Path>) -> snipvault_core::error::Result<SnippetCommands> {
    let config_manager = match config_dir {
        Some(dir) => ConfigManager::from_user_path(&dir.to_string_lossy()),
        None => ConfigManager::new()?,
    };

    let settings = config_manager.load_settings()?;
    let backend = config_manager.open_state_store(&settings)?;
    tracing::debug!("Using state file {}", backend.path().display());

    let store = Arc::new(SnippetStore::new(Arc::new(backend)));
    let view = Arc::new(ListViewAdapter::new(store));
    Ok(SnippetCommands::with_options(
        view,
        CommandOptions::from(&settings),
    ))
}

/// Builds the prompt answers for `save`
///
/// A selection piped through stdin leaves no input for prompts, so the
/// name must then come from `--name`. Tags default to none whenever the
/// name is given on the command line.
fn save_presets(
    name: Option<String>,
    tags: Option<String>,
    file: Option<&PathBuf>,
) -> Result<Presets, CliError> {
    if file.is_none() && name.is_none() {
        return Err(CliError::NameRequired);
    }

    let tags = tags.or_else(|| name.as_ref().map(|_| String::new()));
    Ok(Presets {
        name,
        tags,
        ..Presets::default()
    })
}

/// Reads the text to save from a file, or from stdin when no file is given
async fn read_selection(file: Option<&PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(CliError::Io),
        None => {
            let mut selection = String::new();
            tokio::io::stdin()
                .read_to_string(&mut selection)
                .await
                .map_err(CliError::Io)?;
            Ok(selection)
        }
    }
}

/// Fails early when a snippet named on the command line does not exist
fn ensure_exists(commands: &SnippetCommands, name: Option<&str>) -> Result<(), CliError> {
    match name {
        Some(name) if commands.view().store().find_by_name(name).is_none() => {
            Err(CliError::SnippetNotFound(name.to_string()))
        }
        _ => Ok(()),
    }
}

/// List snippets command handler
fn cmd_list(commands: &SnippetCommands, format: OutputFormat) -> Result<i32, CliError> {
    let snippets = commands.view().store().list();

    match format {
        OutputFormat::Table => println!("{}", format::format_table(&snippets)),
        OutputFormat::Json => {
            let json = format::format_json(&snippets)
                .map_err(|e| CliError::Output(format!("Failed to serialize: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Csv => print!("{}", format::format_csv(&snippets)),
    }

    Ok(exit_codes::SUCCESS)
}

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Success - the command completed or was cancelled
    pub const SUCCESS: i32 = 0;
    /// General error - configuration failure or a command that ended in error
    pub const GENERAL_ERROR: i32 = 1;
    /// A snippet named on the command line does not exist
    pub const NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Failure opening settings or snippet state
    #[error("{0}")]
    Core(#[from] SnipVaultError),

    /// `save` read its selection from stdin but no name was given
    #[error("--name is required when the snippet is read from stdin")]
    NameRequired,

    /// Snippet not found
    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    /// Output formatting error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SnippetNotFound(_) => exit_codes::NOT_FOUND,
            Self::Core(_) | Self::NameRequired | Self::Output(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
