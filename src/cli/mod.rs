//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::{PassopError, Result};
use crate::records::{Record, RecordStore};
use crate::storage::FileBackend;

/// PassOP CLI: local-first password manager.
#[derive(Parser)]
#[command(name = "passop", about = "Your own password manager", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage directory (default: .passop, or storage_dir from .passop.toml)
    #[arg(long, global = true, env = "PASSOP_STORAGE_DIR")]
    pub storage_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Save a new password (prompts for missing fields)
    Add {
        /// Website URL
        site: Option<String>,
        /// Username for the site
        username: Option<String>,
        /// Password value (omit for interactive prompt)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List saved passwords in a table
    List {
        /// Show passwords in plaintext instead of masked
        #[arg(long)]
        show: bool,
    },

    /// Edit a saved password (prompts are prefilled with current values)
    Edit {
        /// Record id (shown by `list`)
        id: String,
        /// Replacement site (omit for interactive prompt)
        #[arg(long)]
        site: Option<String>,
        /// Replacement username (omit for interactive prompt)
        #[arg(long)]
        username: Option<String>,
        /// Replacement password (omit for interactive prompt)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Delete a saved password
    Delete {
        /// Record id (shown by `list`)
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Copy a field to the clipboard
    Copy {
        /// Record id (shown by `list`)
        id: String,
        /// Which field to copy
        #[arg(short, long, value_enum, default_value_t = Field::Password)]
        field: Field,
    },

    /// Print a field to stdout (script-friendly)
    Get {
        /// Record id (shown by `list`)
        id: String,
        /// Which field to print
        #[arg(short, long, value_enum, default_value_t = Field::Password)]
        field: Field,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// A record field addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Field {
    Site,
    Username,
    Password,
}

impl Field {
    /// The field's value on a record.
    pub fn of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Field::Site => &record.site,
            Field::Username => &record.username,
            Field::Password => &record.password,
        }
    }

    /// Lowercase name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Site => "site",
            Field::Username => "username",
            Field::Password => "password",
        }
    }
}

// Clap needs Display for `default_value_t`; the output must match the
// value-enum spelling.
impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the storage directory from the CLI flag or `.passop.toml`.
pub fn storage_dir(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    match &cli.storage_dir {
        Some(dir) => Ok(cwd.join(dir)),
        None => {
            let settings = Settings::load(&cwd)?;
            Ok(settings.storage_path(&cwd))
        }
    }
}

/// Open the record store over the resolved storage directory.
pub fn open_store(cli: &Cli) -> Result<RecordStore<FileBackend>> {
    RecordStore::load(FileBackend::new(storage_dir(cli)?))
}

/// Prompt for a text field, optionally prefilled with a current value.
pub fn prompt_field(prompt: &str, initial: Option<&str>) -> Result<String> {
    let mut input = dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(current) = initial {
        input = input.with_initial_text(current);
    }
    input
        .interact_text()
        .map_err(|e| PassopError::CommandFailed(format!("input prompt: {e}")))
}

/// Get a password value, trying in order:
/// 1. Inline `--password` flag (with a shell-history warning)
/// 2. Piped stdin
/// 3. Interactive hidden prompt
pub fn password_input(flag_value: Option<&str>, prompt: &str) -> Result<String> {
    use std::io::{self, IsTerminal, Read};

    if let Some(v) = flag_value {
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(v.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PassopError::CommandFailed(format!("password prompt: {e}")))
}
