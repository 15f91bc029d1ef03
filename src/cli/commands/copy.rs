//! `passop copy` — copy a record field to the clipboard.
//!
//! Clipboard access is best-effort with success-only feedback: if the
//! platform clipboard is unavailable the command still exits cleanly,
//! it just prints no confirmation.

use crate::cli::output;
use crate::cli::{open_store, Cli, Field};
use crate::errors::Result;

/// Execute the `copy` command.
pub fn execute(cli: &Cli, id: &str, field: Field) -> Result<()> {
    let store = open_store(cli)?;
    let record = store.find(id)?;
    let value = field.of(record).to_string();

    let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(value));
    if copied.is_ok() {
        output::success(&format!("Copied {} to clipboard", field.name()));
    }

    Ok(())
}
