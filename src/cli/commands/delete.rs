//! `passop delete` — remove a saved password.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::{PassopError, Result};
use crate::records::RemoveOutcome;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    let mut store = open_store(cli)?;

    // The store gates deletion on a confirmation callback; --force
    // answers yes, otherwise we ask the user first.
    let confirmed = if force {
        true
    } else {
        Confirm::new()
            .with_prompt("Do you really want to delete this password?")
            .default(false)
            .interact()
            .map_err(|e| PassopError::CommandFailed(format!("confirm prompt: {e}")))?
    };

    match store.remove(id, || confirmed)? {
        RemoveOutcome::Removed => output::success("Password deleted"),
        RemoveOutcome::NotPresent => {
            output::info(&format!("No saved password with id '{id}' — nothing to delete."))
        }
        RemoveOutcome::Cancelled => output::info("Cancelled."),
    }

    Ok(())
}
