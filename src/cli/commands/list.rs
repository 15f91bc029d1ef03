//! `passop list` — display all saved passwords in a table.

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, show: bool) -> Result<()> {
    let store = open_store(cli)?;
    let settings = Settings::load(&std::env::current_dir()?)?;

    output::info(&format!("{} saved password(s)", store.len()));
    output::print_records_table(store.snapshot(), show, settings.mask_char);

    if show && !store.is_empty() {
        output::warning("Passwords shown in plaintext.");
    }

    Ok(())
}
