//! `passop edit` — replace a saved password's fields.
//!
//! Prompts are prefilled with the record's current values so pressing
//! enter keeps a field as-is; `--site`/`--username`/`--password` skip
//! the corresponding prompt entirely.

use crate::cli::output;
use crate::cli::{open_store, password_input, prompt_field, Cli};
use crate::errors::Result;
use crate::records::Candidate;

/// Execute the `edit` command.
pub fn execute(
    cli: &Cli,
    id: &str,
    site: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let mut store = open_store(cli)?;

    // Look the record up first so the prompts can show current values.
    let current = store.find(id)?.clone();

    let site = match site {
        Some(s) => s.to_string(),
        None => prompt_field("Website URL", Some(&current.site))?,
    };
    let username = match username {
        Some(u) => u.to_string(),
        None => prompt_field("Username", Some(&current.username))?,
    };
    let password = match password {
        Some(p) => password_input(Some(p), "New password")?,
        None => {
            // Hidden prompt; an empty answer keeps the current password.
            let entered = password_input(None, "New password (empty keeps current)")?;
            if entered.is_empty() {
                current.password.clone()
            } else {
                entered
            }
        }
    };

    let record = store.update(id, Candidate::new(site, username, password))?;

    output::success(&format!("Password for '{}' updated", record.site));

    Ok(())
}
