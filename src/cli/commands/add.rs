//! `passop add` — save a new password.

use crate::cli::output;
use crate::cli::{open_store, password_input, prompt_field, Cli};
use crate::errors::Result;
use crate::records::Candidate;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    site: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    // Collect the three fields, prompting for whatever was not given
    // on the command line.
    let site = match site {
        Some(s) => s.to_string(),
        None => prompt_field("Enter website URL", None)?,
    };
    let username = match username {
        Some(u) => u.to_string(),
        None => prompt_field("Enter username", None)?,
    };
    let password = password_input(password, "Enter password")?;

    let mut store = open_store(cli)?;
    let record = store.add(Candidate::new(site, username, password))?;

    output::success(&format!(
        "Password saved for '{}' (id: {}, {} total)",
        record.site,
        record.id,
        store.len()
    ));

    Ok(())
}
