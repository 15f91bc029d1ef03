//! `passop get` — print a single record field to stdout.

use crate::cli::{open_store, Cli, Field};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, id: &str, field: Field) -> Result<()> {
    let store = open_store(cli)?;
    let record = store.find(id)?;

    println!("{}", field.of(record));

    Ok(())
}
