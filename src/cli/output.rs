//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::records::Record;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Mask a password for display: one mask char per character.
pub fn mask(password: &str, mask_char: char) -> String {
    mask_char.to_string().repeat(password.chars().count())
}

/// Print a table of records (Id, Site, Username, Password).
///
/// Passwords are masked unless `reveal` is set.
pub fn print_records_table(records: &[Record], reveal: bool, mask_char: char) {
    if records.is_empty() {
        info("No passwords saved yet.");
        tip("Run `passop add` to save your first password.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Site", "Username", "Password"]);

    for r in records {
        let password = if reveal {
            r.password.clone()
        } else {
            mask(&r.password, mask_char)
        };
        table.add_row(vec![
            r.id.clone(),
            r.site.clone(),
            r.username.clone(),
            password,
        ]);
    }

    println!("{table}");
}
